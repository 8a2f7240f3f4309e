fn main() -> anyhow::Result<()> {
    usbong::cli::run_cli()
}
