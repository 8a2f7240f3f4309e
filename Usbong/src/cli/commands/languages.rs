//! CLI command for listing a tree's languages

use std::path::Path;

use crate::cli::progress::{SPEECH, heading};
use crate::localization::language_code;
use crate::tree::Tree;

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let tree = Tree::open(path)?;

    println!("{}", heading(&SPEECH, "Languages"));
    for language in tree.available_languages() {
        let base = if language == tree.base_language() { " (base)" } else { "" };
        println!("  {language:<16} {}{base}", language_code(&language));
    }

    Ok(())
}
