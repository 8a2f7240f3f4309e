//! CLI command for walking through a tree on the terminal

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use console::style;

use crate::answers::ExportFormat;
use crate::cli::progress::{BULB, DISK, Marker, SPARKLE, dim, option_line, warn};
use crate::config::PlayerConfig;
use crate::formats::name::TaskNodeType;
use crate::node::{LineMode, Module};
use crate::tree::Tree;

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An end state was reached
    Finished,
    /// The user quit or input ran out
    Quit,
}

enum Action {
    Next,
    Back,
    Quit,
    Stay(Option<String>),
}

pub fn execute(
    path: &Path,
    language: Option<&str>,
    config: Option<&Path>,
    export_dir: &Path,
    format: Option<ExportFormat>,
) -> anyhow::Result<()> {
    let mut config = match config {
        Some(config_path) => PlayerConfig::load(config_path)?,
        None => PlayerConfig::default(),
    };
    if let Some(language) = language {
        config.language = Some(language.to_string());
    }
    if let Some(format) = format {
        config.export_format = format;
    }

    let mut tree = Tree::open_with_config(path, config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run_session(&mut tree, stdin.lock(), &mut stdout)? {
        Outcome::Finished => {
            let file = tree.write_export(export_dir)?;
            println!("{SPARKLE}Finished after {} nodes", tree.usbong_node_states().len());
            println!("{DISK}Answers written to {}", file.display());
        }
        Outcome::Quit => {
            println!("{}", dim("Quit before the end, no answers written"));
        }
    }

    Ok(())
}

/// Drive `tree` from line-based `input` until an end state or quit.
///
/// Numbers pick options (space or comma separated toggles on checklists),
/// other text fills inputs, an empty line moves on, `b` goes back and `q`
/// quits.
pub fn run_session<R: BufRead, W: Write>(
    tree: &mut Tree,
    mut input: R,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut line = String::new();
    loop {
        render(tree, out)?;
        if tree.current_node_is_end_state() {
            return Ok(Outcome::Finished);
        }

        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Outcome::Quit);
        }

        match interpret(tree, line.trim()) {
            Action::Quit => return Ok(Outcome::Quit),
            Action::Next => advance(tree, out)?,
            Action::Back => {
                if !tree.transition_to_previous() {
                    writeln!(out, "{}", warn("Already at the first node"))?;
                }
            }
            Action::Stay(Some(message)) => writeln!(out, "{}", warn(&message))?,
            Action::Stay(None) => {}
        }
    }
}

fn interpret(tree: &mut Tree, input: &str) -> Action {
    match input {
        "q" => return Action::Quit,
        "b" => return Action::Back,
        "" => return Action::Next,
        _ => {}
    }

    let task_type = tree.current_task_node_type();
    let node = tree.current_node_mut();

    if task_type == Some(TaskNodeType::Checklist) {
        let count = node.options().map_or(0, <[String]>::len);
        let mut indices = Vec::new();
        for part in input.split([',', ' ']).filter(|p| !p.is_empty()) {
            match parse_option(part) {
                Some(index) if index < count => indices.push(index),
                _ => return Action::Stay(Some(format!("No option '{part}'"))),
            }
        }
        for index in indices {
            node.toggle(index);
        }
        return Action::Stay(None);
    }

    if node.has_selection_module() {
        return match parse_option(input) {
            Some(index) if node.select(index) => Action::Next,
            _ => Action::Stay(Some(format!("No option '{input}'"))),
        };
    }

    let numeric = node
        .modules()
        .iter()
        .any(|m| matches!(m, Module::TextInput { numeric: true, .. }));
    if node.text_input().is_some() {
        if numeric && input.parse::<f64>().is_err() {
            return Action::Stay(Some(String::from("Enter a number")));
        }
        node.set_text(input);
        return Action::Next;
    }

    if task_type == Some(TaskNodeType::Date) {
        return match parse_date(input) {
            Some(date) => {
                node.set_date(date);
                Action::Next
            }
            None => Action::Stay(Some(String::from("Enter a date as YYYY-MM-DD"))),
        };
    }

    Action::Stay(Some(String::from("Press Enter to continue")))
}

fn advance<W: Write>(tree: &mut Tree, out: &mut W) -> io::Result<()> {
    if tree.should_prevent_transition_to_next_task_node() {
        return writeln!(out, "{}", warn("Choose an option first"));
    }
    if !tree.next_node_is_available() {
        return writeln!(out, "{}", warn("No way forward from here"));
    }

    tree.save_state_of_last_node();
    if !tree.transition_to_next() {
        writeln!(out, "{}", warn("No way forward from here"))?;
    }
    Ok(())
}

/// One-based option number to index
fn parse_option(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}

/// RFC 3339, or a plain date taken as local midnight
fn parse_date(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date);
    }
    let midnight = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .single()
        .map(|date| date.fixed_offset())
}

fn render<W: Write>(tree: &Tree, out: &mut W) -> io::Result<()> {
    let node = tree.current_node();
    writeln!(out)?;

    for module in node.modules() {
        match module {
            Module::Text(text) => writeln!(out, "{}", style(text).bold())?,
            Module::Image { name, path } => {
                let shown = path
                    .as_ref()
                    .map_or_else(|| format!("{name} (missing)"), |p| p.display().to_string());
                writeln!(out, "{}", dim(&format!("[image: {shown}]")))?;
            }
            Module::List(items) => {
                for item in items {
                    writeln!(out, "  {item}")?;
                }
            }
            Module::RadioButtons { options, selected } => {
                for (i, option) in options.iter().enumerate() {
                    let marker = if *selected == Some(i) { Marker::Chosen } else { Marker::Unchosen };
                    writeln!(out, "{}", option_line(i + 1, option, marker))?;
                }
            }
            Module::Checkboxes { options, selected } => {
                for (i, option) in options.iter().enumerate() {
                    let marker = if selected.contains(&i) { Marker::Checked } else { Marker::Unchecked };
                    writeln!(out, "{}", option_line(i + 1, option, marker))?;
                }
            }
            Module::TextInput { text, mode, unit, .. } => {
                let kind = match mode {
                    LineMode::SingleLine => "answer",
                    LineMode::MultiLine => "notes",
                };
                let unit = unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();
                writeln!(out, "{}", dim(&format!("[{kind}: {text}{unit}]")))?;
            }
            Module::Date(date) => {
                let shown = date.map_or_else(|| String::from("not set"), |d| d.to_rfc3339());
                writeln!(out, "{}", dim(&format!("[date: {shown}]")))?;
            }
        }
    }

    if tree.current_task_node_type() == Some(TaskNodeType::Checklist) {
        writeln!(
            out,
            "{}",
            dim(&format!("Tick at least {} to continue on the main path", tree.checklist_target()))
        )?;
    }

    for text in node.texts() {
        for (word, hint) in tree.hints().hints_in(text) {
            writeln!(out, "{BULB}{}: {hint}", style(word).italic())?;
        }
    }

    if !tree.current_node_is_end_state() {
        writeln!(out, "{}", dim("[number] choose  [text] answer  [enter] next  b back  q quit"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NoAssets;
    use crate::document::DocumentIndex;
    use crate::localization::Translator;

    const DOC: &str = r#"<process-definition lang="English">
    <start-state><transition to="textDisplay~Welcome"/></start-state>
    <task-node name="textDisplay~Welcome"><transition to="checkList~2~Pick"/></task-node>
    <task-node name="checkList~2~Pick">
        <task name="x"/><task name="y"/><task name="z"/>
        <transition to="textFieldNumerical~Age" name="Yes"/>
        <transition to="textDisplay~Welcome" name="No"/>
    </task-node>
    <task-node name="textFieldNumerical~Age"><transition to="end~Done"/></task-node>
    <end-state name="end~Done"/>
</process-definition>"#;

    fn tree() -> Tree {
        Tree::from_parts(
            DocumentIndex::parse(DOC).unwrap(),
            Translator::new("English"),
            PlayerConfig::default(),
            Box::new(NoAssets),
        )
        .unwrap()
    }

    fn play(tree: &mut Tree, input: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_session(tree, input.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_reaches_end() {
        let mut tree = tree();
        let (outcome, output) = play(&mut tree, "\n1, 3\n\nabc\n42\n");
        assert_eq!(outcome, Outcome::Finished);
        assert!(output.contains("Enter a number"));
        assert!(tree.current_node_is_end_state());
        assert_eq!(tree.usbong_node_states().len(), 3);
        assert_eq!(tree.generate_export().unwrap(), "A;Y;A,42;");
    }

    #[test]
    fn test_session_quits() {
        let mut tree = tree();
        let (outcome, _) = play(&mut tree, "\nq\n");
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(tree.history().len(), 2);
    }

    #[test]
    fn test_session_back_and_eof() {
        let mut tree = tree();
        let (outcome, output) = play(&mut tree, "b\n\nb\n");
        assert_eq!(outcome, Outcome::Quit);
        assert!(output.contains("Already at the first node"));
        assert_eq!(tree.history().len(), 1);
    }

    #[test]
    fn test_unknown_checklist_option() {
        let mut tree = tree();
        let (_, output) = play(&mut tree, "\n7\n");
        assert!(output.contains("No option '7'"));
        assert_eq!(tree.current_node().selected_count(), 0);
    }

    #[test]
    fn test_rejected_checklist_line_changes_nothing() {
        let mut tree = tree();
        let (_, output) = play(&mut tree, "\n1 9\n");
        assert!(output.contains("No option '9'"));
        assert_eq!(tree.current_node().selected_indices(), Vec::<usize>::new());

        play(&mut tree, "1 3\n");
        assert_eq!(tree.current_node().selected_indices(), vec![0, 2]);
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("1"), Some(0));
        assert_eq!(parse_option("0"), None);
        assert_eq!(parse_option("x"), None);
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-05-01T08:30:00+08:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-05-01T08:30:00+08:00");
        assert!(parse_date("2024-05-01").is_some());
        assert!(parse_date("May first").is_none());
    }
}
