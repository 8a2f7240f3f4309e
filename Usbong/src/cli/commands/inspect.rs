//! CLI command for summarizing a tree document

use std::path::Path;

use crate::cli::progress::{SPEECH, TREE, dim, heading};
use crate::document::NodeType;
use crate::formats::name::NodeDescriptor;
use crate::localization::language_code;
use crate::tree::Tree;

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let tree = Tree::open(path)?;
    let document = tree.document();

    println!("{}", heading(&TREE, &path.display().to_string()));
    println!(
        "  Base language: {} ({})",
        tree.base_language(),
        language_code(tree.base_language())
    );
    println!("  Start node:    {}", document.start_node_name().unwrap_or("-"));
    println!();

    println!("{}", heading(&SPEECH, "Languages"));
    for language in tree.available_languages() {
        println!("  {language}");
    }
    println!();

    let names = document.node_names();
    println!("{}", heading(&TREE, &format!("Nodes ({})", names.len())));
    for (node_type, name) in names {
        let kind = match node_type {
            NodeType::TaskNode => NodeDescriptor::decode(name, tree.base_language())
                .task_node_type()
                .map_or_else(|| String::from("unknown"), |t| t.identifier().to_string()),
            other => other.tag().to_string(),
        };
        println!("  {:<24} {}", dim(&kind), name);
    }

    Ok(())
}
