use colored::Colorize;
use fstree::Node;
use serde::Serialize;
use snafu::prelude::*;

use crate::cli::OutputFormat;

const EMPTY_TREE: &str = "(empty tree)";

/// Result of an operation, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Tree(Node),
    Summary(TreeSummary),
    Names(Vec<String>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSummary {
    pub nodes: usize,
    pub files: usize,
    pub directories: usize,
}

pub fn render(
    outcome: &Outcome,
    format: OutputFormat,
    use_color: bool,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Tree => Ok(render_text(outcome, use_color)),
        OutputFormat::Json => {
            let rendered = match outcome {
                Outcome::Tree(node) => serde_json::to_string_pretty(node),
                Outcome::Summary(summary) => serde_json::to_string_pretty(summary),
                Outcome::Names(names) => serde_json::to_string_pretty(names),
                Outcome::Empty => serde_json::to_string_pretty(&()),
            };
            rendered.context(JsonSnafu)
        }
    }
}

fn render_text(outcome: &Outcome, use_color: bool) -> String {
    match outcome {
        Outcome::Tree(node) => render_tree(node, use_color),
        Outcome::Summary(summary) => format!(
            "nodes: {}\nfiles: {}\ndirectories: {}",
            summary.nodes, summary.files, summary.directories
        ),
        Outcome::Names(names) => names.join("\n"),
        Outcome::Empty => EMPTY_TREE.to_string(),
    }
}

/// Draws the tree with box-drawing branches, one node per line.
pub fn render_tree(root: &Node, use_color: bool) -> String {
    let mut lines = vec![node_label(root, use_color)];
    push_children(root, "", use_color, &mut lines);
    lines.join("\n")
}

fn push_children(node: &Node, prefix: &str, use_color: bool, lines: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };

    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let (branch, indent) = if is_last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!("{prefix}{branch}{}", node_label(child, use_color)));
        push_children(child, &format!("{prefix}{indent}"), use_color, lines);
    }
}

fn node_label(node: &Node, use_color: bool) -> String {
    let name = match node {
        Node::Directory(directory) if !directory.name.ends_with('/') => {
            format!("{}/", directory.name)
        }
        _ => node.name().to_string(),
    };
    let name = match (use_color, node.is_directory()) {
        (false, _) => name,
        (true, true) => name.blue().bold().to_string(),
        (true, false) => name.normal().to_string(),
    };

    if node.meta().is_empty() {
        return name;
    }
    // Serializing a string-keyed map cannot fail
    let meta = serde_json::to_string(node.meta()).unwrap_or_default();
    if use_color {
        format!("{name} {}", meta.dimmed())
    } else {
        format!("{name} {meta}")
    }
}

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("Failed to serialize the result as JSON"))]
    JsonError { source: serde_json::Error },
}
