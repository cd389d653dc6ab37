use std::path::PathBuf;

use clap::Parser;

use crate::cli::{ColorChoice, LogLevel, Operation, OutputFormat};

/// Load a tree description and run a traversal over it.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// YAML or JSON file describing the tree
    pub tree_file: PathBuf,

    #[clap(long, short, default_value = "show", value_enum)]
    pub operation: Operation,

    /// Drop every node with this name, together with its subtree
    #[clap(long, short)]
    pub exclude: Vec<String>,

    #[clap(long, short, default_value = "tree", value_enum)]
    pub format: OutputFormat,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
