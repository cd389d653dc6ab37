use std::path::PathBuf;

use crate::cli::{Cli, Operation, OutputFormat};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub tree_file: PathBuf,
    pub operation: Operation,
    pub exclude: Vec<String>,
    pub format: OutputFormat,
    pub use_color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            use_color: cli.color.use_color(),
            tree_file: cli.tree_file,
            operation: cli.operation,
            exclude: cli.exclude,
            format: cli.format,
        }
    }
}
