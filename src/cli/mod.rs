mod cli;
mod options;

pub use cli::Cli;
pub use options::{ColorChoice, LogLevel, Operation, OutputFormat};
