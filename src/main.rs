use clap::Parser as _;
use tracing::debug;

use crate::{
    application::{Application, ApplicationError, RuntimeConfig},
    cli::Cli,
};

mod application;
mod cli;

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    let app_config = RuntimeConfig::from(cli_args);
    colored::control::set_override(app_config.use_color);

    Application::run(app_config).await?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        // Stdout carries the rendered tree
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
