use anyhow::Result;
use clap::Parser;
use pawnking::cli::{execute, Cli, CliContext};
use pawnking::settings::{load_settings_from, settings_path};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings_path = settings_path();
    let ctx = CliContext {
        settings: load_settings_from(&settings_path),
        settings_path,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(cli.command, &ctx, &mut stdin.lock(), &mut stdout.lock())
}

/// Logs go to stderr so command output stays pipeable
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
