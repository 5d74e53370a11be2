//! CLI entry point for burger-split.

mod commands;

use burger_split::cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // -v/-vv win over RUST_LOG; otherwise WARN unless RUST_LOG says more
    let filter = match cli.log_level() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::split::handle(&cli) {
        let theme = burger_split::theme::current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {e}")));
        std::process::exit(1);
    }
}
