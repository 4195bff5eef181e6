//! a compact system status line.

use {
    anyhow::Context,
    topline::{App, Config},
    tracing_subscriber::EnvFilter,
};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    App::new(Config::default())
        .tui()
        .context("topline stopped unexpectedly")
}
