//! Tablefmt - a keyboard-driven terminal table editor.
//!
//! # Usage
//!
//! ```bash
//! tablefmt
//! tablefmt --no-confirm
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use tablefmt::app::App;

/// A keyboard-driven terminal table editor
#[derive(Parser, Debug)]
#[command(name = "tablefmt", version, about, long_about = None)]
struct Cli {
    /// Apply pasted tables immediately, without a confirmation prompt
    #[arg(long)]
    no_confirm: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app = App::new().with_confirm(!cli.no_confirm);
    app.run().context("Application error")
}
