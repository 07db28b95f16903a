// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reef binary: an interactive shell driven by a read-eval-print loop.

mod repl;

use clap::Parser;

#[derive(Parser)]
#[command(name = "reef", version, about = "A small interactive shell")]
struct Cli {
    /// Run a single command line instead of starting the interactive loop.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let code = match cli.command {
        Some(line) => repl::run_one(&line).await?,
        None => repl::run().await?,
    };
    std::process::exit(code);
}

/// Diagnostics go to stderr and stay off unless asked for, so shell output
/// is exactly the commands' output.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("REEF_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
