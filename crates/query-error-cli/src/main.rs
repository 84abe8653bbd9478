use std::time::Instant;

use clap::Parser;

use query_error::Result;
use query_error_cli::{Command, QerrOptions, emit, run_main};

#[derive(Parser, Debug)]
#[command(name = "qerr", about = "qerr: look up query service error codes", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", global = true)]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = QerrOptions {
        command: args.command,
        output: args.output,
    };

    if let Some(text) = run_main(&opts)? {
        emit(&opts, &text)?;
    }

    tracing::info!(elapsed_secs = start.elapsed().as_secs_f64(), "complete");
    Ok(())
}

pub fn main() {
    let args = Cli::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        tracing::error!(code = e.code(), key = e.key(), caller = %e.caller(), "execution failed");
        std::process::exit(1);
    }
}
