use std::io;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use factorial_calculator::{DEMO_INPUTS, run};

/// Print the factorial of each input, reporting negative inputs and overflow.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Integers to evaluate. Defaults to a fixed demonstration set.
    #[arg(allow_negative_numbers = true)]
    inputs: Vec<i32>,
    /// Increase diagnostic output on stderr; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn inputs(&self) -> &[i32] {
        if self.inputs.is_empty() { DEMO_INPUTS } else { self.inputs.as_slice() }
    }

    fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_directive());
    debug!(?args, "starting");

    let stdout = io::stdout();
    run(args.inputs(), &mut stdout.lock())?;

    Ok(())
}
