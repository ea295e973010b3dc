//! CLI entrypoint for the overflow demonstration.

use std::io;

use clap::Parser;

use inputlab_harness::config::LogArgs;
use inputlab_harness::structured_log::Program;
use inputlab_harness::{HarnessConfig, run_overflow_demo};

/// Show 32-bit unsigned wraparound next to the same value at 64 bits.
#[derive(Debug, Parser)]
#[command(name = "overflow-demo")]
#[command(about = "Print u32::MAX, u32::MAX + 1 (wrapped), and 2^32 as u64")]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = HarnessConfig::from(cli.log);
    let mut log = config.emitter(Program::OverflowDemo)?;

    let mut stdout = io::stdout().lock();
    run_overflow_demo(&mut stdout, &mut log)?;
    Ok(())
}
