//! CLI entrypoint for the word reader.

use std::io;

use clap::Parser;

use inputlab_harness::config::LogArgs;
use inputlab_harness::structured_log::Program;
use inputlab_harness::{HarnessConfig, run_word_reader};

/// Read one word, then one sentence, from standard input.
#[derive(Debug, Parser)]
#[command(name = "word-reader")]
#[command(about = "Read a single word unbuffered, then a full line buffered, from stdin")]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = HarnessConfig::from(cli.log);
    let mut log = config.emitter(Program::WordReader)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_word_reader(stdin.lock(), &mut stdout, &mut log)?;
    Ok(())
}
