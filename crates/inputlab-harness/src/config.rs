//! Logging configuration shared by both binaries.
//!
//! Every setting can come from a flag or from the environment; flags win:
//! - `--log <PATH>` / `INPUTLAB_LOG`: JSONL log file. Unset disables logging.
//! - `--log-level <LEVEL>` / `INPUTLAB_LOG_LEVEL`: minimum level
//!   (`trace|debug|info|warn|error`, anything else reads as `info`).
//! - `--run-id <ID>` / `INPUTLAB_RUN_ID`: middle component of trace ids.
//!
//! With nothing set, the programs behave exactly as if logging did not exist.

use std::path::PathBuf;

use clap::Args;

use crate::structured_log::{LogEmitter, LogLevel, Program};

/// Command-line flags, flattened into each binary's parser.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Write structured JSONL log entries to this file.
    #[arg(long, env = "INPUTLAB_LOG")]
    pub log: Option<PathBuf>,
    /// Minimum log level to record.
    #[arg(long, env = "INPUTLAB_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    /// Run identifier used in trace ids.
    #[arg(long, env = "INPUTLAB_RUN_ID", default_value = "run")]
    pub run_id: String,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub log_path: Option<PathBuf>,
    pub log_level: LogLevel,
    pub run_id: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            run_id: "run".to_string(),
        }
    }
}

impl From<LogArgs> for HarnessConfig {
    fn from(args: LogArgs) -> Self {
        Self {
            log_path: args.log,
            log_level: LogLevel::from_str_loose(&args.log_level),
            run_id: sanitize_run_id(&args.run_id),
        }
    }
}

impl HarnessConfig {
    /// Build the emitter for `program`: a file emitter when a log path is
    /// configured, otherwise one that discards everything.
    pub fn emitter(&self, program: Program) -> std::io::Result<LogEmitter> {
        let emitter = match &self.log_path {
            Some(path) => LogEmitter::to_file(path, program, &self.run_id)?,
            None => LogEmitter::disabled(program),
        };
        Ok(emitter.with_min_level(self.log_level))
    }
}

/// Keep run ids usable as a single `::`-separated trace id component.
fn sanitize_run_id(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if c == ':' || c.is_whitespace() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "run".to_string()
    } else {
        cleaned
    }
}
