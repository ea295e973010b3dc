//! Errors surfaced by the program binaries.
//!
//! Input read failures never appear here; the drivers record them and
//! carry on with whatever was read.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("log serialization: {0}")]
    Log(#[from] serde_json::Error),
}
