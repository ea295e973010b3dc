//! Program drivers for inputlab.
//!
//! This crate provides:
//! - `word_reader`: read one word unbuffered, then one line buffered
//! - `overflow_demo`: 32-bit wraparound versus 64-bit widening
//! - `config`: command-line and environment configuration
//! - `structured_log`: JSONL event logging shared by both programs

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod overflow_demo;
pub mod structured_log;
pub mod word_reader;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use overflow_demo::run_overflow_demo;
pub use word_reader::{WordReaderReport, run_word_reader};
