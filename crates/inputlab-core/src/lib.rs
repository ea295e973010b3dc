//! # inputlab-core
//!
//! Safe Rust building blocks for the inputlab programs.
//!
//! - [`stdio`]: a read-side stream buffer with POSIX-style buffering modes,
//!   a stream reader over any [`std::io::Read`], and single-token scanning.
//! - [`string`]: whitespace trimming, field splitting, and token rendering.
//! - [`arith`]: fixed-width unsigned arithmetic with explicit wraparound.

#![deny(unsafe_code)]

pub mod arith;
pub mod stdio;
pub mod string;

pub use arith::overflow::{FixedWidth, OverflowReport, WidthStatus};
pub use stdio::scan::{ScanError, ScanOutcome, scan_word};
pub use stdio::stream::Stream;
pub use string::fields::{fields, format_tokens, trim_space};
