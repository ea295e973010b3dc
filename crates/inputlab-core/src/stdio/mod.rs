//! Standard input operations.
//!
//! Buffered stream reading in the three POSIX buffering modes, plus
//! single-token scanning that stops at the end of the current line.

pub mod buffer;
pub mod scan;
pub mod stream;

pub use buffer::{BUFSIZ, BufMode, StreamBuffer};
pub use scan::{ScanError, ScanOutcome, scan_word};
pub use stream::Stream;
