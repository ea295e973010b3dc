//! String operations on UTF-8 text.
//!
//! Whitespace trimming, field splitting, and token-sequence rendering.

pub mod fields;

pub use fields::{Fields, fields, fields_r, format_tokens, trim_space};
