//! Fixed-width unsigned integer arithmetic.

pub mod overflow;

pub use overflow::{
    FixedWidth, OverflowReport, WidthStatus, add_with_status, widen_u32, widened_increment,
};
