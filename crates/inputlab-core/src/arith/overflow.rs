//! Unsigned addition at a fixed bit width.
//!
//! Addition on an N-bit unsigned integer wraps modulo 2^N. Rust panics on
//! implicit overflow in debug builds, so every wrap here is requested
//! explicitly through [`FixedWidth::wrapping_add`].

use std::fmt;

/// Outcome of a fixed-width addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthStatus {
    /// The mathematical result fits in the type.
    Exact,
    /// The result was reduced modulo 2^N.
    Wrapped,
}

/// An unsigned integer type of a fixed bit width.
pub trait FixedWidth: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    const MAX: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn overflowing_add(self, rhs: Self) -> (Self, bool);
}

macro_rules! impl_fixed_width {
    ($($t:ty),*) => {$(
        impl FixedWidth for $t {
            const MAX: Self = <$t>::MAX;

            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, rhs)
            }
        }
    )*};
}

impl_fixed_width!(u8, u16, u32, u64);

/// Add with wraparound and report whether a wrap happened.
pub fn add_with_status<T: FixedWidth>(a: T, b: T) -> (T, WidthStatus) {
    match a.overflowing_add(b) {
        (sum, false) => (sum, WidthStatus::Exact),
        (sum, true) => (sum, WidthStatus::Wrapped),
    }
}

pub fn widen_u32(value: u32) -> u64 {
    u64::from(value)
}

/// `value + 1` computed at 64 bits; never wraps for any `u32` input.
pub fn widened_increment(value: u32) -> u64 {
    widen_u32(value) + 1
}

/// The three values shown by the overflow demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowReport {
    /// Largest `u32`, 2^32 - 1.
    pub max: u32,
    /// `max + 1` at 32 bits.
    pub wrapped: u32,
    /// The same quantity, 2^32, held in a `u64`.
    pub widened: u64,
}

impl OverflowReport {
    pub fn compute() -> Self {
        let max = <u32 as FixedWidth>::MAX;
        Self {
            max,
            wrapped: FixedWidth::wrapping_add(max, 1),
            widened: widened_increment(max),
        }
    }

    /// Status of the 32-bit increment (always `Wrapped`).
    pub fn status(&self) -> WidthStatus {
        add_with_status(self.max, 1).1
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Max uint32: {}", self.max),
            format!("After overflow: {}", self.wrapped),
            format!("Using uint64 to avoid overflow: {}", self.widened),
        ]
    }
}

impl fmt::Display for OverflowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.lines();
        write!(f, "{a}\n{b}\n{c}")
    }
}
