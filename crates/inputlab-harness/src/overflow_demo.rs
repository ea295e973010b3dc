//! Overflow demonstration: `u32::MAX + 1` wraps to zero, while the same
//! quantity held in a `u64` does not.

use std::io::Write;

use inputlab_core::OverflowReport;
use inputlab_core::arith::WidthStatus;

use crate::error::HarnessError;
use crate::structured_log::{LogEmitter, LogLevel, Outcome};

/// Print the three demonstration lines to `output`.
pub fn run_overflow_demo<W: Write>(
    output: &mut W,
    log: &mut LogEmitter,
) -> Result<OverflowReport, HarnessError> {
    let report = OverflowReport::compute();
    for line in report.lines() {
        writeln!(output, "{line}")?;
    }
    output.flush()?;

    let entry = log
        .entry(LogLevel::Info, "overflow_demo")
        .with_outcome(Outcome::Pass)
        .with_exit_code(0)
        .with_details(serde_json::json!({
            "max_u32": report.max,
            "wrapped_u32": report.wrapped,
            "widened_u64": report.widened,
            "wrapped": report.status() == WidthStatus::Wrapped,
        }));
    log.emit_entry(entry)?;
    log.flush()?;

    Ok(report)
}
