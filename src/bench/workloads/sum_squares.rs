//! Sum of squares over `[0, size)`, partitioned into equal-width chunks.

use crate::bench::coordinator::fan_out;
use crate::bench::error::Result;
use crate::bench::partition::chunk_ranges;

pub(crate) const NAME: &str = "sum-squares";

pub fn run(threads: u32, size: u64) -> Result<()> {
    let total = compute(threads, size)?;
    std::hint::black_box(total);
    Ok(())
}

/// Each worker accumulates its partial sum as f64; aggregation is a plain
/// sum over the per-thread partials after all joins complete.
pub(crate) fn compute(threads: u32, size: u64) -> Result<f64> {
    let ranges = chunk_ranges(NAME, size, threads)?;
    let partials = fan_out(ranges, |_, range| {
        let mut acc = 0.0f64;
        for i in range.start..range.end {
            let x = i as f64;
            acc += x * x;
        }
        acc
    })?;
    Ok(partials.iter().sum())
}
