//! The five benchmark workloads.
//!
//! Each module exposes `run(threads, size)` (validate, build the problem
//! instance, fan out, aggregate) plus the smaller pieces its unit tests
//! exercise directly. Problem buffers are created fresh per run and dropped
//! when `run` returns; nothing is cached across runs.

pub mod fft;
pub mod matmul;
pub mod merge_sort;
pub mod monte_carlo;
pub mod sum_squares;

use super::error::{Result, WorkloadError};

/// Allocates a problem buffer, reporting OOM as a typed error instead of
/// aborting the process.
pub(crate) fn try_alloc<T: Clone>(workload: &'static str, len: usize, fill: T) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| WorkloadError::Allocation {
            workload,
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    buffer.resize(len, fill);
    Ok(buffer)
}

/// Strided pass over an output buffer, folded into `black_box` so the
/// optimizer cannot elide the computation that produced it. The numeric
/// value is discarded.
pub(crate) fn checksum<T>(data: &[T], value: impl Fn(&T) -> f64) {
    let stride = data.len() / 16 + 1;
    let mut acc = 0.0;
    let mut i = 0;
    while i < data.len() {
        acc += value(&data[i]);
        i += stride;
    }
    std::hint::black_box(acc);
}
