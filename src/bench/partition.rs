//! Pure partitioning schemes mapping `(problem size, thread count)` to
//! disjoint sub-ranges.
//!
//! Each scheme is deterministic and allocates nothing beyond the returned
//! vector; the disjointness of the ranges it hands out is what lets workers
//! write into a shared output buffer without locks.

use super::error::{Result, WorkloadError};

/// Half-open index range `[start, end)` assigned to exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: u64,
    pub end: u64,
}

impl Range {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Contiguous band `[start, end)` of output-matrix rows assigned to one
/// worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Splits `[0, size)` into `threads` contiguous chunks of width
/// `size / threads`; the last chunk absorbs the remainder so the union is
/// exactly `[0, size)`.
///
/// Rejects `size < threads`: every worker must receive at least one unit of
/// work, degenerate empty partitions are never created.
pub fn chunk_ranges(workload: &'static str, size: u64, threads: u32) -> Result<Vec<Range>> {
    if threads == 0 {
        return Err(WorkloadError::InvalidSize {
            workload,
            size,
            reason: "thread count must be at least 1",
        });
    }
    if size < u64::from(threads) {
        return Err(WorkloadError::InvalidSize {
            workload,
            size,
            reason: "size must be at least the thread count",
        });
    }

    let threads = u64::from(threads);
    let chunk = size / threads;
    let mut ranges = Vec::with_capacity(threads as usize);
    for i in 0..threads {
        let start = i * chunk;
        let end = if i == threads - 1 { size } else { start + chunk };
        ranges.push(Range { start, end });
    }
    Ok(ranges)
}

/// Assigns the `n` rows of the output matrix to `threads` contiguous bands:
/// the first `n % threads` bands get `n / threads + 1` rows, the rest get
/// `n / threads`. Total and pure for all inputs; callers reject `n < threads`
/// before partitioning if empty bands are unacceptable.
pub fn row_ranges(n: usize, threads: u32) -> Vec<RowRange> {
    let threads = (threads as usize).max(1);
    let base = n / threads;
    let rem = n % threads;

    let mut ranges = Vec::with_capacity(threads);
    let mut row = 0;
    for i in 0..threads {
        let rows = base + usize::from(i < rem);
        ranges.push(RowRange {
            start: row,
            end: row + rows,
        });
        row += rows;
    }
    ranges
}

/// Smallest depth `d` with `2^d >= threads`.
///
/// Merge sort spawns a thread only while its recursion depth is below this
/// limit, bounding the threads created to at most `2^d - 1` beyond the root
/// even though the recursion tree is much deeper.
pub fn depth_limit(threads: u32) -> u32 {
    let mut depth = 0;
    while (1u64 << depth) < u64::from(threads) {
        depth += 1;
    }
    depth
}
