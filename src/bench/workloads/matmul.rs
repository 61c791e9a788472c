//! Dense matrix multiply C = A·B with row-banded output.
//!
//! The output buffer is carved into disjoint row bands before any thread is
//! spawned; each worker receives exclusive `&mut` access to its band, so no
//! lock is needed and no worker can write outside its assigned rows.

use crate::bench::coordinator::fan_out;
use crate::bench::error::{Result, WorkloadError};
use crate::bench::partition::{RowRange, row_ranges};
use crate::bench::workloads::{checksum, try_alloc};

pub(crate) const NAME: &str = "matrix-multiply";

/// Dimension ceiling: bounds the three n×n f64 buffers to well under a
/// gigabyte each.
pub(crate) const MAX_DIM: u64 = 6000;

pub fn run(threads: u32, size: u64) -> Result<()> {
    let c = multiply(threads, size)?;
    checksum(&c, |v| *v);
    Ok(())
}

fn validate(threads: u32, size: u64) -> Result<()> {
    if size > MAX_DIM {
        return Err(WorkloadError::InvalidSize {
            workload: NAME,
            size,
            reason: "matrix dimension exceeds the sanity ceiling",
        });
    }
    if size < u64::from(threads.max(1)) {
        return Err(WorkloadError::InvalidSize {
            workload: NAME,
            size,
            reason: "size must be at least the thread count",
        });
    }
    Ok(())
}

/// Builds deterministic n×n inputs (`A[i][k] = sin(i+k)`,
/// `B[k][j] = cos(k-j)`) and multiplies them with one thread per row band.
pub(crate) fn multiply(threads: u32, size: u64) -> Result<Vec<f64>> {
    validate(threads, size)?;
    let n = size as usize;

    let mut a = try_alloc(NAME, n * n, 0.0f64)?;
    let mut b = try_alloc(NAME, n * n, 0.0f64)?;
    let mut c = try_alloc(NAME, n * n, 0.0f64)?;
    for i in 0..n {
        for j in 0..n {
            a[i * n + j] = ((i + j) as f64).sin();
            b[i * n + j] = (i as f64 - j as f64).cos();
        }
    }

    let bands = row_ranges(n, threads);
    let tasks = carve_bands(&mut c, &bands, n);

    let a = &a;
    let b = &b;
    fan_out(tasks, move |_, (band, out): (RowRange, &mut [f64])| {
        for (local, i) in (band.start..band.end).enumerate() {
            let row = &mut out[local * n..(local + 1) * n];
            for (j, slot) in row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += a[i * n + k] * b[k * n + j];
                }
                *slot = sum;
            }
        }
    })?;

    Ok(c)
}

/// Splits the output buffer into one exclusive mutable slice per row band.
fn carve_bands<'c>(
    c: &'c mut [f64],
    bands: &[RowRange],
    n: usize,
) -> Vec<(RowRange, &'c mut [f64])> {
    let mut tasks = Vec::with_capacity(bands.len());
    let mut rest = c;
    for band in bands {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * n);
        tasks.push((*band, head));
        rest = tail;
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_multiply(n: usize) -> Vec<f64> {
        let mut c = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    let a = ((i + k) as f64).sin();
                    let b = (k as f64 - j as f64).cos();
                    sum += a * b;
                }
                c[i * n + j] = sum;
            }
        }
        c
    }

    #[test]
    fn matches_sequential_reference() {
        let c = multiply(3, 7).unwrap();
        let expected = reference_multiply(7);
        for (got, want) in c.iter().zip(&expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn thread_count_does_not_change_the_result() {
        let single = multiply(1, 8).unwrap();
        let banded = multiply(5, 8).unwrap();
        assert_eq!(single, banded);
    }

    #[test]
    fn rejects_dimension_above_ceiling() {
        let err = multiply(1, MAX_DIM + 1).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidSize { .. }));
    }

    #[test]
    fn rejects_more_threads_than_rows() {
        assert!(multiply(9, 8).is_err());
        assert!(multiply(1, 0).is_err());
    }
}
