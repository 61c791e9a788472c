//! Recursive radix-2 Cooley-Tukey FFT.
//!
//! The transform runs single-threaded regardless of the requested thread
//! count; the thread count is accepted and validated upstream but has no
//! effect here. Input length must be an exact power of two, detected
//! structurally.

use num_complex::Complex64;

use crate::bench::error::{Result, WorkloadError};
use crate::bench::workloads::{checksum, try_alloc};

pub(crate) const NAME: &str = "fft";

pub fn run(_threads: u32, size: u64) -> Result<()> {
    validate(size)?;
    let n = size as usize;

    let mut data = try_alloc(NAME, n, Complex64::new(0.0, 0.0))?;
    for (i, slot) in data.iter_mut().enumerate() {
        *slot = Complex64::new((i as f64).sin(), 0.0);
    }

    transform(&mut data);
    checksum(&data, |v| v.re);
    Ok(())
}

fn validate(size: u64) -> Result<()> {
    // is_power_of_two is false for zero, so this covers both rejections.
    if !size.is_power_of_two() {
        return Err(WorkloadError::InvalidSize {
            workload: NAME,
            size,
            reason: "length must be a power of two",
        });
    }
    Ok(())
}

/// In-place recursive transform: split into even/odd halves, recurse,
/// combine with twiddle factor `e^{-2πik/n}`.
pub(crate) fn transform(data: &mut [Complex64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let half = n / 2;

    let mut even: Vec<Complex64> = data.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex64> = data.iter().skip(1).step_by(2).copied().collect();
    transform(&mut even);
    transform(&mut odd);

    for k in 0..half {
        let angle = -2.0 * std::f64::consts::PI * k as f64 / n as f64;
        let twiddle = Complex64::from_polar(1.0, angle);
        let t = twiddle * odd[k];
        data[k] = even[k] + t;
        data[k + half] = even[k] - t;
    }
}
