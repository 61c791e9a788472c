//! Monte Carlo estimation of pi: count uniform draws from [0,1)² that land
//! inside the unit circle.
//!
//! Each worker owns an independent deterministic generator derived from a
//! process-wide seed mixed with its partition index, so a run is
//! reproducible within one process invocation but not across invocations.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bench::coordinator::fan_out;
use crate::bench::error::Result;
use crate::bench::partition::chunk_ranges;
use crate::bench::process_seed;

pub(crate) const NAME: &str = "monte-carlo-pi";

const PER_THREAD_MIX: u64 = 0xBF58_476D_1CE4_E5B9;

pub fn run(threads: u32, size: u64) -> Result<()> {
    let hits = estimate_hits(threads, size, process_seed())?;
    let pi = 4.0 * hits as f64 / size as f64;
    std::hint::black_box(pi);
    Ok(())
}

/// Partitions `size` iterations into equal chunks and sums the per-thread
/// hit counts after all joins complete.
pub(crate) fn estimate_hits(threads: u32, size: u64, seed: u64) -> Result<u64> {
    let ranges = chunk_ranges(NAME, size, threads)?;
    let partials = fan_out(ranges, |index, range| {
        sample(range.len(), thread_seed(seed, index))
    })?;
    Ok(partials.into_iter().sum())
}

fn thread_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(PER_THREAD_MIX)
}

fn sample(iters: u64, seed: u64) -> u64 {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut hits = 0u64;
    for _ in 0..iters {
        let x: f64 = rng.r#gen();
        let y: f64 = rng.r#gen();
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::error::WorkloadError;

    #[test]
    fn fixed_seed_is_deterministic() {
        let first = estimate_hits(1, 10_000, 42).unwrap();
        let second = estimate_hits(1, 10_000, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hit_count_is_bounded_by_iterations() {
        let hits = estimate_hits(4, 10_000, 7).unwrap();
        assert!(hits <= 10_000);
    }

    #[test]
    fn estimate_lands_near_pi() {
        let hits = estimate_hits(4, 200_000, 1234).unwrap();
        let pi = 4.0 * hits as f64 / 200_000.0;
        assert!((pi - std::f64::consts::PI).abs() < 0.05, "estimate {pi} too far off");
    }

    #[test]
    fn sibling_threads_get_distinct_seeds() {
        assert_ne!(thread_seed(42, 0), thread_seed(42, 1));
        assert_ne!(thread_seed(42, 1), thread_seed(42, 2));
    }

    #[test]
    fn rejects_size_below_thread_count() {
        let err = estimate_hits(16, 10, 0).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidSize { .. }));
    }
}
