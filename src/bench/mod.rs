//! Parallel workload execution engine.
//!
//! [`execute`] selects a workload by id, builds a fresh problem instance,
//! fans it out across one short-lived thread per partition, joins them all
//! and reports a typed success/failure. Timing is the caller's job: measure
//! a monotonic clock immediately around the `execute` call and emit a
//! [`crate::report::RunRecord`].

pub mod coordinator;
pub mod error;
pub mod partition;
pub mod workloads;

pub use error::WorkloadError;

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::ensure;

/// The five supported benchmarks, keyed by their wire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum WorkloadId {
    SumSquares = 1,
    MatrixMultiply = 2,
    MonteCarloPi = 3,
    MergeSort = 4,
    Fft = 5,
}

impl WorkloadId {
    pub const ALL: [WorkloadId; 5] = [
        WorkloadId::SumSquares,
        WorkloadId::MatrixMultiply,
        WorkloadId::MonteCarloPi,
        WorkloadId::MergeSort,
        WorkloadId::Fft,
    ];

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(WorkloadId::SumSquares),
            2 => Some(WorkloadId::MatrixMultiply),
            3 => Some(WorkloadId::MonteCarloPi),
            4 => Some(WorkloadId::MergeSort),
            5 => Some(WorkloadId::Fft),
            _ => None,
        }
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            WorkloadId::SumSquares => workloads::sum_squares::NAME,
            WorkloadId::MatrixMultiply => workloads::matmul::NAME,
            WorkloadId::MonteCarloPi => workloads::monte_carlo::NAME,
            WorkloadId::MergeSort => workloads::merge_sort::NAME,
            WorkloadId::Fft => workloads::fft::NAME,
        }
    }

    /// Human-readable size constraint, for `mcbench list`.
    pub fn size_rule(self) -> &'static str {
        match self {
            WorkloadId::SumSquares | WorkloadId::MonteCarloPi => "size >= threads",
            WorkloadId::MatrixMultiply => "threads <= size <= 6000 (matrix dimension)",
            WorkloadId::MergeSort => "size >= 2",
            WorkloadId::Fft => "size is a power of two (runs single-threaded)",
        }
    }
}

impl fmt::Display for WorkloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper bound on worker threads per run.
pub const MAX_THREADS: u32 = 256;
/// Upper bound on timed runs per invocation.
pub const MAX_RUNS: u32 = 1000;

/// Validated run parameters, produced by the CLI layer before the engine is
/// invoked.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub workload: WorkloadId,
    pub threads: u32,
    pub runs: u32,
    pub size: u64,
    pub out: PathBuf,
}

impl RunConfig {
    /// Range checks shared by clap and library callers. Workload-specific
    /// size preconditions are checked again inside [`execute`], before any
    /// allocation or spawn.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (1..=MAX_THREADS).contains(&self.threads),
            "--threads must be 1..={MAX_THREADS}"
        );
        ensure!(
            (1..=MAX_RUNS).contains(&self.runs),
            "--runs must be 1..={MAX_RUNS}"
        );
        ensure!(self.size > 0, "--size must be >= 1");
        Ok(())
    }
}

/// Executes one run of `id` at the given thread count and problem size.
///
/// The problem instance and all of its buffers are created fresh here and
/// dropped before returning; every spawned thread is joined before this
/// function returns, success or failure.
pub fn execute(id: WorkloadId, threads: u32, size: u64) -> Result<(), WorkloadError> {
    tracing::debug!(workload = %id, threads, size, "executing workload");
    match id {
        WorkloadId::SumSquares => workloads::sum_squares::run(threads, size),
        WorkloadId::MatrixMultiply => workloads::matmul::run(threads, size),
        WorkloadId::MonteCarloPi => workloads::monte_carlo::run(threads, size),
        WorkloadId::MergeSort => workloads::merge_sort::run(threads, size),
        WorkloadId::Fft => workloads::fft::run(threads, size),
    }
}

static PROCESS_SEED: OnceLock<u64> = OnceLock::new();

/// Base seed for randomized problem instances, initialized once per process.
/// Runs within one invocation share it; separate invocations do not, so
/// reproducibility holds only inside a single process run.
pub(crate) fn process_seed() -> u64 {
    *PROCESS_SEED.get_or_init(|| {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0x8817_2645_4633_2525, |d| d.as_nanos() as u64);
        nanos ^ 0x9E37_79B9_7F4A_7C15
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_ids_round_trip() {
        for workload in WorkloadId::ALL {
            assert_eq!(WorkloadId::from_id(workload.id()), Some(workload));
        }
        assert_eq!(WorkloadId::from_id(0), None);
        assert_eq!(WorkloadId::from_id(6), None);
    }

    #[test]
    fn sum_squares_small_run_succeeds() {
        assert!(execute(WorkloadId::SumSquares, 4, 1000).is_ok());
    }

    #[test]
    fn fft_rejects_non_power_of_two() {
        let err = execute(WorkloadId::Fft, 1, 1000).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidSize { size: 1000, .. }));
    }

    #[test]
    fn fft_accepts_power_of_two() {
        assert!(execute(WorkloadId::Fft, 1, 1024).is_ok());
    }

    #[test]
    fn merge_sort_handles_two_elements_with_many_threads() {
        assert!(execute(WorkloadId::MergeSort, 8, 2).is_ok());
    }

    #[test]
    fn zero_size_is_rejected_for_every_workload() {
        for workload in WorkloadId::ALL {
            assert!(matches!(
                execute(workload, 1, 0),
                Err(WorkloadError::InvalidSize { size: 0, .. })
            ));
        }
    }

    #[test]
    fn process_seed_is_stable_within_a_process() {
        assert_eq!(process_seed(), process_seed());
    }

    #[test]
    fn run_config_validation_bounds() {
        let config = RunConfig {
            workload: WorkloadId::SumSquares,
            threads: 4,
            runs: 3,
            size: 1000,
            out: PathBuf::from("out.jsonl"),
        };
        assert!(config.validate().is_ok());

        let mut bad = config.clone();
        bad.threads = 0;
        assert!(bad.validate().is_err());
        bad.threads = MAX_THREADS + 1;
        assert!(bad.validate().is_err());

        let mut bad = config.clone();
        bad.runs = MAX_RUNS + 1;
        assert!(bad.validate().is_err());

        let mut bad = config;
        bad.size = 0;
        assert!(bad.validate().is_err());
    }
}
