//! # mcbench - multi-core CPU micro-benchmark harness
//!
//! Executes one of five CPU-bound numeric workloads (sum-of-squares, dense
//! matrix multiply, Monte Carlo pi, parallel merge sort, recursive FFT) a
//! requested number of times, each run partitioned across a configurable
//! number of worker threads, and appends one JSONL record per run.
//!
//! ## Quick Start
//!
//! ```bash
//! # 3 timed merge-sort runs over 1M elements on 8 threads
//! mcbench run --alg 4 --threads 8 --runs 3 --size 1048576 --out results.jsonl
//!
//! # Enumerate workloads and their size constraints
//! mcbench list
//! ```

pub mod bench;
pub mod cli;
pub mod report;

pub use bench::{RunConfig, WorkloadId, execute};
pub use cli::{Cli, Output};
pub use report::RunRecord;

/// Result type alias for mcbench operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
