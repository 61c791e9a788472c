use std::io;

/// Failure modes of a single benchmark run.
///
/// Validation errors are produced before any buffer is allocated or any
/// thread is spawned; the remaining variants cover the fan-out itself. None
/// of them abort the process.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    /// The problem size violates a workload precondition.
    #[error("invalid size {size} for {workload}: {reason}")]
    InvalidSize {
        workload: &'static str,
        size: u64,
        reason: &'static str,
    },

    /// A problem buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes for {workload}")]
    Allocation {
        workload: &'static str,
        bytes: usize,
    },

    /// The OS refused to create a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    ThreadSpawn(#[from] io::Error),

    /// A worker thread panicked; the panic was contained at its join point.
    #[error("worker thread panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, WorkloadError>;
