//! Thread fan-out: one short-lived worker per partition, join-all, collect.
//!
//! There is no pool and no work queue. Partitions are fixed before any
//! thread starts, each worker owns exactly one of them, and the only
//! synchronization point is the join: a worker's writes become visible to
//! the caller when its join completes.

use super::error::{Result, WorkloadError};

/// Spawns one named thread per task and waits for all of them, returning
/// their outputs in task order.
///
/// Joining is unconditional: if a spawn fails partway through the fan-out,
/// every already-spawned worker is still joined (by the enclosing scope)
/// before the error is returned, and a panicking worker is reported as
/// [`WorkloadError::WorkerPanicked`] only after all of its siblings have
/// been joined. No thread outlives this call.
pub fn fan_out<T, R, F>(tasks: Vec<T>, worker: F) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(usize, T) -> R + Sync,
{
    let count = tasks.len();
    crossbeam::thread::scope(|scope| {
        let worker = &worker;
        let mut handles = Vec::with_capacity(count);
        for (index, task) in tasks.into_iter().enumerate() {
            let handle = scope
                .builder()
                .name(format!("mcbench-worker-{index}"))
                .spawn(move |_| worker(index, task))
                .map_err(WorkloadError::ThreadSpawn)?;
            handles.push(handle);
        }

        let mut outputs = Vec::with_capacity(count);
        let mut panicked = false;
        for handle in handles {
            match handle.join() {
                Ok(output) => outputs.push(output),
                Err(_) => panicked = true,
            }
        }
        if panicked {
            return Err(WorkloadError::WorkerPanicked);
        }
        Ok(outputs)
    })
    .map_err(|_| WorkloadError::WorkerPanicked)?
}
