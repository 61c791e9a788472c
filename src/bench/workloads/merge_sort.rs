//! Parallel merge sort with bounded recursive thread spawning.
//!
//! A node below the depth limit spawns one thread for its first half and
//! recurses on the second half in-thread, joining before the merge; deeper
//! nodes recurse sequentially. One recursive function parameterized by
//! depth, not two code paths: the cutoff only decides whether the first
//! half gets its own thread.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bench::error::{Result, WorkloadError};
use crate::bench::partition::depth_limit;
use crate::bench::process_seed;
use crate::bench::workloads::{checksum, try_alloc};

pub(crate) const NAME: &str = "merge-sort";

/// Element-count ceiling, matching the 32-bit index space of the original
/// formulation.
pub(crate) const MAX_LEN: u64 = 1 << 31;

pub fn run(threads: u32, size: u64) -> Result<()> {
    validate(size)?;
    let n = size as usize;

    let mut rng = SmallRng::seed_from_u64(process_seed());
    let mut data = try_alloc(NAME, n, 0i32)?;
    for slot in data.iter_mut() {
        *slot = rng.r#gen();
    }

    sort(&mut data, threads)?;
    checksum(&data, |v| f64::from(*v));
    Ok(())
}

fn validate(size: u64) -> Result<()> {
    if size < 2 {
        return Err(WorkloadError::InvalidSize {
            workload: NAME,
            size,
            reason: "need at least two elements to sort",
        });
    }
    if size > MAX_LEN {
        return Err(WorkloadError::InvalidSize {
            workload: NAME,
            size,
            reason: "element count exceeds the sanity ceiling",
        });
    }
    Ok(())
}

/// Sorts `data` in place. At most `2^ceil(log2(threads)) - 1` threads are
/// spawned beyond the caller, regardless of recursion depth.
pub(crate) fn sort(data: &mut [i32], threads: u32) -> Result<()> {
    if data.len() <= 1 {
        return Ok(());
    }
    let mut scratch = try_alloc(NAME, data.len(), 0i32)?;
    sort_rec(data, &mut scratch, 0, depth_limit(threads))
}

fn sort_rec(data: &mut [i32], scratch: &mut [i32], depth: u32, limit: u32) -> Result<()> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }
    let mid = n / 2;
    let (left, right) = data.split_at_mut(mid);
    let (scratch_left, scratch_right) = scratch.split_at_mut(mid);

    if depth < limit {
        // The scope joins the spawned half before the merge below can touch
        // either side; an error in the in-thread half still waits for the
        // sibling at scope exit.
        crossbeam::thread::scope(|scope| {
            let handle = scope
                .builder()
                .name(format!("mcbench-sort-d{depth}"))
                .spawn(move |_| sort_rec(left, scratch_left, depth + 1, limit))
                .map_err(WorkloadError::ThreadSpawn)?;
            sort_rec(right, scratch_right, depth + 1, limit)?;
            handle.join().map_err(|_| WorkloadError::WorkerPanicked)?
        })
        .map_err(|_| WorkloadError::WorkerPanicked)??;
    } else {
        sort_rec(left, scratch_left, depth + 1, limit)?;
        sort_rec(right, scratch_right, depth + 1, limit)?;
    }

    merge(data, scratch, mid);
    Ok(())
}

/// Two-way merge of `data[..mid]` and `data[mid..]` through the scratch
/// buffer, copied back in place.
fn merge(data: &mut [i32], scratch: &mut [i32], mid: usize) {
    let n = data.len();
    let (mut i, mut j) = (0, mid);
    for slot in scratch[..n].iter_mut() {
        if i < mid && (j >= n || data[i] <= data[j]) {
            *slot = data[i];
            i += 1;
        } else {
            *slot = data[j];
            j += 1;
        }
    }
    data.copy_from_slice(&scratch[..n]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorts(mut data: Vec<i32>, threads: u32) {
        let mut expected = data.clone();
        expected.sort_unstable();
        sort(&mut data, threads).unwrap();
        assert_eq!(data, expected);
    }

    #[test]
    fn sorts_random_input_single_threaded() {
        let mut rng = SmallRng::seed_from_u64(1);
        let data: Vec<i32> = (0..1000).map(|_| rng.r#gen()).collect();
        assert_sorts(data, 1);
    }

    #[test]
    fn sorts_random_input_with_many_threads() {
        let mut rng = SmallRng::seed_from_u64(2);
        let data: Vec<i32> = (0..1000).map(|_| rng.r#gen()).collect();
        assert_sorts(data, 64);
    }

    #[test]
    fn handles_duplicates_and_presorted_input() {
        assert_sorts(vec![5, 5, 5, 1, 1, 3, 3, 3], 4);
        assert_sorts((0..128).collect(), 8);
        assert_sorts((0..128).rev().collect(), 8);
    }

    #[test]
    fn sorts_two_elements() {
        assert_sorts(vec![2, 1], 8);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(matches!(
            validate(1),
            Err(WorkloadError::InvalidSize { size: 1, .. })
        ));
        assert!(validate(0).is_err());
        assert!(validate(MAX_LEN + 1).is_err());
        assert!(validate(2).is_ok());
    }
}
