//! Seeded `i32` inputs for tests and benchmarks.
//!
//! Every generator draws from a `StdRng` seeded with [`random_init_seed`]. The seed is fixed per
//! process, so two calls with the same arguments return the same values. `OVERRIDE_SEED=<u64>`
//! replays a previous run.

use std::cmp::Reverse;
use std::env;
use std::sync::{Mutex, MutexGuard};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Seeding {
    PerProcess(u64),
    FromEnv(u64),
    EveryCall,
}

static SEEDING: Mutex<Option<Seeding>> = Mutex::new(None);

fn seeding() -> MutexGuard<'static, Option<Seeding>> {
    // A test that panicked while holding the lock doesn't invalidate the seed.
    let mut guard = SEEDING.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if guard.is_none() {
        *guard = Some(match env::var("OVERRIDE_SEED") {
            Ok(seed) => Seeding::FromEnv(
                seed.trim()
                    .parse()
                    .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: '{seed}'")),
            ),
            Err(_) => Seeding::PerProcess(rand::thread_rng().gen()),
        });
    }

    guard
}

/// Seed the next generator call uses.
pub fn random_init_seed() -> u64 {
    match *seeding() {
        Some(Seeding::PerProcess(seed) | Seeding::FromEnv(seed)) => seed,
        Some(Seeding::EveryCall) | None => rand::thread_rng().gen(),
    }
}

/// Makes every generator call draw a fresh seed, for benchmarks.
///
/// Panics if `OVERRIDE_SEED` is set, the two contradict each other.
pub fn use_random_seed_each_time() {
    let mut guard = seeding();
    if let Some(Seeding::FromEnv(_)) = *guard {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED");
    }

    *guard = Some(Seeding::EveryCall);
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly distributed over all of `i32`.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed over `range`, e.g. `0..4` for many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist = range.into();

    dist.sample_iter(rng()).take(len).collect()
}

/// The input domain of radix sort.
pub fn random_non_negative(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=i32::MAX)
}

/// Random values whose first `sorted_percent` are already in ascending order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// About `runs` ascending runs of random values.
pub fn saw_ascending(len: usize, runs: usize) -> Vec<i32> {
    sorted_runs(len, runs, |_| true)
}

/// About `runs` descending runs of random values.
pub fn saw_descending(len: usize, runs: usize) -> Vec<i32> {
    sorted_runs(len, runs, |_| false)
}

/// About `runs` runs, each randomly ascending or descending.
pub fn saw_mixed(len: usize, runs: usize) -> Vec<i32> {
    let directions = random_uniform(runs + 1, 0..=1);

    sorted_runs(len, runs, |run| directions.get(run).map_or(true, |&d| d == 0))
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rise, fall) = v.split_at_mut(len / 2);
    rise.sort_unstable();
    fall.sort_unstable_by_key(|&x| Reverse(x));

    v
}

fn sorted_runs(len: usize, runs: usize, is_ascending: impl Fn(usize) -> bool) -> Vec<i32> {
    let mut v = random(len);
    let run_len = (len / runs.max(1)).max(1);

    for (run, chunk) in v.chunks_mut(run_len).enumerate() {
        if is_ascending(run) {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&x| Reverse(x));
        }
    }

    v
}
