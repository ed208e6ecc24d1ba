//! Input patterns for testing and benchmarking sorts. Values are `i32` unless noted.
//!
//! All random patterns draw from one seed per process, printed by the test harness, so a
//! failing run can be replayed with `OVERRIDE_SEED=<seed>`.

use std::env;
use std::sync::Mutex;

use rand::prelude::*;

// zipf 7 marks its distribution deprecated in favor of rand_distr::Zipf.
#[allow(deprecated)]
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    // Heavy on duplicates of the smallest values, the classic weak spot of a strict-less
    // partition.

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform(len / chunk_len + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);

    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// `len` random bytes, for the untyped buffer surfaces.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = new_rng();
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);

    bytes
}

/// Makes every random pattern draw a fresh seed instead of the per-process one.
///
/// By default `patterns::random(4)` yields the same values for the whole process, which is
/// what tests want. Benchmarks should call this once up front.
pub fn use_random_seed_each_time() {
    let mut seed = SEED.lock().unwrap();
    if let Some(Seed::Override(_)) = *seed {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED.");
    }

    *seed = Some(Seed::EachTime);
}

/// The seed all random patterns derive from, for this process.
pub fn random_init_seed() -> u64 {
    let mut guard = SEED.lock().unwrap();
    let seed = guard.get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => Seed::Override(
            val.parse()
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got {val:?}")),
        ),
        Err(_) => Seed::PerProcess(thread_rng().gen()),
    });

    match *seed {
        Seed::EachTime => thread_rng().gen(),
        Seed::PerProcess(val) | Seed::Override(val) => val,
    }
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum Seed {
    EachTime,
    PerProcess(u64),
    Override(u64),
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
