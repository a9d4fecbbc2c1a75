// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Process-wide source of unique auto-seeds.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// L'Ecuyer, "Tables of Linear Congruential Generators of Different Sizes and
// Good Lattice Structure", 1999.
const UNIQUIFIER_MULTIPLIER: u64 = 1181783497276652981;

static SEED_UNIQUIFIER: AtomicU64 = AtomicU64::new(8682522807148012);

/// Returns a value that differs, with overwhelming probability, from every
/// other value returned in this process. Safe to call from any thread.
pub(crate) fn unique_seed() -> u64 {
    next_uniquifier() ^ entropy()
}

fn next_uniquifier() -> u64 {
    let step = |u: u64| u.wrapping_mul(UNIQUIFIER_MULTIPLIER);
    // The closure never returns `None`, so `fetch_update` cannot fail.
    match SEED_UNIQUIFIER.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |u| Some(step(u))) {
        Ok(previous) | Err(previous) => step(previous),
    }
}

#[cfg(feature = "getrandom")]
fn entropy() -> u64 {
    use rand_core::{OsRng, RngCore};

    let mut buf = [0u8; 8];
    match OsRng.try_fill_bytes(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            warn!("OS entropy unavailable ({}); seeding from the clock", err);
            clock()
        }
    }
}

#[cfg(not(feature = "getrandom"))]
fn entropy() -> u64 {
    clock()
}

fn clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uniquifier_never_repeats_quickly() {
        let values: HashSet<u64> = (0..1000).map(|_| next_uniquifier()).collect();
        assert_eq!(values.len(), 1000);
    }

    #[test]
    fn unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..250).map(|_| unique_seed()).collect::<Vec<_>>()))
            .collect();
        let mut seen = HashSet::new();
        for h in handles {
            for v in h.join().unwrap() {
                assert!(seen.insert(v));
            }
        }
    }
}
