// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A 48-bit LCG that may be shared between threads.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::gaussian;
use crate::lcg48::{extract, scramble, step};
use crate::random::sealed::Core;
use crate::random::Random;

/// The generator of [`Lcg48`] with atomic state updates.
///
/// Every step of the generator is a single compare-and-swap on the 48-bit
/// state, so any number of threads may draw from one instance through a
/// shared reference without losing updates. `next_gaussian` and reseeding
/// are serialized by a lock around the cached Gaussian.
///
/// For the same seed and the same global order of calls the output equals
/// that of [`Lcg48`]. A shared instance is contended, so one generator per
/// thread (see [`thread_rng`]) is usually the better choice.
///
/// [`Random`] is implemented for `&SyncLcg48`:
///
/// ```
/// use std::sync::Arc;
/// use rand_lcg48::{Random, SyncLcg48};
///
/// let shared = Arc::new(SyncLcg48::with_seed(0));
/// let worker = Arc::clone(&shared);
/// let x = std::thread::spawn(move || {
///     let mut rng = &*worker;
///     rng.next_int()
/// })
/// .join()
/// .unwrap();
/// assert_eq!(x, -1155484576);
/// ```
///
/// [`Lcg48`]: crate::Lcg48
/// [`thread_rng`]: crate::thread_rng
pub struct SyncLcg48 {
    seed: AtomicU64,
    next_gaussian: Mutex<Option<f64>>,
}

impl SyncLcg48 {
    /// Create a generator with a process-unique seed.
    pub fn new() -> Self {
        let rng = SyncLcg48::with_seed(0);
        (&rng).auto_seed();
        rng
    }

    /// Create a generator as though by `new` followed by
    /// [`set_seed(seed)`](Random::set_seed).
    pub fn with_seed(seed: u64) -> Self {
        SyncLcg48 {
            seed: AtomicU64::new(scramble(seed)),
            next_gaussian: Mutex::new(None),
        }
    }

    fn cache(&self) -> MutexGuard<'_, Option<f64>> {
        // The guarded value is a plain Option, valid after any panic.
        self.next_gaussian.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SyncLcg48 {
    fn default() -> Self {
        SyncLcg48::new()
    }
}

impl fmt::Debug for SyncLcg48 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SyncLcg48 {{}}")
    }
}

impl<'a> Core for &'a SyncLcg48 {
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        // The update closure always returns `Some`, so both arms carry the
        // state this thread's successful CAS replaced.
        let previous = match self
            .seed
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| Some(step(s)))
        {
            Ok(s) | Err(s) => s,
        };
        extract(step(previous), bits)
    }

    fn take_gaussian(&mut self) -> Option<f64> {
        self.cache().take()
    }

    fn put_gaussian(&mut self, value: f64) {
        *self.cache() = Some(value);
    }
}

impl<'a> Random for &'a SyncLcg48 {
    fn set_seed(&mut self, seed: u64) {
        let mut cache = self.cache();
        self.seed.store(scramble(seed), Ordering::Relaxed);
        *cache = None;
    }

    fn next_gaussian(&mut self) -> f64 {
        let this: &'a SyncLcg48 = *self;
        let mut cache = this.cache();
        if let Some(cached) = cache.take() {
            return cached;
        }
        let (value, next) = gaussian::polar_pair(self);
        *cache = Some(next);
        value
    }
}

impl Core for SyncLcg48 {
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        (&*self).next_bits(bits)
    }

    fn take_gaussian(&mut self) -> Option<f64> {
        self.next_gaussian
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn put_gaussian(&mut self, value: f64) {
        *self
            .next_gaussian
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner) = Some(value);
    }
}

impl Random for SyncLcg48 {
    fn set_seed(&mut self, seed: u64) {
        (&*self).set_seed(seed)
    }
}
