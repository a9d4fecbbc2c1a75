// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parallel array fills.
//!
//! Each chunk of the destination gets its own copy of the generator, jumped
//! ahead to the position the sequential fill would have reached there, so
//! the result is identical to [`Random::fill_ints`] and
//! [`Random::fill_doubles`].

use rayon::prelude::*;

use crate::lcg48::Lcg48;
use crate::random::Random;

const CHUNK_LEN: usize = 4096;

impl Lcg48 {
    /// Parallel version of [`Random::fill_ints`] with identical output.
    ///
    /// Afterwards `self` is in the state the sequential fill would leave.
    #[cfg_attr(doc_cfg, doc(cfg(feature = "rayon")))]
    pub fn par_fill_ints(&mut self, dest: &mut [i32]) {
        self.par_fill(dest, 1, |rng| rng.next_int())
    }

    /// Parallel version of [`Random::fill_doubles`] with identical output.
    ///
    /// Afterwards `self` is in the state the sequential fill would leave.
    #[cfg_attr(doc_cfg, doc(cfg(feature = "rayon")))]
    pub fn par_fill_doubles(&mut self, dest: &mut [f64]) {
        self.par_fill(dest, 2, |rng| rng.next_double())
    }

    fn par_fill<T, F>(&mut self, dest: &mut [T], steps_per_value: u64, sample: F)
    where
        T: Send,
        F: Fn(&mut Lcg48) -> T + Sync,
    {
        let start = self.clone();
        dest.par_chunks_mut(CHUNK_LEN)
            .enumerate()
            .for_each(|(i, chunk)| {
                let mut rng = start.clone();
                rng.advance((i * CHUNK_LEN) as u64 * steps_per_value);
                for x in chunk {
                    *x = sample(&mut rng);
                }
            });
        self.advance(dest.len() as u64 * steps_per_value);
    }
}
