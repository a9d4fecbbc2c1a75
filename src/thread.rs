// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Thread-local random number generator

use std::cell::RefCell;
use std::rc::Rc;

use rand_core::{Error, RngCore};

use crate::lcg48::Lcg48;
use crate::random::sealed::Core;
use crate::random::Random;

/// The type returned by [`thread_rng`], essentially just a reference to the
/// generator in thread-local memory.
///
/// Cloning the handle yields another reference to the same generator.
/// Dropping a handle never drops the generator; that happens when the
/// owning thread exits.
#[derive(Clone, Debug)]
pub struct ThreadRng {
    rng: Rc<RefCell<Lcg48>>,
}

thread_local!(
    static THREAD_RNG_KEY: Rc<RefCell<Lcg48>> = {
        trace!("creating thread-local generator");
        Rc::new(RefCell::new(Lcg48::new()))
    }
);

/// Retrieve the lazily-initialized thread-local generator.
///
/// The first call on each thread creates an [`Lcg48`] and auto-seeds it with
/// a process-unique seed. Later calls on the same thread return handles to
/// that same instance. The generator is dropped by the thread-local
/// destructor when the thread exits.
///
/// `ThreadRng` is neither `Send` nor `Sync`, so a handle cannot leave its
/// thread.
///
/// ```
/// use rand_lcg48::{thread_rng, Random};
///
/// let mut rng = thread_rng();
/// let roll = rng.next_int_bounded(6) + 1;
/// assert!((1..=6).contains(&roll));
/// ```
pub fn thread_rng() -> ThreadRng {
    ThreadRng { rng: THREAD_RNG_KEY.with(|t| t.clone()) }
}

impl Core for ThreadRng {
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        self.rng.borrow_mut().next_bits(bits)
    }

    fn take_gaussian(&mut self) -> Option<f64> {
        self.rng.borrow_mut().take_gaussian()
    }

    fn put_gaussian(&mut self, value: f64) {
        self.rng.borrow_mut().put_gaussian(value)
    }
}

impl Random for ThreadRng {
    fn set_seed(&mut self, seed: u64) {
        self.rng.borrow_mut().set_seed(seed)
    }

    fn next_gaussian(&mut self) -> f64 {
        self.rng.borrow_mut().next_gaussian()
    }

    fn next_bytes(&mut self, dest: &mut [u8]) {
        self.rng.borrow_mut().next_bytes(dest)
    }
}

impl RngCore for ThreadRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.borrow_mut().try_fill_bytes(dest)
    }
}
