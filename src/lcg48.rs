// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The unsynchronized 48-bit LCG.

use core::fmt;
use rand_core::{Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")] use serde::{Deserialize, Serialize};

use crate::random::{sealed, Random};

pub(crate) const MULTIPLIER: u64 = 0x5_DEEC_E66D;
pub(crate) const INCREMENT: u64 = 0xB;
pub(crate) const MASK: u64 = (1 << 48) - 1;

/// The state an explicit seed maps to.
#[inline(always)]
pub(crate) fn scramble(seed: u64) -> u64 {
    (seed ^ MULTIPLIER) & MASK
}

#[inline(always)]
pub(crate) fn step(seed: u64) -> u64 {
    seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK
}

/// The top `bits` bits of a 48-bit state.
#[inline(always)]
pub(crate) fn extract(seed: u64, bits: u32) -> u32 {
    debug_assert!((1..=32).contains(&bits));
    (seed >> (48 - bits)) as u32
}

/// Bits above the 48-bit state are dropped.
#[cfg(feature = "serde1")]
fn deserialize_seed<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    u64::deserialize(deserializer).map(|seed| seed & MASK)
}

/// The generator of `java.util.Random`.
///
/// A 48-bit linear congruential generator with multiplier `0x5DEECE66D`,
/// increment `0xB` and modulus `2^48`, plus one cached Gaussian deviate.
/// Outputs are built from the high bits of the state exactly as the
/// reference algorithm specifies.
///
/// Operations take `&mut self`; see [`SyncLcg48`] for a generator that can
/// be shared between threads.
///
/// # Example
///
/// ```
/// use rand_lcg48::{Lcg48, Random};
///
/// let mut rng = Lcg48::with_seed(0);
/// assert_eq!(rng.next_int(), -1155484576);
/// assert_eq!(rng.next_int(), -723955400);
/// ```
///
/// [`SyncLcg48`]: crate::SyncLcg48
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Lcg48 {
    #[cfg_attr(feature = "serde1", serde(deserialize_with = "deserialize_seed"))]
    seed: u64,
    next_gaussian: Option<f64>,
}

impl Lcg48 {
    /// Create a generator seeded with a value that is, with overwhelming
    /// probability, unique within the process.
    pub fn new() -> Self {
        let mut rng = Lcg48 { seed: 0, next_gaussian: None };
        rng.auto_seed();
        rng
    }

    /// Create a generator as though by `new` followed by
    /// [`set_seed(seed)`](Random::set_seed).
    ///
    /// This is the equivalent of `new java.util.Random(seed)`; Java's signed
    /// seeds map to `seed as u64`.
    pub fn with_seed(seed: u64) -> Self {
        Lcg48 { seed: scramble(seed), next_gaussian: None }
    }

    /// Multi-step advance (jump-ahead).
    ///
    /// Equivalent to `delta` steps of the generator, computed in
    /// `O(log delta)` with Brown's method, "Random Number Generation with
    /// Arbitrary Stride", Transactions of the American Nuclear Society
    /// (Nov. 1994). Each `next_int`, `next_float` or `next_boolean` is one
    /// step; `next_long` and `next_double` are two. The cached Gaussian is
    /// left untouched.
    ///
    /// ```
    /// use rand_lcg48::{Lcg48, Random};
    ///
    /// let mut a = Lcg48::with_seed(5);
    /// let mut b = a.clone();
    /// for _ in 0..10 {
    ///     a.next_int();
    /// }
    /// b.advance(10);
    /// assert_eq!(a.next_long(), b.next_long());
    /// ```
    pub fn advance(&mut self, delta: u64) {
        let mut acc_mult: u64 = 1;
        let mut acc_plus: u64 = 0;
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = INCREMENT;
        let mut mdelta = delta;

        while mdelta > 0 {
            if (mdelta & 1) != 0 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            mdelta /= 2;
        }
        // Arithmetic mod 2^64 reduces correctly mod 2^48.
        self.seed = acc_mult.wrapping_mul(self.seed).wrapping_add(acc_plus) & MASK;
    }
}

impl Default for Lcg48 {
    fn default() -> Self {
        Lcg48::new()
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Lcg48 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lcg48 {{}}")
    }
}

impl sealed::Core for Lcg48 {
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        self.seed = step(self.seed);
        extract(self.seed, bits)
    }

    #[inline]
    fn take_gaussian(&mut self) -> Option<f64> {
        self.next_gaussian.take()
    }

    #[inline]
    fn put_gaussian(&mut self, value: f64) {
        self.next_gaussian = Some(value);
    }
}

impl Random for Lcg48 {
    #[inline]
    fn set_seed(&mut self, seed: u64) {
        self.seed = scramble(seed);
        self.next_gaussian = None;
    }
}

impl SeedableRng for Lcg48 {
    type Seed = [u8; 8];

    /// The seed is read as a little-endian `u64` and passed to
    /// [`Random::set_seed`]; only its low 48 bits matter.
    fn from_seed(seed: Self::Seed) -> Self {
        Lcg48::with_seed(u64::from_le_bytes(seed))
    }

    /// Same as [`Lcg48::with_seed`], so that the output matches other
    /// implementations seeded with `state`.
    fn seed_from_u64(state: u64) -> Self {
        Lcg48::with_seed(state)
    }
}

impl RngCore for Lcg48 {
    /// Same bits as [`Random::next_int`].
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_int() as u32
    }

    /// Same bits as [`Random::next_long`].
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    /// Same bytes as [`Random::next_bytes`].
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.next_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
