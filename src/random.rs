// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The derived generator operations shared by every generator.

use crate::error::Error;
use crate::gaussian;

pub(crate) mod sealed {
    /// Access to the core step and the Gaussian cache.
    ///
    /// Not nameable outside the crate, which keeps `next_bits` private.
    pub trait Core {
        /// Advance the state once and return its top `bits` bits
        /// (`1 <= bits <= 32`).
        fn next_bits(&mut self, bits: u32) -> u32;

        /// Take the cached Gaussian, leaving the cache empty.
        fn take_gaussian(&mut self) -> Option<f64>;

        /// Store the second Gaussian of a freshly generated pair.
        fn put_gaussian(&mut self, value: f64);
    }
}

/// Operations of the `java.util.Random` algorithm.
///
/// Every method is defined in terms of a single private step function, which
/// advances the 48-bit state as `seed = (seed * 0x5DEECE66D + 0xB) mod 2^48`
/// and returns the top bits of the new state. Implementations differ only in
/// how they synchronize that step, so all of them produce identical output
/// for identical seeds and call sequences.
///
/// This trait is sealed: it is implemented for [`Lcg48`], [`ThreadRng`] and
/// `&`[`SyncLcg48`] only.
///
/// [`Lcg48`]: crate::Lcg48
/// [`ThreadRng`]: crate::ThreadRng
/// [`SyncLcg48`]: crate::SyncLcg48
pub trait Random: sealed::Core {
    /// Reset the state as though by `(seed ^ 0x5DEECE66D) & (2^48 - 1)` and
    /// clear the cached Gaussian.
    fn set_seed(&mut self, seed: u64);

    /// Reseed with a value that is, with overwhelming probability, unique
    /// within the process. Clears the cached Gaussian.
    fn auto_seed(&mut self) {
        let seed = crate::seed::unique_seed();
        debug!("auto-seeding generator");
        self.set_seed(seed);
    }

    /// Returns `next_bits(32)` as a signed integer.
    #[inline]
    fn next_int(&mut self) -> i32 {
        self.next_bits(32) as i32
    }

    /// Returns a value uniformly distributed in `[0, bound)`.
    ///
    /// Powers of two take the top bits of a single 31-bit draw. Other bounds
    /// use rejection sampling to avoid modulo bias.
    ///
    /// # Panics
    ///
    /// Panics if `bound <= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_lcg48::{Lcg48, Random};
    ///
    /// let mut rng = Lcg48::with_seed(42);
    /// assert_eq!(rng.next_int_bounded(10), 0);
    /// assert_eq!(rng.next_int_bounded(10), 3);
    /// ```
    fn next_int_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "next_int_bounded called with bound <= 0");
        bounded(self, bound)
    }

    /// As [`Random::next_int_bounded`], returning an error instead of
    /// panicking for `bound <= 0`.
    fn try_next_int_bounded(&mut self, bound: i32) -> Result<i32, Error> {
        if bound <= 0 {
            return Err(Error::NonPositiveBound);
        }
        Ok(bounded(self, bound))
    }

    /// Returns `(next_bits(32) << 32) | next_bits(32)`, high half first.
    ///
    /// The state is only 48 bits wide, so not every `i64` can be produced.
    #[inline]
    fn next_long(&mut self) -> i64 {
        let hi = u64::from(self.next_bits(32));
        let lo = u64::from(self.next_bits(32));
        ((hi << 32) | lo) as i64
    }

    /// Returns a value uniformly distributed in `[0, 1)` with 24 bits of
    /// precision.
    #[inline]
    fn next_float(&mut self) -> f32 {
        self.next_bits(24) as f32 / (1u32 << 24) as f32
    }

    /// Returns a value uniformly distributed in `[0, 1)` with 53 bits of
    /// precision, built from a 26-bit and a 27-bit draw.
    #[inline]
    fn next_double(&mut self) -> f64 {
        let hi = u64::from(self.next_bits(26));
        let lo = u64::from(self.next_bits(27));
        ((hi << 27) | lo) as f64 / (1u64 << 53) as f64
    }

    /// Returns `next_bits(1) != 0`.
    #[inline]
    fn next_boolean(&mut self) -> bool {
        self.next_bits(1) != 0
    }

    /// Returns a normally distributed value with mean 0 and standard
    /// deviation 1.
    ///
    /// Deviates are generated in pairs by the polar method; the second of
    /// each pair is cached and returned by the following call.
    fn next_gaussian(&mut self) -> f64 {
        if let Some(cached) = self.take_gaussian() {
            return cached;
        }
        let (value, next) = gaussian::polar_pair(self);
        self.put_gaussian(next);
        value
    }

    /// Fill `dest` with bytes taken from successive [`Random::next_int`]
    /// calls, least-significant byte first. The last call contributes only
    /// the bytes still needed.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_lcg48::{Lcg48, Random};
    ///
    /// let mut rng = Lcg48::with_seed(12345);
    /// let mut buf = [0u8; 7];
    /// rng.next_bytes(&mut buf);
    /// assert_eq!(buf, [214, 32, 159, 92, 49, 179, 97]);
    /// ```
    fn next_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_int().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Fill `dest` with [`Random::next_int`] values, in index order.
    fn fill_ints(&mut self, dest: &mut [i32]) {
        for x in dest {
            *x = self.next_int();
        }
    }

    /// Fill `dest` with [`Random::next_double`] values, in index order.
    fn fill_doubles(&mut self, dest: &mut [f64]) {
        for x in dest {
            *x = self.next_double();
        }
    }

    /// Fill `dest` with values in `[min, max)`, each computed as
    /// `next_int_bounded(max - min) + min`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max` or `max - min` overflows `i32`.
    fn fill_ints_in(&mut self, dest: &mut [i32], min: i32, max: i32) {
        let width = match int_width(min, max) {
            Ok(width) => width,
            Err(_) => panic!("fill_ints_in called with an invalid range"),
        };
        fill_bounded(self, dest, min, width);
    }

    /// As [`Random::fill_ints_in`], returning an error instead of panicking.
    /// `dest` is untouched on error.
    fn try_fill_ints_in(&mut self, dest: &mut [i32], min: i32, max: i32) -> Result<(), Error> {
        let width = int_width(min, max)?;
        fill_bounded(self, dest, min, width);
        Ok(())
    }

    /// Fill `dest` with values in `[min, max)`, each computed as
    /// `next_double() * (max - min) + min`.
    ///
    /// The result of that expression is rounded, so when `max - min` is
    /// small next to the spacing of floats near `min` a value may equal
    /// `max`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max` or the width of the range is not finite.
    fn fill_doubles_in(&mut self, dest: &mut [f64], min: f64, max: f64) {
        assert!(
            double_range_ok(min, max),
            "fill_doubles_in called with an invalid range"
        );
        fill_scaled(self, dest, min, max);
    }

    /// As [`Random::fill_doubles_in`], returning an error instead of
    /// panicking. `dest` is untouched on error. The same rounding applies,
    /// so a narrow range may yield `max`.
    fn try_fill_doubles_in(&mut self, dest: &mut [f64], min: f64, max: f64) -> Result<(), Error> {
        if !double_range_ok(min, max) {
            return Err(Error::InvalidRange);
        }
        fill_scaled(self, dest, min, max);
        Ok(())
    }
}

fn bounded<R: Random + ?Sized>(rng: &mut R, bound: i32) -> i32 {
    debug_assert!(bound > 0);
    if bound & bound.wrapping_neg() == bound {
        // Power of two: take the high bits.
        return ((i64::from(bound) * i64::from(rng.next_bits(31))) >> 31) as i32;
    }
    loop {
        let bits = rng.next_bits(31) as i32;
        let val = bits % bound;
        // Reject the incomplete final interval of [0, 2^31).
        if (bits - val).checked_add(bound - 1).is_some() {
            return val;
        }
    }
}

fn int_width(min: i32, max: i32) -> Result<i32, Error> {
    match max.checked_sub(min) {
        Some(width) if width > 0 => Ok(width),
        _ => Err(Error::InvalidRange),
    }
}

fn double_range_ok(min: f64, max: f64) -> bool {
    min < max && (max - min).is_finite()
}

fn fill_bounded<R: Random + ?Sized>(rng: &mut R, dest: &mut [i32], min: i32, width: i32) {
    for x in dest {
        *x = bounded(rng, width) + min;
    }
}

fn fill_scaled<R: Random + ?Sized>(rng: &mut R, dest: &mut [f64], min: f64, max: f64) {
    for x in dest {
        *x = rng.next_double() * (max - min) + min;
    }
}

#[cfg(test)]
mod test {
    use super::sealed::Core;
    use super::*;
    use crate::Lcg48;

    #[test]
    fn power_of_two_takes_high_bits() {
        for &bound in &[1, 2, 16, 1 << 20, 1 << 30] {
            let mut rng = Lcg48::with_seed(99);
            let mut replay = rng.clone();
            let got = rng.next_int_bounded(bound);
            let bits = i64::from(replay.next_bits(31));
            assert_eq!(got, ((i64::from(bound) * bits) >> 31) as i32);
            // exactly one step consumed
            assert_eq!(rng.next_int(), replay.next_int());
        }
    }

    #[test]
    fn bounded_reference_values() {
        let mut rng = Lcg48::with_seed(42);
        let got: Vec<i32> = (0..10).map(|_| rng.next_int_bounded(10)).collect();
        assert_eq!(got, [0, 3, 8, 4, 0, 5, 5, 8, 9, 3]);

        let mut rng = Lcg48::with_seed(42);
        let got: Vec<i32> = (0..6).map(|_| rng.next_int_bounded(100)).collect();
        assert_eq!(got, [30, 63, 48, 84, 70, 25]);

        let mut rng = Lcg48::with_seed(42);
        let got: Vec<i32> = (0..5).map(|_| rng.next_int_bounded(16)).collect();
        assert_eq!(got, [11, 0, 10, 0, 4]);
    }

    #[test]
    fn bounded_stays_in_range() {
        let mut rng = Lcg48::with_seed(7);
        for &bound in &[1, 3, 7, 10, 1000, 0x4000_0001, i32::MAX] {
            for _ in 0..1000 {
                let v = rng.next_int_bounded(bound);
                assert!((0..bound).contains(&v));
            }
        }
    }

    #[test]
    #[should_panic(expected = "bound <= 0")]
    fn zero_bound_panics() {
        Lcg48::with_seed(0).next_int_bounded(0);
    }

    #[test]
    fn checked_bound() {
        let mut rng = Lcg48::with_seed(0);
        assert_eq!(rng.try_next_int_bounded(0), Err(Error::NonPositiveBound));
        assert_eq!(rng.try_next_int_bounded(-5), Err(Error::NonPositiveBound));
        let mut a = Lcg48::with_seed(3);
        let mut b = Lcg48::with_seed(3);
        assert_eq!(a.try_next_int_bounded(37), Ok(b.next_int_bounded(37)));
    }

    #[test]
    fn scalar_reference_values() {
        let mut rng = Lcg48::with_seed(0);
        assert_eq!(rng.next_long(), -4962768461381414600);

        let mut rng = Lcg48::with_seed(0);
        assert_eq!(rng.next_double(), 0.730967787376657);
        assert_eq!(rng.next_double(), 0.24053641567148587);

        let mut rng = Lcg48::with_seed(0);
        assert_eq!(rng.next_float(), 0.7309677600860596);

        let mut rng = Lcg48::with_seed(0);
        let bools: Vec<bool> = (0..8).map(|_| rng.next_boolean()).collect();
        assert_eq!(bools, [true, true, false, true, true, false, true, false]);
    }

    #[test]
    fn bytes_follow_next_int() {
        for len in 0..13 {
            let mut rng = Lcg48::with_seed(12345);
            let mut replay = rng.clone();
            let mut buf = vec![0u8; len];
            rng.next_bytes(&mut buf);

            let mut expected = Vec::new();
            while expected.len() < len {
                expected.extend_from_slice(&replay.next_int().to_le_bytes());
            }
            expected.truncate(len);
            assert_eq!(buf, expected);
            assert_eq!(rng.next_int(), replay.next_int());
        }
    }

    #[test]
    fn fill_ints_in_offsets() {
        let mut rng = Lcg48::with_seed(7);
        let mut buf = [0i32; 6];
        rng.fill_ints_in(&mut buf, -5, 5);
        assert_eq!(buf, [1, -1, 0, -1, -5, -1]);
    }

    #[test]
    fn fill_ints_in_full_width() {
        let mut rng = Lcg48::with_seed(1);
        let mut buf = [0i32; 64];
        assert_eq!(
            rng.try_fill_ints_in(&mut buf, i32::MIN, i32::MAX),
            Err(Error::InvalidRange)
        );
        assert_eq!(buf, [0; 64]);
        rng.fill_ints_in(&mut buf, i32::MIN, -1);
        assert!(buf.iter().all(|&x| x < 0));
    }

    #[test]
    fn checked_ranges() {
        let mut rng = Lcg48::with_seed(1);
        let mut ints = [0i32; 4];
        assert_eq!(rng.try_fill_ints_in(&mut ints, 3, 3), Err(Error::InvalidRange));
        assert_eq!(rng.try_fill_ints_in(&mut ints, 4, 3), Err(Error::InvalidRange));
        let mut doubles = [0f64; 4];
        assert_eq!(
            rng.try_fill_doubles_in(&mut doubles, 1.0, 1.0),
            Err(Error::InvalidRange)
        );
        assert_eq!(
            rng.try_fill_doubles_in(&mut doubles, f64::MIN, f64::MAX),
            Err(Error::InvalidRange)
        );
        assert_eq!(
            rng.try_fill_doubles_in(&mut doubles, 0.0, f64::NAN),
            Err(Error::InvalidRange)
        );
        assert!(rng.try_fill_doubles_in(&mut doubles, -2.0, 2.0).is_ok());
        assert!(doubles.iter().all(|&x| (-2.0..2.0).contains(&x)));
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn reversed_double_range_panics() {
        let mut buf = [0f64; 2];
        Lcg48::with_seed(0).fill_doubles_in(&mut buf, 1.0, 0.0);
    }

    #[test]
    fn narrow_double_range_may_round_to_max() {
        // Floats near 1e16 are 2.0 apart, so every value rounds to an end.
        let (min, max) = (1e16, 1e16 + 2.0);
        let mut buf = [0f64; 64];
        Lcg48::with_seed(1).fill_doubles_in(&mut buf, min, max);
        assert!(buf.iter().all(|&x| x == min || x == max));
        assert_eq!(buf.iter().filter(|&&x| x == max).count(), 30);

        let mut checked = [0f64; 64];
        assert_eq!(
            Lcg48::with_seed(1).try_fill_doubles_in(&mut checked, min, max),
            Ok(())
        );
        assert_eq!(checked, buf);
    }

    #[test]
    fn fills_match_scalars() {
        let mut rng = Lcg48::with_seed(2024);
        let mut replay = rng.clone();

        let mut ints = [0i32; 5];
        rng.fill_ints(&mut ints);
        for &x in &ints {
            assert_eq!(x, replay.next_int());
        }

        let mut doubles = [0f64; 5];
        rng.fill_doubles(&mut doubles);
        for &x in &doubles {
            assert_eq!(x, replay.next_double());
        }

        let mut scaled = [0f64; 5];
        rng.fill_doubles_in(&mut scaled, 10.0, 20.0);
        for &x in &scaled {
            assert_eq!(x, replay.next_double() * 10.0 + 10.0);
        }
    }
}
