// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Marsaglia's polar method for standard normal deviates.

use crate::random::Random;

/// Generate two independent `N(0, 1)` deviates from uniform pairs.
///
/// The first element is returned to the caller, the second cached for the
/// next call to `next_gaussian`.
pub(crate) fn polar_pair<R: Random + ?Sized>(rng: &mut R) -> (f64, f64) {
    loop {
        let v1 = 2.0 * rng.next_double() - 1.0;
        let v2 = 2.0 * rng.next_double() - 1.0;
        let s = v1 * v1 + v2 * v2;
        if s < 1.0 && s != 0.0 {
            let multiplier = (-2.0 * s.ln() / s).sqrt();
            return (v1 * multiplier, v2 * multiplier);
        }
    }
}
