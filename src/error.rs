// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use std::{error, fmt};

/// Error type returned by the checked `try_*` methods of [`Random`].
///
/// The unchecked methods panic in the same situations.
///
/// [`Random`]: crate::Random
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `bound <= 0` passed to a bounded integer generator.
    NonPositiveBound,
    /// `min >= max`, `max - min` is not representable, or a bound is not
    /// finite.
    InvalidRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::NonPositiveBound => "bound must be positive",
            Error::InvalidRange => "range must satisfy min < max with a representable width",
        })
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(Error::NonPositiveBound.to_string(), "bound must be positive");
        assert!(Error::InvalidRange.to_string().contains("min < max"));
    }
}
