// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 48-bit linear congruential generator of `java.util.Random`.
//!
//! This crate reproduces, bit-for-bit, the generator documented by
//! [`java.util.Random`] (and adopted by the LCLib Random specification).
//! Given the same seed, every derived operation (integers, bounded integers,
//! longs, floats, doubles, Gaussian deviates, booleans and byte or array
//! fills) yields exactly the sequence any other conforming implementation
//! yields.
//!
//! **This generator is not cryptographically secure** and must not be used
//! for security purposes. Its state is only 48 bits wide and is trivially
//! recovered from a few outputs.
//!
//! ## Generators
//!
//! -   [`Lcg48`]: the plain generator. All operations take `&mut self`.
//! -   [`SyncLcg48`]: the same generator with an atomic state, usable through
//!     a shared reference from many threads at once. Contention makes a shared
//!     instance slow; prefer one generator per thread where possible.
//! -   [`thread_rng`]: a lazily created, automatically seeded [`Lcg48`] per
//!     thread, dropped when its thread exits.
//!
//! All of them implement the [`Random`] trait, which carries the derived
//! operations.
//!
//! ## Seeding
//!
//! ```
//! use rand_lcg48::{Lcg48, Random};
//!
//! let mut rng = Lcg48::with_seed(0);
//! assert_eq!(rng.next_int(), -1155484576);
//!
//! // A fresh, process-unique seed:
//! let mut other = Lcg48::new();
//! let _ = other.next_double();
//! ```
//!
//! [`Lcg48`] also implements [`SeedableRng`] and [`RngCore`], so it can be
//! handed to anything built on `rand_core`.
//!
//! ## Crate features
//!
//! -   `getrandom` (default): mix OS entropy into auto-seeding.
//! -   `serde1`: serialize and deserialize [`Lcg48`].
//! -   `log`: emit log records through the `log` crate.
//! -   `rayon`: parallel array fills producing the sequential output.
//!
//! [`java.util.Random`]: https://docs.oracle.com/javase/8/docs/api/java/util/Random.html
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico",
    html_root_url = "https://docs.rs/rand_lcg48"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

#[macro_use]
mod log_macros;

mod error;
mod gaussian;
mod lcg48;
#[cfg(feature = "rayon")]
mod par;
mod random;
mod seed;
mod sync;
mod thread;

pub use rand_core;

pub use crate::error::Error;
pub use crate::lcg48::Lcg48;
pub use crate::random::Random;
pub use crate::sync::SyncLcg48;
pub use crate::thread::{thread_rng, ThreadRng};
