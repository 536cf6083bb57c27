#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod error;

pub mod ecdsa;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{AffinePoint, CurveParams, modular},
    error::{Error, Result},
};
pub use num_bigint::{self, BigInt};
pub use rand_core;

/// secp128r1 elliptic curve.
///
/// Only the curve parameters listed in [SEC 2 v1.0] § 2.3.3 are supported;
/// they are available through [`Secp128r1::params`].
///
/// [SEC 2 v1.0]: https://www.secg.org/SEC2-Ver-1.0.pdf
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp128r1;
