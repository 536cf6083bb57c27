//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! This module contains support for computing and verifying ECDSA signatures
//! over secp128r1, with messages hashed using SHA-512 and truncated to the
//! bit length of the group order.
//!
//! Nonces are drawn from a caller-provided random number generator; there is
//! no deterministic (RFC 6979) nonce derivation.
//!
//! ## Usage
//!
//! NOTE: requires the `getrandom` crate feature enabled.
//!
#![cfg_attr(feature = "getrandom", doc = "```")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use secp128r1::{
//!     ecdsa::{Signature, SigningKey, signature::{RandomizedSigner, Verifier}},
//!     rand_core::OsRng,
//! };
//!
//! // Signing
//! let signing_key = SigningKey::random(&mut OsRng);
//! let message = b"Hello!";
//! let signature: Signature = signing_key.sign_with_rng(&mut OsRng, message);
//!
//! // Verifying
//! let verifying_key = signing_key.verifying_key();
//! verifying_key.verify(message, &signature)?;
//! assert!(!verifying_key.verify_message(b"Hi there!", &signature)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};
pub use signature;

use crate::{AffinePoint, BigInt, Error, Result, Secp128r1};
use num_bigint::Sign;
use num_traits::Signed;
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha512};

/// ECDSA/secp128r1 signature: the pair of integers `(r, s)`.
///
/// Signatures produced by [`SigningKey`] have both components in `[1, n)`.
/// Arbitrary pairs can be constructed for verification.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Create a [`Signature`] from its `r` and `s` components.
    pub fn from_scalars(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Split the signature into its `r` and `s` components.
    pub fn split_scalars(self) -> (BigInt, BigInt) {
        (self.r, self.s)
    }

    /// Are both components in `[1, n)`?
    pub(crate) fn is_in_range(&self, n: &BigInt) -> bool {
        self.r.is_positive() && &self.r < n && self.s.is_positive() && &self.s < n
    }
}

impl From<(BigInt, BigInt)> for Signature {
    fn from((r, s): (BigInt, BigInt)) -> Self {
        Self::from_scalars(r, s)
    }
}

impl From<Signature> for (BigInt, BigInt) {
    fn from(signature: Signature) -> Self {
        signature.split_scalars()
    }
}

/// Generate a key pair: a secret scalar `d` in `[1, n)` and the public point
/// `Q = d·G`.
///
/// # ⚠️ Warning
///
/// The returned scalar is key material. Prefer [`SigningKey::random`], which
/// keeps it out of `Debug` output.
pub fn generate_keypair(rng: &mut impl CryptoRngCore) -> (BigInt, AffinePoint) {
    let signing_key = SigningKey::random(rng);
    let public_point = signing_key.verifying_key().as_affine().clone();
    (signing_key.as_scalar().clone(), public_point)
}

/// Hash `message` with SHA-512 and truncate the digest to the bit length of
/// the group order `n`.
///
/// The digest `e` is read as a big-endian unsigned integer and shifted by
/// `bits(e) - bits(n)`: to the right when `e` is wider than `n`, to the
/// left otherwise. A zero digest stays zero.
///
/// # Errors
///
/// [`Error::HashTruncationInvariant`] if the result is wider than `n`.
pub fn hash_message(message: &[u8]) -> Result<BigInt> {
    let order_bits = Secp128r1::params().n.bits();
    let e = BigInt::from_bytes_be(Sign::Plus, &Sha512::digest(message));
    let digest_bits = e.bits();

    let z = if digest_bits >= order_bits {
        e >> (digest_bits - order_bits)
    } else {
        e << (order_bits - digest_bits)
    };

    if z.bits() > order_bits {
        return Err(Error::HashTruncationInvariant);
    }

    Ok(z)
}
