//! Support for ECDSA signing.
//!
//! ## Algorithm
//!
//! ```text
//! 1: calculate z = SHA-512(M), truncated to the bit length of n
//! 2: pick a random number k in [1, n-1]
//! 3: calculate the elliptic curve point R = [k]G
//! 4: calculate r = R.x mod n, return to 2 if r = 0
//! 5: calculate s = k^(-1) * (z + r*d) mod n, return to 2 if s = 0
//! 6: the digital signature of M is (r, s)
//! ```

use super::{Signature, VerifyingKey, hash_message};
use crate::{
    AffinePoint, BigInt, Error, Result, Secp128r1,
    modular::{canonical_mod, inverse_mod},
};
use core::fmt::{self, Debug};
use num_traits::{Signed, Zero};
use rand_core::CryptoRngCore;
use signature::{KeypairRef, RandomizedSigner};

#[cfg(feature = "getrandom")]
use {rand_core::OsRng, signature::Signer};

/// ECDSA/secp128r1 secret key used for signing messages and producing
/// signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`RandomizedSigner`]: sign a message with a caller-provided RNG
/// - [`Signer`](signature::Signer): sign a message with the operating
///   system's RNG (requires the `getrandom` feature)
#[derive(Clone, Eq, PartialEq)]
pub struct SigningKey {
    /// Secret scalar `d`.
    secret_scalar: BigInt,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a random [`SigningKey`].
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let params = Secp128r1::params();

        loop {
            let secret_scalar = params.random_nonzero_scalar(rng);
            if let Ok(signing_key) = Self::from_scalar(secret_scalar) {
                return signing_key;
            }
        }
    }

    /// Create a signing key from a secret scalar in `[1, n)`.
    pub fn from_scalar(secret_scalar: BigInt) -> Result<Self> {
        if !secret_scalar.is_positive() || &secret_scalar >= Secp128r1::params().order() {
            return Err(Error::ScalarOutOfRange);
        }

        let public_point = AffinePoint::mul_by_generator(&secret_scalar)?;
        let verifying_key = VerifyingKey::from_affine(public_point)?;

        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Borrow the secret scalar value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigInt {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign `message`, drawing nonces from `rng`.
    ///
    /// Nonces yielding `r = 0` or `s = 0` are discarded and a fresh one is
    /// drawn.
    pub fn sign_message(
        &self,
        rng: &mut impl CryptoRngCore,
        message: &[u8],
    ) -> Result<Signature> {
        let params = Secp128r1::params();
        let z = hash_message(message)?;

        loop {
            let k = params.random_nonzero_scalar(rng);
            if let Some(signature) = sign_digest(&self.secret_scalar, &z, &k)? {
                return Ok(signature);
            }
        }
    }
}

//
// `*Signer` trait impls
//

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        Ok(self.sign_message(rng, msg)?)
    }
}

#[cfg(feature = "getrandom")]
impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        Ok(self.sign_message(&mut OsRng, msg)?)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}

/// Sign the truncated message digest `z` with secret scalar `d` and nonce
/// `k`.
///
/// Returns `None` if the nonce yields `r = 0` or `s = 0`.
pub(crate) fn sign_digest(d: &BigInt, z: &BigInt, k: &BigInt) -> Result<Option<Signature>> {
    let n = Secp128r1::params().order();

    // R = [k]G
    let big_r = AffinePoint::mul_by_generator(k)?;

    // r = R.x mod n
    let r = canonical_mod(big_r.x(), n);
    if r.is_zero() {
        return Ok(None);
    }

    // s = k^(-1) * (z + r*d) mod n
    let s = canonical_mod(&((z + &r * d) * inverse_mod(k, n)?), n);
    if s.is_zero() {
        return Ok(None);
    }

    Ok(Some(Signature::from_scalars(r, s)))
}
