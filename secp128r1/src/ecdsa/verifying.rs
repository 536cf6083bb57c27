//! Support for verifying ECDSA signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1: calculate z = SHA-512(M), truncated to the bit length of n
//! 2: calculate w = s^(-1) mod n
//! 3: verification failed if r or s is not in [1, n-1]
//! 4: calculate u1 = z*w mod n and u2 = r*w mod n
//! 5: calculate the point R' = [u1]G + [u2]Q
//! 6: verification pass if r = R'.x mod n, otherwise failed
//! ```

use super::{Signature, hash_message};
use crate::{
    AffinePoint, Error, Result, Secp128r1,
    modular::{canonical_mod, inverse_mod},
};
use num_traits::Signed;
use signature::Verifier;

/// ECDSA/secp128r1 public key used for verifying signatures are valid for a
/// given message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VerifyingKey {
    /// Signer's public point `Q`.
    public_point: AffinePoint,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns an [`Error::InvalidPoint`] if the point is the identity, has
    /// coordinates outside `[0, p)`, or does not lie on the curve.
    pub fn from_affine(public_point: AffinePoint) -> Result<Self> {
        let p = Secp128r1::params().modulus();
        let reduced = [public_point.x(), public_point.y()]
            .into_iter()
            .all(|coordinate| !coordinate.is_negative() && coordinate < p);

        if public_point.is_identity() || !reduced || !public_point.is_on_curve() {
            return Err(Error::InvalidPoint);
        }

        Ok(Self { public_point })
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.public_point
    }

    /// Verify `signature` over `message`.
    ///
    /// A signature that does not match is `Ok(false)`; signatures with `r`
    /// or `s` outside `[1, n)` never match.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperand`] if `s ≡ 0 (mod n)`.
    pub fn verify_message(&self, message: &[u8], signature: &Signature) -> Result<bool> {
        let n = Secp128r1::params().order();
        let z = hash_message(message)?;

        let w = inverse_mod(signature.s(), n)?;
        if !signature.is_in_range(n) {
            return Ok(false);
        }

        let u1 = canonical_mod(&(&z * &w), n);
        let u2 = canonical_mod(&(signature.r() * &w), n);

        let point = AffinePoint::mul_by_generator(&u1)?
            .checked_add(&self.public_point.checked_mul(&u2)?)?;

        Ok(canonical_mod(signature.r(), n) == canonical_mod(point.x(), n))
    }
}

//
// `*Verifier` trait impls
//

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_message(msg, signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        &self.public_point
    }
}

impl From<VerifyingKey> for AffinePoint {
    fn from(verifying_key: VerifyingKey) -> AffinePoint {
        verifying_key.public_point
    }
}

impl TryFrom<AffinePoint> for VerifyingKey {
    type Error = Error;

    fn try_from(public_point: AffinePoint) -> Result<Self> {
        Self::from_affine(public_point)
    }
}
