//! Modular arithmetic over arbitrary-precision integers.
//!
//! These helpers are shared by the base field (modulo `p`) and the scalar
//! field (modulo `n`). None of them run in constant time.

use crate::{Error, Result};
use core::mem;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Reduce `a` to its canonical residue modulo `m`, i.e. the unique value in
/// `[0, m)` congruent to `a`.
///
/// `m` must be positive.
pub fn canonical_mod(a: &BigInt, m: &BigInt) -> BigInt {
    ((a % m) + m) % m
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a·x + b·y = g`, where `g` is the gcd of
/// `a` and `b` up to sign.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_x = &old_x - &q * &x;
        old_x = mem::replace(&mut x, next_x);

        let next_y = &old_y - &q * &y;
        old_y = mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Compute `k⁻¹ mod m`, returned in `[1, m)`.
///
/// `m` is expected to be prime.
///
/// # Errors
///
/// - [`Error::InvalidOperand`] if `k ≡ 0 (mod m)` or `m` is not positive.
/// - [`Error::ArithmeticInvariant`] if `gcd(k, m) ≠ 1`, which can only
///   happen when `m` is composite.
pub fn inverse_mod(k: &BigInt, m: &BigInt) -> Result<BigInt> {
    if !m.is_positive() || canonical_mod(k, m).is_zero() {
        return Err(Error::InvalidOperand);
    }

    // k⁻¹ = m - (-k)⁻¹ for negative k
    let negative = k.is_negative();
    let k = k.abs();

    let (gcd, _, x) = extended_gcd(m, &k);
    if !gcd.is_one() {
        return Err(Error::ArithmeticInvariant);
    }

    let inverse = canonical_mod(&x, m);
    if !canonical_mod(&(&k * &inverse), m).is_one() {
        return Err(Error::ArithmeticInvariant);
    }

    if negative {
        Ok(m - inverse)
    } else {
        Ok(inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_mod, extended_gcd, inverse_mod};
    use crate::{BigInt, Error, Secp128r1};
    use num_traits::One;
    use proptest::prelude::*;

    fn int(value: i64) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn canonical_mod_is_non_negative() {
        assert_eq!(canonical_mod(&int(17), &int(5)), int(2));
        assert_eq!(canonical_mod(&int(-17), &int(5)), int(3));
        assert_eq!(canonical_mod(&int(-5), &int(5)), int(0));
        assert_eq!(canonical_mod(&int(0), &int(5)), int(0));
        assert_eq!(canonical_mod(&int(4), &int(5)), int(4));
    }

    #[test]
    fn canonical_mod_of_wide_operands() {
        let p = Secp128r1::params().modulus();
        let a = -(p * p) - int(5);
        assert_eq!(canonical_mod(&a, p), p - int(5));
        assert_eq!(canonical_mod(&(p * int(3) + int(1)), p), int(1));
    }

    #[test]
    fn extended_gcd_bezout_identity() {
        for (a, b) in [(240, 46), (46, 240), (-240, 46), (17, 5), (0, 7), (7, 0)] {
            let (a, b) = (int(a), int(b));
            let (g, x, y) = extended_gcd(&a, &b);
            assert_eq!(&a * &x + &b * &y, g);
        }

        assert_eq!(extended_gcd(&int(240), &int(46)).0, int(2));
    }

    #[test]
    fn inverse_mod_small_prime() {
        assert_eq!(inverse_mod(&int(3), &int(7)), Ok(int(5)));
        assert_eq!(inverse_mod(&int(10), &int(7)), Ok(int(5)));
        assert_eq!(inverse_mod(&int(-3), &int(7)), Ok(int(2)));
    }

    #[test]
    fn inverse_mod_of_zero() {
        assert_eq!(inverse_mod(&int(0), &int(7)), Err(Error::InvalidOperand));
        assert_eq!(inverse_mod(&int(14), &int(7)), Err(Error::InvalidOperand));
        assert_eq!(inverse_mod(&int(-7), &int(7)), Err(Error::InvalidOperand));
        assert_eq!(inverse_mod(&int(3), &int(0)), Err(Error::InvalidOperand));
    }

    #[test]
    fn inverse_mod_composite_modulus() {
        assert_eq!(inverse_mod(&int(6), &int(9)), Err(Error::ArithmeticInvariant));
    }

    proptest! {
        #[test]
        fn inverse_mod_field_modulus(bytes in any::<[u8; 16]>()) {
            let p = Secp128r1::params().modulus();
            let k = canonical_mod(&BigInt::from_bytes_be(num_bigint::Sign::Plus, &bytes), p);
            prop_assume!(k != BigInt::from(0u8));

            let inverse = inverse_mod(&k, p).unwrap();
            prop_assert!(inverse > BigInt::from(0u8) && &inverse < p);
            prop_assert!(canonical_mod(&(&k * &inverse), p).is_one());
        }

        #[test]
        fn inverse_mod_negated_operand(value in 1i64..i64::MAX) {
            let n = Secp128r1::params().order();
            let k = BigInt::from(value);

            let inverse = inverse_mod(&k, n).unwrap();
            let negated = inverse_mod(&-k, n).unwrap();
            prop_assert_eq!(canonical_mod(&(inverse + negated), n), BigInt::from(0u8));
        }
    }
}
