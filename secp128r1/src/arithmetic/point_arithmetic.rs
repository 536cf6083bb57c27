//! Group law for short Weierstrass curves in affine coordinates.
//!
//! Implements the chord-and-tangent construction with explicit handling of
//! the point at infinity. Slopes are computed with a modular inverse per
//! operation, so every addition performs one extended-gcd run.

use super::{
    AffinePoint, CurveParams,
    modular::{canonical_mod, inverse_mod},
};
use crate::Result;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Returns `-point`.
pub(crate) fn negate(params: &CurveParams, point: &AffinePoint) -> AffinePoint {
    if point.is_identity() {
        return point.clone();
    }

    AffinePoint::from_coordinates(point.x.clone(), canonical_mod(&-&point.y, &params.p))
}

/// Returns `lhs + rhs`.
///
/// Both operands are expected to lie on the curve with coordinates reduced
/// modulo `p`. Otherwise the slope denominator may vanish, which surfaces as
/// [`Error::InvalidOperand`](crate::Error::InvalidOperand).
pub(crate) fn add(
    params: &CurveParams,
    lhs: &AffinePoint,
    rhs: &AffinePoint,
) -> Result<AffinePoint> {
    if lhs.is_identity() {
        return Ok(rhs.clone());
    }

    if rhs.is_identity() {
        return Ok(lhs.clone());
    }

    let (x1, y1) = (&lhs.x, &lhs.y);
    let (x2, y2) = (&rhs.x, &rhs.y);

    // lhs = -rhs
    if x1 == x2 && y1 != y2 {
        return Ok(AffinePoint::identity());
    }

    let slope = if x1 == x2 {
        // tangent: (3·x1² + a) / (2·y1)
        let numerator = BigInt::from(3u8) * x1 * x1 + &params.a;
        numerator * inverse_mod(&(y1 * BigInt::from(2u8)), &params.p)?
    } else {
        // chord: (y1 - y2) / (x1 - x2)
        (y1 - y2) * inverse_mod(&(x1 - x2), &params.p)?
    };
    let slope = canonical_mod(&slope, &params.p);

    let x3 = &slope * &slope - x1 - x2;
    let y3 = y1 + &slope * (&x3 - x1);

    Ok(AffinePoint::from_coordinates(
        canonical_mod(&x3, &params.p),
        canonical_mod(&-y3, &params.p),
    ))
}

/// Returns `point + point`.
pub(crate) fn double(params: &CurveParams, point: &AffinePoint) -> Result<AffinePoint> {
    add(params, point, point)
}

/// Returns `k * point` computed with double-and-add, least significant bit
/// first.
///
/// Negative scalars multiply the negated point by `|k|`. Any `k ≡ 0 (mod n)`
/// yields the identity.
pub(crate) fn mul(
    params: &CurveParams,
    k: &BigInt,
    point: &AffinePoint,
) -> Result<AffinePoint> {
    if point.is_identity() || canonical_mod(k, &params.n).is_zero() {
        return Ok(AffinePoint::identity());
    }

    let mut addend = if k.is_negative() {
        negate(params, point)
    } else {
        point.clone()
    };
    let k = k.abs();

    let mut result = AffinePoint::identity();
    for i in 0..k.bits() {
        if k.bit(i) {
            result = add(params, &result, &addend)?;
        }

        addend = double(params, &addend)?;
    }

    Ok(result)
}

/// Does `point` satisfy `y² = x³ + a·x + b (mod p)`?
///
/// The identity is considered to be on the curve.
pub(crate) fn is_on_curve(params: &CurveParams, point: &AffinePoint) -> bool {
    if point.is_identity() {
        return true;
    }

    let (x, y) = (&point.x, &point.y);
    let rhs = x * x * x + &params.a * x + &params.b;

    canonical_mod(&(y * y - rhs), &params.p).is_zero()
}

#[cfg(test)]
mod tests {
    use super::{add, double, is_on_curve, mul, negate};
    use crate::{
        AffinePoint, BigInt, Error, Secp128r1, test_vectors::group::ADD_TEST_VECTORS,
    };
    use num_bigint::Sign;

    fn point_from_bytes(coordinates: &([u8; 16], [u8; 16])) -> AffinePoint {
        AffinePoint::from_coordinates(
            BigInt::from_bytes_be(Sign::Plus, &coordinates.0),
            BigInt::from_bytes_be(Sign::Plus, &coordinates.1),
        )
    }

    #[test]
    fn repeated_add_matches_vectors() {
        let params = Secp128r1::params();
        let generator = params.generator();
        let mut p = generator.clone();

        for vector in ADD_TEST_VECTORS {
            assert_eq!(p, point_from_bytes(vector));
            assert!(is_on_curve(params, &p));
            p = add(params, &p, generator).unwrap();
        }
    }

    #[test]
    fn mul_matches_vectors() {
        let params = Secp128r1::params();

        for (i, vector) in ADD_TEST_VECTORS.iter().enumerate() {
            let k = BigInt::from(i + 1);
            assert_eq!(
                mul(params, &k, params.generator()).unwrap(),
                point_from_bytes(vector)
            );
        }
    }

    #[test]
    fn identity_absorption() {
        let params = Secp128r1::params();
        let g = params.generator();
        let identity = AffinePoint::identity();

        assert_eq!(add(params, g, &identity).unwrap(), *g);
        assert_eq!(add(params, &identity, g).unwrap(), *g);
        assert_eq!(add(params, &identity, &identity).unwrap(), identity);
        assert_eq!(negate(params, &identity), identity);
    }

    #[test]
    fn add_inverse_pair() {
        let params = Secp128r1::params();
        let g = params.generator();
        assert!(add(params, g, &negate(params, g)).unwrap().is_identity());
    }

    #[test]
    fn double_matches_add() {
        let params = Secp128r1::params();
        let g = params.generator();
        assert_eq!(double(params, g).unwrap(), add(params, g, g).unwrap());
        assert_eq!(
            mul(params, &BigInt::from(2u8), g).unwrap(),
            double(params, g).unwrap()
        );
    }

    #[test]
    fn mul_by_order() {
        let params = Secp128r1::params();
        let g = params.generator();
        let n = params.order();

        assert!(mul(params, n, g).unwrap().is_identity());
        assert!(mul(params, &BigInt::from(0u8), g).unwrap().is_identity());
        assert_eq!(
            mul(params, &(n - BigInt::from(1u8)), g).unwrap(),
            negate(params, g)
        );
        assert_eq!(mul(params, &(n + BigInt::from(1u8)), g).unwrap(), *g);
    }

    #[test]
    fn mul_negative_scalar() {
        let params = Secp128r1::params();
        let g = params.generator();
        let k = BigInt::from(-3);

        assert_eq!(
            mul(params, &k, g).unwrap(),
            negate(params, &mul(params, &BigInt::from(3u8), g).unwrap())
        );
    }

    #[test]
    fn off_curve_point() {
        let params = Secp128r1::params();
        let point = AffinePoint::from_coordinates(BigInt::from(1u8), BigInt::from(1u8));
        assert!(!is_on_curve(params, &point));
        assert!(is_on_curve(params, &AffinePoint::identity()));

        // doubling a point with y = 0 needs the inverse of zero
        let point = AffinePoint::from_coordinates(BigInt::from(1u8), BigInt::from(0u8));
        assert_eq!(double(params, &point), Err(Error::InvalidOperand));
    }
}
