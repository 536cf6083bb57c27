//! Affine curve points.

use super::point_arithmetic;
use crate::{Result, Secp128r1};
use core::ops::Neg;
use num_bigint::BigInt;
use num_traits::Zero;

/// Point on secp128r1 in affine coordinates.
///
/// The point at infinity is encoded as `(0, 0)`, which does not satisfy the
/// curve equation since `b ≠ 0`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigInt,

    /// y-coordinate
    pub(crate) y: BigInt,
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigInt::zero(),
            y: BigInt::zero(),
        }
    }

    /// Base point of the curve.
    pub fn generator() -> Self {
        Secp128r1::params().generator.clone()
    }

    /// Create a point from raw coordinates.
    ///
    /// The coordinates are not checked against the curve equation; see
    /// [`AffinePoint::is_on_curve`].
    pub fn from_coordinates(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Get the x-coordinate.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Get the y-coordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Does this point satisfy the curve equation? The identity does.
    pub fn is_on_curve(&self) -> bool {
        point_arithmetic::is_on_curve(Secp128r1::params(), self)
    }

    /// Returns `self + other`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        point_arithmetic::add(Secp128r1::params(), self, other)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        point_arithmetic::double(Secp128r1::params(), self)
    }

    /// Returns `k * self`.
    pub fn checked_mul(&self, k: &BigInt) -> Result<Self> {
        point_arithmetic::mul(Secp128r1::params(), k, self)
    }

    /// Returns `k * G`.
    pub fn mul_by_generator(k: &BigInt) -> Result<Self> {
        let params = Secp128r1::params();
        point_arithmetic::mul(params, k, &params.generator)
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl Neg for AffinePoint {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        point_arithmetic::negate(Secp128r1::params(), self)
    }
}
