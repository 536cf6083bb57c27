//! Pure Rust implementation of group operations on secp128r1.
//!
//! Curve parameters can be found in [SEC 2 v1.0] § 2.3.3: Recommended
//! Parameters secp128r1.
//!
//! [SEC 2 v1.0]: https://www.secg.org/SEC2-Ver-1.0.pdf

pub(crate) mod affine;
pub mod modular;
pub(crate) mod point_arithmetic;

pub use self::affine::AffinePoint;

use crate::Secp128r1;
use alloc::{boxed::Box, vec};
use hex_literal::hex;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use once_cell::race::OnceBox;
use rand_core::CryptoRngCore;

/// p = 2^128 - 2^97 - 1
const MODULUS: [u8; 16] = hex!("fffffffdffffffffffffffffffffffff");

/// a = -3 (=0xfffffffd ffffffff ffffffff fffffffc)
const EQUATION_A: [u8; 16] = hex!("fffffffdfffffffffffffffffffffffc");

/// b = 0xe87579c1 1079f43d d824993c 2cee5ed3
const EQUATION_B: [u8; 16] = hex!("e87579c11079f43dd824993c2cee5ed3");

/// Base point of secp128r1.
///
/// ```text
/// Gₓ = 0x161ff752 8b899b2d 0c28607c a52c5b86
/// Gᵧ = 0xcf5ac839 5bafeb13 c02da292 dded7a83
/// ```
const GENERATOR: ([u8; 16], [u8; 16]) = (
    hex!("161ff7528b899b2d0c28607ca52c5b86"),
    hex!("cf5ac8395bafeb13c02da292dded7a83"),
);

/// Order of the secp128r1 group (i.e. scalar modulus).
const ORDER: [u8; 16] = hex!("fffffffe0000000075a30d1b9038a115");

const COFACTOR: u32 = 1;

static PARAMS: OnceBox<CurveParams> = OnceBox::new();

/// Domain parameters of a short Weierstrass curve `y² = x³ + a·x + b`
/// over the prime field `GF(p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    pub(crate) p: BigInt,
    pub(crate) a: BigInt,
    pub(crate) b: BigInt,
    pub(crate) generator: AffinePoint,
    pub(crate) n: BigInt,
    pub(crate) h: u32,
}

impl CurveParams {
    fn secp128r1() -> Self {
        Self {
            p: from_be_bytes(&MODULUS),
            a: from_be_bytes(&EQUATION_A),
            b: from_be_bytes(&EQUATION_B),
            generator: AffinePoint::from_coordinates(
                from_be_bytes(&GENERATOR.0),
                from_be_bytes(&GENERATOR.1),
            ),
            n: from_be_bytes(&ORDER),
            h: COFACTOR,
        }
    }

    /// Field characteristic `p`.
    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Order `n` of the subgroup generated by `G`.
    pub fn order(&self) -> &BigInt {
        &self.n
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u32 {
        self.h
    }

    /// Draw a scalar uniformly from `[1, n)` by rejection sampling.
    ///
    /// Random bytes are drawn for the byte length of `n`, the bits above the
    /// bit length of `n` are cleared, and the candidate is rejected if it is
    /// zero or not below `n`.
    pub fn random_nonzero_scalar(&self, rng: &mut impl CryptoRngCore) -> BigInt {
        let order_bits = self.n.bits();
        let len = order_bits.div_ceil(8) as usize;
        let excess = (len as u64) * 8 - order_bits;
        let mut bytes = vec![0u8; len];

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0xffu8 >> excess;

            let candidate = from_be_bytes(&bytes);
            if !candidate.is_zero() && candidate < self.n {
                return candidate;
            }
        }
    }
}

impl Secp128r1 {
    /// Domain parameters of secp128r1.
    ///
    /// Initialized on first use and shared for the lifetime of the process.
    pub fn params() -> &'static CurveParams {
        PARAMS.get_or_init(|| Box::new(CurveParams::secp128r1()))
    }
}

fn from_be_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}
