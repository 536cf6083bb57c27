//! Error type

use core::fmt::{self, Display};

/// Result type with the `secp128r1` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// secp128r1 arithmetic and signature errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Operand of a modular inverse is congruent to zero, or the modulus is
    /// not positive.
    InvalidOperand,

    /// The extended Euclidean algorithm produced a gcd other than one, or
    /// the computed inverse failed its post-condition.
    ArithmeticInvariant,

    /// Truncated message digest is wider than the group order.
    HashTruncationInvariant,

    /// Point is the identity or does not satisfy the curve equation.
    InvalidPoint,

    /// Secret scalar is outside `[1, n)`.
    ScalarOutOfRange,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidOperand => "modular inverse of zero",
            Error::ArithmeticInvariant => "gcd is not 1",
            Error::HashTruncationInvariant => "truncated hash is wider than the group order",
            Error::InvalidPoint => "point is not a valid curve point",
            Error::ScalarOutOfRange => "scalar is out of range",
        })
    }
}

impl core::error::Error for Error {}

impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}
