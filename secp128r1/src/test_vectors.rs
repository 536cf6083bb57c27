//! secp128r1 test vectors.

pub mod ecdsa;
pub mod group;
