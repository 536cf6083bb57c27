//! Test vectors for the secp128r1 group.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 4 multiples of the generator, as affine `(x, y)`
/// coordinates.
pub const ADD_TEST_VECTORS: &[([u8; 16], [u8; 16]); 4] = &[
    (
        hex!("161ff7528b899b2d0c28607ca52c5b86"),
        hex!("cf5ac8395bafeb13c02da292dded7a83"),
    ),
    (
        hex!("8151a0c6b92171db199db84be753a97e"),
        hex!("03d853559455caae838395a9275b7e95"),
    ),
    (
        hex!("0ad632f542942f23aa423b628a304b3b"),
        hex!("7aa67ee421c4e78851e4b4679bcdc41f"),
    ),
    (
        hex!("47487e914aae409decb6495fbdd2647f"),
        hex!("4e67a67404c56ae34783239f70a198d3"),
    ),
];
