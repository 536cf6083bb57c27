//! ECDSA/secp128r1 test vectors

use hex_literal::hex;

/// ECDSA test vector with a fixed nonce.
pub struct TestVector {
    /// Secret scalar `d`.
    pub d: &'static [u8],

    /// x-coordinate of the public point `Q = d·G`.
    pub q_x: &'static [u8],

    /// y-coordinate of the public point `Q = d·G`.
    pub q_y: &'static [u8],

    /// Nonce `k`.
    pub k: &'static [u8],

    /// Message, hashed with SHA-512 before signing.
    pub m: &'static [u8],

    /// Signature `r` component.
    pub r: &'static [u8],

    /// Signature `s` component.
    pub s: &'static [u8],
}

/// ECDSA/secp128r1 (SHA-512) test vectors.
///
/// Generated with an independent affine reference implementation.
pub const ECDSA_TEST_VECTORS: &[TestVector; 3] = &[
    TestVector {
        d: &hex!("0123456789abcdef0fedcba987654321"),
        q_x: &hex!("04c07d662784d53bfd6d7d6be2347e26"),
        q_y: &hex!("5958fa91cf463ef21c274892ece1bdf4"),
        k: &hex!("5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a"),
        m: b"Hello!",
        r: &hex!("61238b99e0ad8c4fb21ea6b76b402fe2"),
        s: &hex!("032d5be5c14a0440de634a9fa45872c5"),
    },
    TestVector {
        d: &hex!("0000000000000000000000000000002a"),
        q_x: &hex!("c4032e707e4199c308527cfe06ef1192"),
        q_y: &hex!("813b4f12155f000479dfe38c5e6d1c4e"),
        k: &hex!("deadbeefdeadbeefdeadbeefdeadbeef"),
        m: b"Hi there!",
        r: &hex!("94821b5d58fe66295dd8a90a3fb2bf8d"),
        s: &hex!("c1b489df408a5e72c854651c4dc2a3cb"),
    },
    TestVector {
        d: &hex!("fffffffe0000000075a30d1b9038a114"),
        q_x: &hex!("161ff7528b899b2d0c28607ca52c5b86"),
        q_y: &hex!("30a537c4a45014ec3fd25d6d2212857c"),
        k: &hex!("00000000000000000000000000010001"),
        m: b"",
        r: &hex!("10ecfbb2e197bfb91e115108c5720de2"),
        s: &hex!("af620f33778b25cd23cf2dd48597772f"),
    },
];

/// SHA-512 digests truncated to the bit length of the group order.
pub const HASH_TEST_VECTORS: &[(&[u8], [u8; 16]); 3] = &[
    (b"Hello!" as &[u8], hex!("ea4a2a8b30efca469195f46d4783821f")),
    (b"Hi there!" as &[u8], hex!("bf7bd2ea42fb6eab58b821c14ee3a961")),
    (b"" as &[u8], hex!("cf83e1357eefb8bdf1542850d66d8007")),
];
