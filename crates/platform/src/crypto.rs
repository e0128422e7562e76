//! Cryptographic Utilities

use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash (the pre-standard SHA-3 variant used on-chain)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash two 32-byte words in order
///
/// Equivalent to `keccak256(abi.encode(bytes32 first, bytes32 second))`:
/// static `bytes32` values are ABI-encoded as their raw 32 bytes, so the
/// encoding is the plain 64-byte concatenation.
pub fn hash_pair(first: &[u8; 32], second: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}
