//! Hashing and serialization primitives
//!
//! Provides Keccak256 hashing and RLP list encoding, the two primitives the
//! address derivation depends on. Both sit behind a small trait so the
//! derivation can be driven by other implementations in tests.

use crate::types::{Hash, B256};
use alloc::vec::Vec;
use alloy_rlp::{Encodable, Header};
use sha3::{Digest, Keccak256};

/// Fixed-width digest of arbitrary bytes
pub trait HashPrimitive {
    /// Hash `data` to a 32-byte digest
    fn hash(&self, data: &[u8]) -> Hash;
}

/// Canonical serialization of a flat list of byte strings
pub trait SequenceEncoder {
    /// Encode `items` as a single list
    fn encode_list(&self, items: &[&[u8]]) -> Vec<u8>;
}

/// Keccak256 as used throughout the protocol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl HashPrimitive for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> Hash {
        keccak256(data)
    }
}

/// Recursive length prefix encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RlpEncoder;

impl SequenceEncoder for RlpEncoder {
    fn encode_list(&self, items: &[&[u8]]) -> Vec<u8> {
        rlp_encode_list(items)
    }
}

/// Compute Keccak256 hash of arbitrary data
///
/// # Arguments
/// * `data` - Byte slice to hash
///
/// # Returns
/// 32-byte Keccak256 hash
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    B256::from_slice(&hasher.finalize())
}

/// RLP-encode a list of byte strings
///
/// Each item is encoded as an RLP string, so an empty slice becomes `0x80`
/// and a single byte below `0x80` is encoded as itself.
pub fn rlp_encode_list(items: &[&[u8]]) -> Vec<u8> {
    let payload_length: usize = items.iter().map(|item| item.length()).sum();
    let header = Header {
        list: true,
        payload_length,
    };

    let mut out = Vec::with_capacity(header.length() + payload_length);
    header.encode(&mut out);
    for item in items {
        item.encode(&mut out);
    }
    out
}
