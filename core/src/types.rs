//! Core type definitions for the fixture helpers
//!
//! Uses alloy-primitives for Ethereum-compatible types.
//! These types are no_std compatible.

pub use alloy_primitives::{Address, B256, Bytes, U256};

/// 32-byte hash (Keccak256 output, salts, blob hashes)
pub type Hash = B256;

/// Account nonce type (protocol allows more than 64 bits)
pub type Nonce = U256;

/// Gas amount type
pub type Gas = U256;

/// Size of an EVM word in bytes
pub const WORD_SIZE: u64 = 32;

/// Length of an address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// Length of a hash in bytes
pub const HASH_LENGTH: usize = 32;

/// Version byte of KZG commitment versioned hashes (EIP-4844)
pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;

/// Integer types accepted as an account nonce
///
/// `U256` only offers an inherent `from`, so plain integers need this to be
/// passed where a nonce is expected.
pub trait IntoNonce {
    /// Widen to a [`Nonce`]
    fn into_nonce(self) -> Nonce;
}

macro_rules! impl_into_nonce {
    ($($t:ty),*) => {
        $(
            impl IntoNonce for $t {
                fn into_nonce(self) -> Nonce {
                    U256::from(self)
                }
            }
        )*
    };
}

impl_into_nonce!(u8, u16, u32, u64, u128, usize);

impl IntoNonce for U256 {
    fn into_nonce(self) -> Nonce {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let addr = Address::repeat_byte(0x42);
        assert_eq!(addr.as_slice()[0], 0x42);
        assert_eq!(addr.as_slice().len(), ADDRESS_LENGTH);
    }

    #[test]
    fn test_into_nonce() {
        assert_eq!(0u64.into_nonce(), U256::ZERO);
        assert_eq!(255u8.into_nonce(), U256::from(255u64));
        assert_eq!(u128::MAX.into_nonce(), U256::from(u128::MAX));
        assert_eq!(U256::MAX.into_nonce(), U256::MAX);
    }

    #[test]
    fn test_hash_zero() {
        let hash = Hash::ZERO;
        assert_eq!(hash.as_slice(), &[0u8; HASH_LENGTH]);
    }
}
