//! Contract address derivation
//!
//! CREATE:  `keccak256(rlp([sender, nonce]))[12..]`
//! CREATE2: `keccak256(0xff ++ sender ++ salt ++ keccak256(initcode))[12..]` (EIP-1014)

use crate::conversions::{
    address_from, hash_from, minimal_be_bytes, prefixed_hex, BytesConvertible,
};
use crate::errors::Result;
use crate::hashing::{HashPrimitive, Keccak256Hasher, RlpEncoder, SequenceEncoder};
use crate::types::{Address, Hash, IntoNonce, Nonce};
use alloc::string::String;
use tracing::trace;

/// Derives contract addresses from a hash and a list encoder
///
/// The default deriver uses Keccak256 and RLP; other primitives can be
/// plugged in to exercise the derivation in isolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressDeriver<H = Keccak256Hasher, E = RlpEncoder> {
    hasher: H,
    encoder: E,
}

impl<H: HashPrimitive, E: SequenceEncoder> AddressDeriver<H, E> {
    /// Create a deriver from explicit primitives
    pub const fn new(hasher: H, encoder: E) -> Self {
        Self { hasher, encoder }
    }

    /// Address of a contract created by `sender` with `nonce`
    pub fn create(&self, sender: &Address, nonce: Nonce) -> Address {
        // zero encodes to the empty string, like any RLP integer
        let nonce_bytes = minimal_be_bytes(nonce);
        let encoded = self
            .encoder
            .encode_list(&[sender.as_slice(), nonce_bytes.as_slice()]);
        let address = Self::take_address(&self.hasher.hash(&encoded));

        trace!(%sender, %nonce, %address, "derived CREATE address");
        address
    }

    /// Address of a contract created by `sender` through CREATE2
    pub fn create2(&self, sender: &Address, salt: &Hash, initcode: &[u8]) -> Address {
        let code_hash = self.hasher.hash(initcode);
        self.create2_from_code_hash(sender, salt, &code_hash)
    }

    /// CREATE2 address when the initcode hash is already known
    pub fn create2_from_code_hash(&self, sender: &Address, salt: &Hash, code_hash: &Hash) -> Address {
        // always 85 bytes: 0xff + 20 sender + 32 salt + 32 code hash
        let mut preimage = [0xff; 85];
        preimage[1..21].copy_from_slice(sender.as_slice());
        preimage[21..53].copy_from_slice(salt.as_slice());
        preimage[53..].copy_from_slice(code_hash.as_slice());

        let address = Self::take_address(&self.hasher.hash(&preimage));
        trace!(%sender, %salt, %code_hash, %address, "derived CREATE2 address");
        address
    }

    fn take_address(digest: &Hash) -> Address {
        Address::from_slice(&digest[12..])
    }
}

/// Typed CREATE address with Keccak256 and RLP
pub fn create_address(sender: &Address, nonce: impl IntoNonce) -> Address {
    AddressDeriver::<Keccak256Hasher, RlpEncoder>::default().create(sender, nonce.into_nonce())
}

/// Typed CREATE2 address with Keccak256
pub fn create2_address(sender: &Address, salt: &Hash, initcode: &[u8]) -> Address {
    AddressDeriver::<Keccak256Hasher, RlpEncoder>::default().create2(sender, salt, initcode)
}

/// Compute the address of a contract created by a transaction or `CREATE`
///
/// Returns the `0x`-prefixed lowercase hex address.
///
/// # Errors
/// Fails if `address` cannot be normalized to 20 bytes.
pub fn compute_create_address(
    address: impl Into<BytesConvertible>,
    nonce: impl IntoNonce,
) -> Result<String> {
    let sender = address_from(address)?;
    Ok(prefixed_hex(create_address(&sender, nonce).as_slice()))
}

/// Compute the address of a contract created by `CREATE2`
///
/// # Errors
/// Fails if `address` does not fit 20 bytes, `salt` does not fit 32 bytes,
/// or `initcode` is malformed hex.
pub fn compute_create2_address(
    address: impl Into<BytesConvertible>,
    salt: impl Into<BytesConvertible>,
    initcode: impl Into<BytesConvertible>,
) -> Result<String> {
    let sender = address_from(address)?;
    let salt = hash_from(salt)?;
    let initcode = initcode.into().to_bytes()?;
    Ok(prefixed_hex(create2_address(&sender, &salt, &initcode).as_slice()))
}
