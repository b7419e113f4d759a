//! Blob versioned hashes (EIP-4844)
//!
//! A versioned hash is a 32-byte hash whose first byte is replaced by a
//! version tag. Bytes 1..32 are carried over unchanged.

use crate::conversions::BytesConvertible;
use crate::errors::{FixtureError, Result};
use crate::types::{Hash, HASH_LENGTH, VERSIONED_HASH_VERSION_KZG};
use alloc::vec::Vec;
use tracing::debug;

/// Tag each blob hash with `version`
///
/// Integers and strings are normalized to 32 bytes first. Byte inputs are
/// taken as-is and must already be exactly 32 bytes long.
///
/// Output order matches input order. Every input is validated before the
/// result is returned, so a failure yields no partial output.
///
/// # Errors
/// - input errors when a value cannot be normalized to 32 bytes
/// - [`FixtureError::UnsupportedKind`] when a value is not an integer, string or bytes
pub fn add_kzg_version<I, T>(hashes: I, version: u8) -> Result<Vec<Hash>>
where
    I: IntoIterator<Item = T>,
    T: TryInto<BytesConvertible>,
    FixtureError: From<T::Error>,
{
    let versioned = hashes
        .into_iter()
        .map(|hash| {
            let hash: BytesConvertible = hash.try_into()?;
            versioned_hash(&hash, version)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = versioned.len(), version, "versioned blob hashes");
    Ok(versioned)
}

/// Tag each blob hash with the KZG version byte
pub fn kzg_versioned_hashes<I, T>(hashes: I) -> Result<Vec<Hash>>
where
    I: IntoIterator<Item = T>,
    T: TryInto<BytesConvertible>,
    FixtureError: From<T::Error>,
{
    add_kzg_version(hashes, VERSIONED_HASH_VERSION_KZG)
}

fn versioned_hash(hash: &BytesConvertible, version: u8) -> Result<Hash> {
    let mut bytes = if hash.is_bytes() {
        let raw = hash.to_bytes()?;
        <[u8; HASH_LENGTH]>::try_from(raw.as_slice()).map_err(|_| FixtureError::InvalidLength {
            expected: HASH_LENGTH,
            actual: raw.len(),
        })?
    } else {
        hash.to_fixed_size_bytes::<HASH_LENGTH>()?
    };
    bytes[0] = version;
    Ok(Hash::from(bytes))
}
