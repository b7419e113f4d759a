//! Fixed-width conversion layer
//!
//! Test fixtures write addresses, hashes and salts as integers, hex strings or
//! raw bytes interchangeably. [`BytesConvertible`] captures those literal kinds
//! at the boundary; everything past this module works on [`Address`] and
//! [`Hash`] only.

use crate::errors::{FixtureError, Result};
use crate::types::{Address, Bytes, Hash, ADDRESS_LENGTH, HASH_LENGTH, U256};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A value that can be turned into bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytesConvertible {
    /// Non-negative integer, encoded big-endian
    Integer(U256),
    /// Hex string, optionally `0x`-prefixed
    HexString(String),
    /// Raw byte string
    RawBytes(Vec<u8>),
    /// Typed byte container (addresses, hashes, `Bytes`)
    BytesLike(Bytes),
}

impl BytesConvertible {
    /// Convert to a byte string of natural length
    ///
    /// Integers use their minimal big-endian form (zero is empty), hex strings
    /// with an odd digit count get one leading `0`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            BytesConvertible::Integer(value) => Ok(minimal_be_bytes(*value)),
            BytesConvertible::HexString(s) => decode_hex(s),
            BytesConvertible::RawBytes(bytes) => Ok(bytes.clone()),
            BytesConvertible::BytesLike(bytes) => Ok(bytes.to_vec()),
        }
    }

    /// Convert to exactly `N` bytes, zero-padding on the left
    pub fn to_fixed_size_bytes<const N: usize>(&self) -> Result<[u8; N]> {
        let bytes = self.to_bytes()?;
        if bytes.len() > N {
            return Err(match self {
                BytesConvertible::Integer(_) => FixtureError::IntegerTooLarge { size: N },
                _ => FixtureError::InputTooLong {
                    len: bytes.len(),
                    size: N,
                },
            });
        }

        let mut out = [0u8; N];
        out[N - bytes.len()..].copy_from_slice(&bytes);
        Ok(out)
    }

    /// Whether this value is already a byte container rather than a literal
    pub fn is_bytes(&self) -> bool {
        matches!(
            self,
            BytesConvertible::RawBytes(_) | BytesConvertible::BytesLike(_)
        )
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BytesConvertible {
                fn from(value: $t) -> Self {
                    BytesConvertible::Integer(U256::from(value))
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128, usize);

impl From<U256> for BytesConvertible {
    fn from(value: U256) -> Self {
        BytesConvertible::Integer(value)
    }
}

impl From<&str> for BytesConvertible {
    fn from(value: &str) -> Self {
        BytesConvertible::HexString(value.to_string())
    }
}

impl From<String> for BytesConvertible {
    fn from(value: String) -> Self {
        BytesConvertible::HexString(value)
    }
}

impl From<Vec<u8>> for BytesConvertible {
    fn from(value: Vec<u8>) -> Self {
        BytesConvertible::RawBytes(value)
    }
}

impl From<&[u8]> for BytesConvertible {
    fn from(value: &[u8]) -> Self {
        BytesConvertible::RawBytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for BytesConvertible {
    fn from(value: [u8; N]) -> Self {
        BytesConvertible::RawBytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for BytesConvertible {
    fn from(value: &[u8; N]) -> Self {
        BytesConvertible::RawBytes(value.to_vec())
    }
}

impl From<Bytes> for BytesConvertible {
    fn from(value: Bytes) -> Self {
        BytesConvertible::BytesLike(value)
    }
}

impl From<Address> for BytesConvertible {
    fn from(value: Address) -> Self {
        BytesConvertible::BytesLike(Bytes::copy_from_slice(value.as_slice()))
    }
}

impl From<Hash> for BytesConvertible {
    fn from(value: Hash) -> Self {
        BytesConvertible::BytesLike(Bytes::copy_from_slice(value.as_slice()))
    }
}

impl TryFrom<&Value> for BytesConvertible {
    type Error = FixtureError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    Ok(BytesConvertible::Integer(U256::from(v)))
                } else if n.is_i64() {
                    Err(FixtureError::UnsupportedKind("negative number"))
                } else if n.as_f64().is_some_and(|f| f >= U64_RANGE_END) {
                    // JSON numbers past u64 lose precision, hex strings do not
                    Err(FixtureError::UnsupportedKind(
                        "integer out of u64 range, write it as a hex string",
                    ))
                } else {
                    Err(FixtureError::UnsupportedKind("fractional number"))
                }
            }
            Value::String(s) => Ok(BytesConvertible::HexString(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or(FixtureError::UnsupportedKind("array element that is not a byte"))
                })
                .collect::<Result<Vec<u8>>>()
                .map(BytesConvertible::RawBytes),
            Value::Null => Err(FixtureError::UnsupportedKind("null")),
            Value::Bool(_) => Err(FixtureError::UnsupportedKind("boolean")),
            Value::Object(_) => Err(FixtureError::UnsupportedKind("object")),
        }
    }
}

impl TryFrom<Value> for BytesConvertible {
    type Error = FixtureError;

    fn try_from(value: Value) -> Result<Self> {
        BytesConvertible::try_from(&value)
    }
}

impl<'de> Deserialize<'de> for BytesConvertible {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        BytesConvertible::try_from(&value).map_err(serde::de::Error::custom)
    }
}

/// 2^64, first float a JSON integer can no longer be read as `u64`
const U64_RANGE_END: f64 = 18_446_744_073_709_551_616.0;

/// Minimal big-endian encoding of an integer, empty for zero
pub fn minimal_be_bytes(value: U256) -> Vec<u8> {
    let bytes = value.to_be_bytes::<32>();
    let start = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() % 2 == 1 {
        return Ok(hex::decode(format!("0{digits}"))?);
    }
    Ok(hex::decode(digits)?)
}

/// Convert any supported input to a byte string of natural length
pub fn to_bytes(input: impl Into<BytesConvertible>) -> Result<Vec<u8>> {
    input.into().to_bytes()
}

/// Convert any supported input to exactly `N` bytes
pub fn to_fixed_size_bytes<const N: usize>(input: impl Into<BytesConvertible>) -> Result<[u8; N]> {
    input.into().to_fixed_size_bytes::<N>()
}

/// Normalize input to a 20-byte address
pub fn address_from(input: impl Into<BytesConvertible>) -> Result<Address> {
    to_fixed_size_bytes::<ADDRESS_LENGTH>(input).map(Address::from)
}

/// Normalize input to a 32-byte hash
pub fn hash_from(input: impl Into<BytesConvertible>) -> Result<Hash> {
    to_fixed_size_bytes::<HASH_LENGTH>(input).map(Hash::from)
}

/// Normalize input to a `0x`-prefixed lowercase address string
pub fn to_address(input: impl Into<BytesConvertible>) -> Result<String> {
    address_from(input).map(|address| prefixed_hex(address.as_slice()))
}

/// Normalize input to a 32-byte hash
pub fn to_hash_bytes(input: impl Into<BytesConvertible>) -> Result<Hash> {
    hash_from(input)
}

/// Normalize input to a `0x`-prefixed lowercase hash string
pub fn to_hash(input: impl Into<BytesConvertible>) -> Result<String> {
    hash_from(input).map(|hash| prefixed_hex(hash.as_slice()))
}

/// `0x`-prefixed lowercase hex
pub fn prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_be_bytes() {
        assert!(minimal_be_bytes(U256::ZERO).is_empty());
        assert_eq!(minimal_be_bytes(U256::from(1u64)), vec![0x01]);
        assert_eq!(minimal_be_bytes(U256::from(0xffu64)), vec![0xff]);
        assert_eq!(minimal_be_bytes(U256::from(0x0100u64)), vec![0x01, 0x00]);
        assert_eq!(minimal_be_bytes(U256::MAX), vec![0xff; 32]);
    }

    #[test]
    fn test_integer_left_padded() {
        let address = address_from(1u64).unwrap();
        let mut expected = [0u8; 20];
        expected[19] = 1;
        assert_eq!(address, Address::from(expected));

        assert_eq!(
            to_address(0x1234u64).unwrap(),
            "0x0000000000000000000000000000000000001234"
        );
    }

    #[test]
    fn test_integer_too_large() {
        let too_big = U256::from(1u64) << 160usize;
        assert_eq!(
            address_from(too_big),
            Err(FixtureError::IntegerTooLarge { size: 20 })
        );

        // still fits in a hash
        assert!(hash_from(too_big).is_ok());
    }

    #[test]
    fn test_hex_string_forms() {
        let with_prefix = hash_from("0x01").unwrap();
        let without_prefix = hash_from("01").unwrap();
        let odd_digits = hash_from("0x1").unwrap();

        assert_eq!(with_prefix, without_prefix);
        assert_eq!(with_prefix, odd_digits);
        assert_eq!(with_prefix, hash_from(1u64).unwrap());
    }

    #[test]
    fn test_empty_string_is_zero() {
        assert_eq!(address_from("").unwrap(), Address::ZERO);
        assert_eq!(address_from("0x").unwrap(), Address::ZERO);
    }

    #[test]
    fn test_invalid_hex() {
        let err = address_from("0xzz").unwrap_err();
        assert!(matches!(err, FixtureError::InvalidHex(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_bytes_too_long() {
        let err = address_from(vec![0u8; 21]).unwrap_err();
        assert_eq!(err, FixtureError::InputTooLong { len: 21, size: 20 });

        let long_hex = format!("0x{}", "ab".repeat(33));
        assert_eq!(
            hash_from(long_hex.as_str()),
            Err(FixtureError::InputTooLong { len: 33, size: 32 })
        );
    }

    #[test]
    fn test_short_bytes_left_padded() {
        let hash = hash_from(&[0xaau8, 0xbb]).unwrap();
        assert_eq!(hash[30], 0xaa);
        assert_eq!(hash[31], 0xbb);
        assert!(hash[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_typed_inputs_round_trip() {
        let address = Address::repeat_byte(0x11);
        assert_eq!(address_from(address).unwrap(), address);

        let hash = Hash::repeat_byte(0x22);
        assert_eq!(hash_from(hash).unwrap(), hash);
        assert_eq!(hash_from(Bytes::copy_from_slice(hash.as_slice())).unwrap(), hash);
    }

    #[test]
    fn test_to_hash_string() {
        assert_eq!(
            to_hash(1u64).unwrap(),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(to_hash_bytes("0xff").unwrap()[31], 0xff);
    }

    #[test]
    fn test_to_address_lowercase() {
        assert_eq!(
            to_address("0xDEADBEEF00000000000000000000000000000000").unwrap(),
            "0xdeadbeef00000000000000000000000000000000"
        );
    }

    #[test]
    fn test_json_values() {
        assert_eq!(
            BytesConvertible::try_from(json!(7)).unwrap(),
            BytesConvertible::Integer(U256::from(7u64))
        );
        assert_eq!(
            BytesConvertible::try_from(json!("0x07")).unwrap(),
            BytesConvertible::HexString("0x07".to_string())
        );
        assert_eq!(
            BytesConvertible::try_from(json!([1, 2, 255])).unwrap(),
            BytesConvertible::RawBytes(vec![1, 2, 255])
        );
    }

    #[test]
    fn test_json_unsupported_kinds() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!({"a": 1}), "object"),
            (json!(-1), "negative number"),
            (json!(1.5), "fractional number"),
            (json!([256]), "array element that is not a byte"),
        ] {
            assert_eq!(
                BytesConvertible::try_from(&value),
                Err(FixtureError::UnsupportedKind(kind))
            );
        }
    }

    #[test]
    fn test_json_integer_out_of_range() {
        let value: Value = serde_json::from_str("18446744073709551616").unwrap();
        assert_eq!(
            BytesConvertible::try_from(&value),
            Err(FixtureError::UnsupportedKind(
                "integer out of u64 range, write it as a hex string"
            ))
        );

        // the same value as a hex string is accepted
        let value = json!("0x010000000000000000");
        let hash = hash_from(BytesConvertible::try_from(&value).unwrap()).unwrap();
        assert_eq!(hash[23], 0x01);
    }

    #[test]
    fn test_deserialize_from_fixture() {
        let inputs: Vec<BytesConvertible> =
            serde_json::from_str(r#"[1, "0x02", [3]]"#).unwrap();
        let hashes: Vec<Hash> = inputs
            .into_iter()
            .map(|input| hash_from(input).unwrap())
            .collect();

        assert_eq!(hashes[0][31], 1);
        assert_eq!(hashes[1][31], 2);
        assert_eq!(hashes[2][31], 3);

        assert!(serde_json::from_str::<BytesConvertible>("null").is_err());
    }
}
