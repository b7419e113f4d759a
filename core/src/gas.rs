//! Gas cost formulas
//!
//! Closed-form costs from the yellow paper (memory expansion, COPY-family
//! opcodes) and EIP-2028 (transaction calldata). All arithmetic is done on
//! [`U256`] so that no `u64` byte count can overflow a formula.

use crate::conversions::BytesConvertible;
use crate::errors::{FixtureError, Result};
use crate::types::{Gas, U256, WORD_SIZE};
use core::num::NonZeroU64;
use serde::{Deserialize, Serialize};

/// Smallest integer greater than or equal to `a / b`
///
/// Integer-only, so it stays exact for any magnitude.
///
/// # Errors
/// [`FixtureError::DivisionByZero`] if `b` is zero.
pub fn ceiling_division(a: U256, b: U256) -> Result<U256> {
    if b.is_zero() {
        return Err(FixtureError::DivisionByZero);
    }
    Ok(div_ceil_nonzero(a, b))
}

fn div_ceil_nonzero(a: U256, b: U256) -> U256 {
    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        quotient
    } else {
        quotient + U256::from(1u64)
    }
}

/// Number of 32-byte words needed to hold `bytes`
pub fn memory_word_count(bytes: u64) -> U256 {
    div_ceil_nonzero(U256::from(bytes), U256::from(WORD_SIZE))
}

const MEMORY_QUAD_COEFF_DIV: NonZeroU64 = NonZeroU64::new(512).unwrap();

/// Gas constants used by the cost formulas
///
/// Defaults to the Istanbul schedule. Deserializable so fixtures can pin a
/// schedule explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasSchedule {
    /// Linear memory cost per word
    pub memory: u64,
    /// Divisor of the quadratic memory term
    pub quad_coeff_div: NonZeroU64,
    /// Base cost of a COPY-family opcode
    pub very_low: u64,
    /// Cost per copied word
    pub copy: u64,
    /// Calldata cost of a zero byte
    pub tx_data_zero: u64,
    /// Calldata cost of a non-zero byte
    pub tx_data_non_zero: u64,
}

impl GasSchedule {
    /// Schedule in force since Istanbul (EIP-2028 calldata pricing)
    pub const ISTANBUL: Self = Self {
        memory: 3,
        quad_coeff_div: MEMORY_QUAD_COEFF_DIV,
        very_low: 3,
        copy: 3,
        tx_data_zero: 4,
        tx_data_non_zero: 16,
    };

    /// Pre-Istanbul schedule, non-zero calldata bytes cost 68
    pub const FRONTIER: Self = Self {
        tx_data_non_zero: 68,
        ..Self::ISTANBUL
    };

    /// Total memory cost of `words` words: `memory * w + w^2 / quad_coeff_div`
    pub fn memory_cost(&self, words: U256) -> Gas {
        let linear = U256::from(self.memory) * words;
        let quadratic = words * words / U256::from(self.quad_coeff_div.get());
        linear + quadratic
    }

    /// Cost of growing memory from `previous_bytes` to `new_bytes`
    ///
    /// Memory never shrinks, so a non-growing size costs nothing.
    pub fn memory_expansion_cost(&self, new_bytes: u64, previous_bytes: u64) -> Gas {
        if new_bytes <= previous_bytes {
            return Gas::ZERO;
        }
        let new_words = memory_word_count(new_bytes);
        let previous_words = memory_word_count(previous_bytes);

        self.memory_cost(new_words) - self.memory_cost(previous_words)
    }

    /// Cost of a COPY-family opcode writing `length` bytes into empty memory
    pub fn copy_opcode_cost(&self, length: u64) -> Gas {
        U256::from(self.very_low)
            + U256::from(self.copy) * memory_word_count(length)
            + self.memory_expansion_cost(length, 0)
    }

    /// Calldata cost of `data`
    pub fn transaction_data_cost(&self, data: &[u8]) -> Gas {
        let zeros = data.iter().filter(|b| **b == 0).count() as u64;
        let non_zeros = data.len() as u64 - zeros;

        U256::from(zeros) * U256::from(self.tx_data_zero)
            + U256::from(non_zeros) * U256::from(self.tx_data_non_zero)
    }
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self::ISTANBUL
    }
}

/// Memory expansion cost from `previous_bytes` to `new_bytes`
pub fn cost_memory_bytes(new_bytes: u64, previous_bytes: u64) -> Gas {
    GasSchedule::ISTANBUL.memory_expansion_cost(new_bytes, previous_bytes)
}

/// Cost of a COPY-family opcode, assuming expansion from empty memory
pub fn copy_opcode_cost(length: u64) -> Gas {
    GasSchedule::ISTANBUL.copy_opcode_cost(length)
}

/// Calldata cost as priced by EIP-2028
///
/// Strings are read as hex, like every other flexible input.
///
/// # Errors
/// Fails if `data` is a malformed hex string.
pub fn eip_2028_transaction_data_cost(data: impl Into<BytesConvertible>) -> Result<Gas> {
    let data = data.into().to_bytes()?;
    Ok(GasSchedule::ISTANBUL.transaction_data_cost(&data))
}
