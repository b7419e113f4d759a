//! # Ethereum Fixture Core
//!
//! Pure helpers for building Ethereum execution test fixtures.
//!
//! This crate provides the formulas a fixture author needs to predict what an
//! execution engine will do. It is designed to be:
//! - **Deterministic**: Same input always produces same output
//! - **Pure**: No state, no I/O, every function is reentrant
//! - **Bit-exact**: Addresses and costs match the protocol definitions
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ BytesConvertible │ ── int / hex string / bytes literals
//! └────────┬─────────┘
//!          │  conversions: fixed-width normalization
//!          ▼
//! ┌──────────────────┐
//! │ Address / Hash   │
//! └────────┬─────────┘
//!          │
//!    ┌─────┴──────────────┐
//!    ▼                    ▼
//! ┌──────────┐     ┌─────────────┐
//! │ address  │     │    blob     │ ── version byte || hash[1..]
//! │ CREATE/2 │     └─────────────┘
//! └────┬─────┘
//!      │ hashing: Keccak256 + RLP
//!      ▼
//! ┌──────────┐
//! │ "0x..."  │
//! └──────────┘
//!
//! gas: ceiling_division, memory expansion, COPY opcodes, calldata
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eth_fixture_core::prelude::*;
//!
//! let deployed = compute_create_address("0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0", 0u64)?;
//! let cost = copy_opcode_cost(64) + eip_2028_transaction_data_cost("0x00ff")?;
//! let blob_hashes = add_kzg_version([1u64, 2u64], VERSIONED_HASH_VERSION_KZG)?;
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (Address, Hash, U256) and constants
//! - [`errors`] - Error types and Result alias
//! - [`hashing`] - Keccak256 and RLP primitives
//! - [`conversions`] - Flexible input normalization
//! - [`address`] - CREATE and CREATE2 address derivation
//! - [`gas`] - Gas cost formulas
//! - [`blob`] - Blob versioned hashes

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod blob;
pub mod conversions;
pub mod errors;
pub mod gas;
pub mod hashing;
pub mod types;

// Re-exports for convenience
pub use address::{
    compute_create2_address, compute_create_address, create2_address, create_address,
    AddressDeriver,
};
pub use blob::{add_kzg_version, kzg_versioned_hashes};
pub use conversions::{
    address_from, hash_from, to_address, to_bytes, to_fixed_size_bytes, to_hash, to_hash_bytes,
    BytesConvertible,
};
pub use errors::{FixtureError, Result};
pub use gas::{
    ceiling_division, copy_opcode_cost, cost_memory_bytes, eip_2028_transaction_data_cost,
    memory_word_count, GasSchedule,
};
pub use hashing::{keccak256, HashPrimitive, Keccak256Hasher, RlpEncoder, SequenceEncoder};
pub use types::{
    Address, Bytes, Gas, Hash, IntoNonce, Nonce, U256, VERSIONED_HASH_VERSION_KZG, WORD_SIZE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        add_kzg_version, address_from, ceiling_division, compute_create2_address,
        compute_create_address, copy_opcode_cost, cost_memory_bytes,
        eip_2028_transaction_data_cost, hash_from, to_address, to_hash, to_hash_bytes, Address,
        BytesConvertible, FixtureError, Gas, GasSchedule, Hash, IntoNonce, Result, U256,
        VERSIONED_HASH_VERSION_KZG,
    };
}
