//! Agora Types - Core type definitions for the AGORA governance engine.
//!
//! This crate provides the fundamental types used throughout Agora:
//! - Addresses (20-byte, Bech32m encoded)
//! - Amounts (base-unit token quantities with checked arithmetic)

pub mod address;
pub mod amount;
pub mod error;

#[cfg(feature = "serde")]
mod serialization;

pub use address::Address;
pub use amount::Amount;
pub use error::TypesError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Address, Amount, TypesError};
}
