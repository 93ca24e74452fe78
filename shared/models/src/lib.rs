//! # Cadastro Domain Models
//!
//! Core domain models for the customer registry service. All models
//! implement serialization/deserialization with serde and input validation
//! with the validator crate.
//!
//! ## Key Models
//!
//! - **Cliente**: the persisted customer row, keyed by a generated id with
//!   unique `cpf` and `email`
//! - **ClienteCreate**: create payload with required, non-empty identity
//!   fields
//! - **ClienteUpdate**: update payload where every field is optional and
//!   only supplied fields are applied

pub mod cliente;

#[cfg(test)]
pub mod property_tests;

pub use cliente::*;
