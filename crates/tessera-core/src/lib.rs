//! # Tessera Core
//!
//! Core types, traits, and error definitions for the Tessera transaction
//! gateway. This crate provides the foundational abstractions used across
//! all layers: the error taxonomy, the field-map domain types exchanged
//! with the transaction processor, and the `TransactionRunner` seam.

pub mod error;
pub mod fields;
pub mod result;
pub mod runner;
pub mod screen;
pub mod validation;

pub use error::*;
pub use fields::*;
pub use result::*;
pub use runner::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
