//! # Tessera Service
//!
//! Transaction runner implementations: the mock runner used for
//! development and testing, and the caching wrapper that composes field
//! hydration and response caching around a delegate runner.

mod cached_runner;
mod dto;
mod mock_runner;

pub use cached_runner::CachedTransactionRunner;
pub use dto::TransactionRequest;
pub use mock_runner::MockTransactionRunner;
