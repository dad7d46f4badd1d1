//! Result type alias used across all layers.

use crate::TesseraError;

/// Result type for Tessera operations.
pub type TesseraResult<T> = Result<T, TesseraError>;
