//! Field-map domain types exchanged with the transaction processor.
//!
//! Requests carry single-valued fields; responses carry multi-valued
//! fields (one-entry sequences are the typical case, but the host
//! protocol allows more than one value per field name).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound request fields: field name to a single string value.
pub type FieldMap = HashMap<String, String>;

/// Response returned by a transaction runner.
///
/// A thin wrapper over the multi-valued field map so callers go through
/// the accessors instead of reaching into the map shape directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TransactionResponse {
    fields: HashMap<String, Vec<String>>,
}

impl TransactionResponse {
    /// Creates an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a response from an existing field map.
    #[must_use]
    pub fn from_fields(fields: HashMap<String, Vec<String>>) -> Self {
        Self { fields }
    }

    /// Adds (or replaces) a field.
    pub fn add_field(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.fields.insert(name.into(), values);
    }

    /// Returns the values for a field, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Vec<String>> {
        self.fields.get(name)
    }

    /// Returns the first value for a field, if present.
    #[must_use]
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.first()).map(String::as_str)
    }

    /// Returns a reference to all fields.
    #[must_use]
    pub fn fields(&self) -> &HashMap<String, Vec<String>> {
        &self.fields
    }

    /// Consumes the response and returns the underlying field map.
    #[must_use]
    pub fn into_fields(self) -> HashMap<String, Vec<String>> {
        self.fields
    }

    /// Returns true if the response carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
