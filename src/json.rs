//! JSON helpers for column descriptors and schema descriptions.
//!
//! Provides convenient wrappers around serde_json so callers can hand the result straight to the table widget's
//! `columns` option.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use tablecols_core::{ColumnConfig, ColumnDescriptor, ColumnSchema, FieldMetadata, build_columns_with};

/// Trait for values that can be serialized to JSON.
///
/// This is automatically implemented for any type that implements `serde::Serialize`.
pub trait ToJson: Serialize {
    /// Serializes this value to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if serialization fails.
    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }

    /// Serializes this value to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if serialization fails.
    fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Encode)
    }
}

/// Trait for values that can be deserialized from JSON.
///
/// This is automatically implemented for any type that implements `serde::Deserialize`.
pub trait FromJson: for<'de> Deserialize<'de> {
    /// Deserializes a value from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the input is not valid for `Self`.
    fn from_json(json: &str) -> Result<Self>
    where
        Self: Sized,
    {
        serde_json::from_str(json).map_err(Error::Decode)
    }
}

// Blanket implementations for all types that implement the required serde traits
impl<T: Serialize + ?Sized> ToJson for T {}
impl<T: for<'de> Deserialize<'de>> FromJson for T {}

/// Serialize the column descriptors of `T` as a compact JSON array.
pub fn columns_json<T: ColumnSchema>() -> Result<String> {
    T::columns().to_json()
}

/// Serialize the column descriptors of `T` as a pretty-printed JSON array.
pub fn columns_json_pretty<T: ColumnSchema>() -> Result<String> {
    T::columns().to_json_pretty()
}

/// Parse a JSON array of field descriptions.
pub fn parse_schema(json: &str) -> Result<Vec<FieldMetadata>> {
    Vec::<FieldMetadata>::from_json(json)
}

/// Parse a JSON schema description and build its column descriptors.
pub fn columns_from_schema_json(json: &str, config: &ColumnConfig) -> Result<Vec<ColumnDescriptor>> {
    let fields = parse_schema(json)?;
    Ok(build_columns_with(&fields, config))
}
