#![forbid(unsafe_code)]
//! Table column descriptors from Rust types.
//!
//! `tablecols` maps the public fields of a data-model type into the column configuration of a client-side table
//! widget (DataTables-style `columns` arrays). Field-level `#[column(...)]` annotations override the defaults, and
//! serde's `rename`/`rename_all`/`skip` attributes are honored so columns line up with the serialized rows.
//!
//! ```ignore
//! use serde::Serialize;
//! use tablecols::{Columns, ColumnSchema};
//!
//! #[derive(Serialize, Columns)]
//! pub struct Customer {
//!     #[column(title = "Name", searchable)]
//!     pub name: String,
//!     #[serde(rename = "mail")]
//!     pub email: String,
//!     #[serde(skip)]
//!     pub password_hash: String,
//! }
//!
//! let json = tablecols::columns_json::<Customer>()?;
//! // [{"data":"name","title":"Name","searchable":true},{"data":"mail"}]
//! ```
//!
//! ## Panic Policy
//!
//! Production code returns `Result` and propagates with `?`; `.unwrap()` is denied outside tests. Building columns
//! is total and never fails; only the JSON and IO boundaries return [`Error`].

#![deny(clippy::unwrap_used)]

// Lets `#[derive(Columns)]` expand to `::tablecols::...` paths inside this crate's own tests.
extern crate self as tablecols;

pub mod cli;
pub mod error;
pub mod json;

pub use error::{Error, Result};
pub use json::{FromJson, ToJson, columns_from_schema_json, columns_json, columns_json_pretty, parse_schema};

pub use tablecols_core::{
    CellType, ColumnAnnotation, ColumnConfig, ColumnDescriptor, ColumnOptions, ColumnSchema, DataPrecedence,
    FieldMetadata, RenameRule, SortDirection, build_columns, build_columns_with, columns_for, lower_first,
};
pub use tablecols_derive::Columns;
