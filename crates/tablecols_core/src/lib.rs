//! Column descriptor model and builder for client-side table widgets.
//!
//! This crate maps a type's field list (names, declared serialization names, ignore markers and optional column
//! annotations) into an ordered list of [`ColumnDescriptor`]s, ready to be serialized into a DataTables-style
//! `columns` configuration array.
//!
//! ## Notes
//!
//! - The crate is pure: **no IO**, no global state. Every call recomputes descriptors from the static schema.
//! - The schema itself is produced elsewhere: by `#[derive(Columns)]` (see the `tablecols` facade), by hand, or by
//!   deserializing a JSON description.

#![deny(clippy::unwrap_used)]

pub mod builder;
pub mod config;
pub mod model;
pub mod naming;
pub mod schema;

pub use builder::{build_columns, build_columns_with};
pub use config::{ColumnConfig, DataPrecedence};
pub use model::{CellType, ColumnAnnotation, ColumnDescriptor, ColumnOptions, FieldMetadata, SortDirection};
pub use naming::{RenameRule, lower_first};
pub use schema::{ColumnSchema, columns_for};
