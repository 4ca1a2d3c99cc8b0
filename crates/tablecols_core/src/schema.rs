//! Schema introspection for column-mapped types.
//!
//! The `ColumnSchema` trait provides the static field description of a type, and is typically derived using
//! `#[derive(Columns)]` from the `tablecols` facade.

use crate::builder::{build_columns, build_columns_with};
use crate::config::ColumnConfig;
use crate::model::{ColumnDescriptor, FieldMetadata};

/// Provides the static column schema of a type.
///
/// # Examples
///
/// ```ignore
/// #[derive(Serialize, Columns)]
/// struct Person {
///     pub name: String,
///     #[serde(rename = "years")]
///     pub age: i64,
/// }
///
/// let columns = Person::columns();
/// assert_eq!(columns[0].data, "name");
/// assert_eq!(columns[1].data, "years");
/// ```
pub trait ColumnSchema {
    /// Returns the described fields in declaration order.
    fn column_fields() -> Vec<FieldMetadata>;

    /// Builds the column descriptors with the default configuration.
    fn columns() -> Vec<ColumnDescriptor> {
        build_columns(&Self::column_fields())
    }

    /// Builds the column descriptors with an explicit configuration.
    fn columns_with(config: &ColumnConfig) -> Vec<ColumnDescriptor> {
        build_columns_with(&Self::column_fields(), config)
    }
}

/// Build the column descriptors of `T`.
pub fn columns_for<T: ColumnSchema>() -> Vec<ColumnDescriptor> {
    T::columns()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnAnnotation;

    struct Invoice;

    impl ColumnSchema for Invoice {
        fn column_fields() -> Vec<FieldMetadata> {
            vec![
                FieldMetadata::new("Number").with_annotation(ColumnAnnotation::new().with_data("no")),
                FieldMetadata::new("InternalNote").ignored(),
                FieldMetadata::new("Total"),
            ]
        }
    }

    #[test]
    fn columns_for_uses_schema() {
        let columns = columns_for::<Invoice>();
        let data: Vec<&str> = columns.iter().map(|c| c.data.as_str()).collect();
        assert_eq!(data, vec!["no", "total"]);
    }

    #[test]
    fn columns_with_applies_config() {
        let config = ColumnConfig::new().with_elide_widget_defaults(true);
        assert_eq!(Invoice::columns_with(&config), Invoice::columns());
    }
}
