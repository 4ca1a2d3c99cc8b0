//! Column descriptor builder.
//!
//! Turns an ordered field list into one [`ColumnDescriptor`] per serialized field. The mapping is total: every
//! well-formed field list produces a result, and a field with no overrides falls back to its own name.

use crate::config::{ColumnConfig, DataPrecedence};
use crate::model::{ColumnDescriptor, ColumnOptions, FieldMetadata};
use crate::naming::lower_first;

/// Build column descriptors with the default [`ColumnConfig`].
///
/// ## Parameters
/// - `fields`: the source type's fields, in declaration order.
///
/// ## Returns
/// - (`Vec<ColumnDescriptor>`): one descriptor per field not marked `ignore`, in input order.
///
/// ## Notes
/// - Explicit annotation values are carried as given, including values equal to the widget default
///   (`visible: true`, `searchable: false`, ...). Legacy sentinel behavior, where only values that differ from those
///   defaults reach the output, needs [`ColumnConfig::elide_widget_defaults`] via [`build_columns_with`].
pub fn build_columns(fields: &[FieldMetadata]) -> Vec<ColumnDescriptor> {
    build_columns_with(fields, &ColumnConfig::default())
}

/// Build column descriptors with an explicit configuration.
///
/// ## Notes
/// - Annotation options are copied verbatim; unset options stay unset and are omitted when serialized.
/// - `data` is never empty unless the field name itself is empty.
#[tracing::instrument(skip_all, fields(field_count = fields.len()))]
pub fn build_columns_with(fields: &[FieldMetadata], config: &ColumnConfig) -> Vec<ColumnDescriptor> {
    let mut columns = Vec::with_capacity(fields.len());

    for field in fields {
        if field.ignore {
            tracing::debug!(field = %field.name, "skipping field ignored for serialization");
            continue;
        }
        columns.push(describe_field(field, config));
    }

    columns
}

fn describe_field(field: &FieldMetadata, config: &ColumnConfig) -> ColumnDescriptor {
    let mut options = field
        .annotation
        .as_ref()
        .map(|annotation| annotation.options.clone())
        .unwrap_or_default();

    if config.elide_widget_defaults {
        elide_widget_defaults(&mut options);
    }

    let data = resolve_data(field, config.data_precedence);
    tracing::trace!(field = %field.name, data = %data, "resolved column");

    ColumnDescriptor { data, options }
}

fn resolve_data(field: &FieldMetadata, precedence: DataPrecedence) -> String {
    let annotated = field
        .annotation
        .as_ref()
        .and_then(|annotation| non_empty(annotation.data.as_deref()));
    let serialized = non_empty(field.serialized_name.as_deref());

    let explicit = match precedence {
        DataPrecedence::AnnotationFirst => annotated.or(serialized),
        DataPrecedence::SerializedNameFirst => serialized.or(annotated),
    };

    match explicit {
        Some(data) => data.to_string(),
        None => lower_first(&field.name),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn elide_widget_defaults(options: &mut ColumnOptions) {
    if options.visible == Some(true) {
        options.visible = None;
    }
    if options.searchable == Some(false) {
        options.searchable = None;
    }
    if options.orderable == Some(false) {
        options.orderable = None;
    }
    if options.responsive_priority.is_some_and(|p| p < 0) {
        options.responsive_priority = None;
    }
    if options.order.is_some_and(|o| o < 0) {
        options.order = None;
    }
}
