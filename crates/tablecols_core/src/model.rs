//! Schema input and descriptor output records.
//!
//! [`FieldMetadata`] is the per-field input, [`ColumnAnnotation`] the optional per-field override, and
//! [`ColumnDescriptor`] the resolved output. Annotation and descriptor share [`ColumnOptions`], so every override
//! maps onto exactly one widget key.
//!
//! All option fields are `Option`s: `None` means "not set" and is omitted when serialized, which leaves the
//! widget's own default in effect.

use serde::{Deserialize, Deserializer, Serialize};

/// Cell element used for a column's body cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Td,
    Th,
}

impl CellType {
    /// Parse the widget spelling (`"td"` / `"th"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "td" => Some(CellType::Td),
            "th" => Some(CellType::Th),
            _ => None,
        }
    }
}

/// Sort direction entry of a column's `orderSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse the widget spelling (`"asc"` / `"desc"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Column settings shared by annotations and resolved descriptors.
///
/// Serialized key names match the widget's configuration keys exactly (`className`, `cellType`, `type`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_type: Option<CellType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Column indices to order by when this column is ordered. A bare index is accepted on input.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "one_or_many")]
    pub order_data: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_sequence: Option<Vec<SortDirection>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<usize>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(usize),
        Many(Vec<usize>),
    }

    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
        OneOrMany::One(index) => vec![index],
        OneOrMany::Many(indices) => indices,
    }))
}

/// Optional per-field override supplied by the schema author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnAnnotation {
    /// Explicit `data` key. Empty strings are treated as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(flatten)]
    pub options: ColumnOptions,
}

impl ColumnAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit `data` key.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Replace the column options.
    pub fn with_options(mut self, options: ColumnOptions) -> Self {
        self.options = options;
        self
    }
}

/// Static description of one field of the source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    /// Field name as declared on the source type.
    pub name: String,
    /// Declared serialization name override (e.g. `#[serde(rename = "...")]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized_name: Option<String>,
    /// Field is skipped during serialization and gets no column.
    #[serde(default)]
    pub ignore: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<ColumnAnnotation>,
}

impl FieldMetadata {
    /// Describe a plain field with no overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serialized_name: None,
            ignore: false,
            annotation: None,
        }
    }

    pub fn with_serialized_name(mut self, serialized_name: impl Into<String>) -> Self {
        self.serialized_name = Some(serialized_name.into());
        self
    }

    pub fn with_annotation(mut self, annotation: ColumnAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Mark the field as ignored for serialization.
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }
}

/// Resolved column record handed to the table widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Property of the row object this column reads. Always populated.
    pub data: String,
    #[serde(flatten)]
    pub options: ColumnOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_options_are_omitted() {
        let column = ColumnDescriptor {
            data: "name".to_string(),
            options: ColumnOptions::default(),
        };

        assert_eq!(serde_json::to_value(&column).unwrap(), json!({ "data": "name" }));
    }

    #[test]
    fn option_keys_use_widget_spelling() {
        let column = ColumnDescriptor {
            data: "price".to_string(),
            options: ColumnOptions {
                class_name: Some("dt-right".to_string()),
                cell_type: Some(CellType::Th),
                column_type: Some("num".to_string()),
                order_sequence: Some(vec![SortDirection::Desc, SortDirection::Asc]),
                aria_title: Some("Unit price".to_string()),
                responsive_priority: Some(2),
                ..ColumnOptions::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({
                "data": "price",
                "className": "dt-right",
                "cellType": "th",
                "type": "num",
                "orderSequence": ["desc", "asc"],
                "ariaTitle": "Unit price",
                "responsivePriority": 2,
            })
        );
    }

    #[test]
    fn order_data_accepts_single_index() {
        let options: ColumnOptions = serde_json::from_value(json!({ "orderData": 3 })).unwrap();
        assert_eq!(options.order_data, Some(vec![3]));

        let options: ColumnOptions = serde_json::from_value(json!({ "orderData": [0, 1] })).unwrap();
        assert_eq!(options.order_data, Some(vec![0, 1]));
    }

    #[test]
    fn field_metadata_defaults_when_deserialized() {
        let field: FieldMetadata = serde_json::from_value(json!({
            "name": "Email",
            "annotation": { "data": "mail", "searchable": true }
        }))
        .unwrap();

        assert_eq!(field.name, "Email");
        assert_eq!(field.serialized_name, None);
        assert!(!field.ignore);
        let annotation = field.annotation.unwrap();
        assert_eq!(annotation.data.as_deref(), Some("mail"));
        assert_eq!(annotation.options.searchable, Some(true));
        assert_eq!(annotation.options.visible, None);
    }

    #[test]
    fn widget_vocabulary_parses() {
        assert_eq!(CellType::parse("td"), Some(CellType::Td));
        assert_eq!(CellType::parse("TD"), None);
        assert_eq!(SortDirection::parse("desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("descending"), None);
    }
}
