//! Builder configuration.

/// Which explicit source wins when resolving a column's `data` key.
///
/// Both sources beat the [`lower_first`](crate::lower_first) fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataPrecedence {
    /// Annotation `data` first, then the declared serialization name.
    #[default]
    AnnotationFirst,
    /// Declared serialization name first, then annotation `data`.
    SerializedNameFirst,
}

/// Options for [`build_columns_with`](crate::build_columns_with).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Resolution order for the `data` key
    pub data_precedence: DataPrecedence,
    /// Drop annotation values equal to the widget defaults (`visible: true`, `searchable: false`,
    /// `orderable: false`, negative `responsivePriority`/`order`) instead of emitting them.
    pub elide_widget_defaults: bool,
}

impl ColumnConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `data` resolution order
    pub fn with_data_precedence(mut self, precedence: DataPrecedence) -> Self {
        self.data_precedence = precedence;
        self
    }

    /// Enable or disable widget-default elision
    pub fn with_elide_widget_defaults(mut self, elide: bool) -> Self {
        self.elide_widget_defaults = elide;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ColumnConfig::default();
        assert_eq!(config.data_precedence, DataPrecedence::AnnotationFirst);
        assert!(!config.elide_widget_defaults);
        assert_eq!(config, ColumnConfig::new());
    }

    #[test]
    fn test_builder_chain() {
        let config = ColumnConfig::new()
            .with_data_precedence(DataPrecedence::SerializedNameFirst)
            .with_elide_widget_defaults(true);

        assert_eq!(config.data_precedence, DataPrecedence::SerializedNameFirst);
        assert!(config.elide_widget_defaults);
    }
}
