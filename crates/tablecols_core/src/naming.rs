//! Identifier transforms used to derive a column's `data` key.

/// Lowercase the first character of an identifier, leaving the remainder unchanged.
///
/// This is the fallback `data` key for fields with neither an annotation nor a declared serialization name.
///
/// ## Examples
/// ```rust
/// use tablecols_core::lower_first;
/// assert_eq!(lower_first("Name"), "name");
/// assert_eq!(lower_first("ID"), "iD");
/// assert_eq!(lower_first("user_name"), "user_name");
/// ```
pub fn lower_first(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Container-level rename rule, spelled the way serde spells `rename_all` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameRule {
    #[default]
    None,
    Lowercase,
    Uppercase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    ScreamingKebabCase,
}

impl RenameRule {
    /// Parse a serde `rename_all` value. Unknown spellings return `None`.
    pub fn from_serde(value: &str) -> Option<Self> {
        match value {
            "lowercase" => Some(RenameRule::Lowercase),
            "UPPERCASE" => Some(RenameRule::Uppercase),
            "PascalCase" => Some(RenameRule::PascalCase),
            "camelCase" => Some(RenameRule::CamelCase),
            "snake_case" => Some(RenameRule::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(RenameRule::ScreamingSnakeCase),
            "kebab-case" => Some(RenameRule::KebabCase),
            "SCREAMING-KEBAB-CASE" => Some(RenameRule::ScreamingKebabCase),
            _ => None,
        }
    }

    /// Apply the rule to a snake_case field name, the way serde renames struct fields.
    pub fn apply(&self, field: &str) -> String {
        match self {
            RenameRule::None | RenameRule::Lowercase | RenameRule::SnakeCase => field.to_string(),
            RenameRule::Uppercase | RenameRule::ScreamingSnakeCase => field.to_ascii_uppercase(),
            RenameRule::PascalCase => to_pascal_case(field),
            RenameRule::CamelCase => lower_first(&to_pascal_case(field)),
            RenameRule::KebabCase => field.replace('_', "-"),
            RenameRule::ScreamingKebabCase => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

fn to_pascal_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut capitalize = true;

    for c in field.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            result.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            result.push(c);
        }
    }

    result
}
