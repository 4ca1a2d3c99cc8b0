//! CLI command implementations
//!
//! All command functions return `CliResult<String>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tablecols_core::{ColumnConfig, DataPrecedence};

use super::{CliError, CliResult, ColumnsArgs};
use crate::json::{ToJson, columns_from_schema_json};

/// Build the column descriptors for the schema named in `args` and serialize them.
pub fn columns(args: &ColumnsArgs) -> CliResult<String> {
    let source = read_schema(&args.schema)?;
    columns_from_source(&source, args)
}

/// Build and serialize columns from an in-memory schema description.
pub fn columns_from_source(source: &str, args: &ColumnsArgs) -> CliResult<String> {
    let config = config_from_args(args);
    let columns = columns_from_schema_json(source, &config)?;
    tracing::info!(columns = columns.len(), "built column descriptors");

    let output = if args.pretty {
        columns.to_json_pretty()?
    } else {
        columns.to_json()?
    };
    Ok(output)
}

fn config_from_args(args: &ColumnsArgs) -> ColumnConfig {
    let precedence = if args.prefer_serialized_name {
        DataPrecedence::SerializedNameFirst
    } else {
        DataPrecedence::AnnotationFirst
    };

    ColumnConfig::new()
        .with_data_precedence(precedence)
        .with_elide_widget_defaults(args.elide_defaults)
}

/// Read the schema file, or stdin when the path is `-`.
///
/// ## Errors
///
/// Returns a `CliError` naming the path if the file cannot be read.
fn read_schema(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
        return Ok(source);
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading '{}': {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ExitCode;
    use std::path::PathBuf;

    fn args() -> ColumnsArgs {
        ColumnsArgs {
            schema: PathBuf::from("-"),
            pretty: false,
            elide_defaults: false,
            prefer_serialized_name: false,
        }
    }

    const SCHEMA: &str = r#"[
        {"name": "Id", "annotation": {"visible": true}},
        {"name": "Name", "serializedName": "full_name", "annotation": {"data": "name"}}
    ]"#;

    #[test]
    fn builds_compact_json() {
        let output = columns_from_source(SCHEMA, &args()).unwrap();
        assert_eq!(output, r#"[{"data":"id","visible":true},{"data":"name"}]"#);
    }

    #[test]
    fn flags_change_resolution() {
        let args = ColumnsArgs {
            elide_defaults: true,
            prefer_serialized_name: true,
            ..args()
        };

        let output = columns_from_source(SCHEMA, &args).unwrap();
        assert_eq!(output, r#"[{"data":"id"},{"data":"full_name"}]"#);
    }

    #[test]
    fn invalid_schema_reports_failure() {
        let err = columns_from_source("not json", &args()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("invalid schema description"));
    }

    #[test]
    fn missing_file_names_path() {
        let args = ColumnsArgs {
            schema: PathBuf::from("does/not/exist.json"),
            ..args()
        };

        let err = columns(&args).unwrap_err();
        assert!(err.message.contains("does/not/exist.json"));
    }
}
