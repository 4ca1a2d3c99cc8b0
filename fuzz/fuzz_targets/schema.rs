#![no_main]

use libfuzzer_sys::fuzz_target;
use tablecols::{ColumnConfig, ToJson, columns_from_schema_json};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any schema that decodes must build and serialize
        if let Ok(columns) = columns_from_schema_json(s, &ColumnConfig::default()) {
            let _ = columns.to_json();
        }
    }
});
