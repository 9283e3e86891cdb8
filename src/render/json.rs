//! JSON rendering for parse results.

use crate::error::{Error, Result};
use crate::model::Drawing;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a drawing to JSON.
pub fn to_json(drawing: &Drawing, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(drawing),
        JsonFormat::Compact => serde_json::to_string(drawing),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
