use serde::{Deserialize, Serialize};

/// Export configuration, stored as a singleton row.
///
/// `filename_pattern` names generated documents; the literal markers
/// `{NAME}` and `{DATE}` inside it are replaced with the exported
/// report's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub filename_pattern: String,
}
