use serde::{Deserialize, Serialize};

/// Payload for creating a report. `summary` and `plan` may be omitted
/// and default to empty text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub plan: String,
}

/// Partial update for a report: only the supplied fields are
/// overwritten, the rest keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub plan: Option<String>,
}

/// Payload for the settings save endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSettingsRequest {
    pub filename_pattern: String,
}

/// Metadata part sent alongside the file in a template upload.
/// `template_id` is set when replacing an existing template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateUpload {
    pub template_id: Option<String>,
}
