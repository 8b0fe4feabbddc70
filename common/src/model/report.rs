use serde::{Deserialize, Serialize};

/// A single weekly report entry as persisted by the backend.
///
/// `summary` and `plan` are Markdown-flavored multi-line text; the store
/// treats both as opaque strings. `created_at` and `updated_at` are
/// server-side timestamps and are informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Database identifier, assigned on creation and immutable afterwards.
    pub id: i64,
    /// Author name.
    pub name: String,
    /// Report date in `YYYY-MM-DD` form.
    pub date: String,
    /// What happened this week.
    pub summary: String,
    /// What is planned for next week.
    pub plan: String,
    pub created_at: String,
    pub updated_at: String,
}
