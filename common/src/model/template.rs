use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMeta {
    pub id: String,
    pub filename: String,
    pub content_md5: String,
    pub uploaded_at: String,
}
