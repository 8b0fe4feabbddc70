use std::path::PathBuf;

use crate::store::ReportStore;

/// Shared application state, injected into handlers via `web::Data`.
///
/// Holds the only handle to the report database and the directory used
/// for template and export files; handlers own no ambient globals.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ReportStore,
    pub data_dir: PathBuf,
}
