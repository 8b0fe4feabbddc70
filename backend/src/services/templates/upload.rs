use std::fs;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::template::TemplateMeta;
use common::requests::TemplateUpload;
use futures_util::StreamExt;
use log::info;
use uuid::Uuid;

use crate::docx;
use crate::error::Error;
use crate::state::AppState;

use super::stored_file_path;

pub async fn process(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, Error> {
    let meta = save_template(&state, payload).await?;
    Ok(HttpResponse::Ok().json(meta))
}

/// Consume the multipart stream, validate the upload, and persist both
/// the file and its metadata row.
///
/// Two parts are understood: an optional `json` part with a
/// `TemplateUpload` (naming an existing template id to replace), and the
/// required `file` part carrying the `.docx` bytes. The bytes are hashed
/// while streaming and checked to open as a docx archive before anything
/// is written.
async fn save_template(state: &AppState, mut payload: Multipart) -> Result<TemplateMeta, Error> {
    let mut requested_id: Option<String> = None;
    let mut upload: Option<(String, Vec<u8>, String)> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| Error::Validation(format!("malformed upload: {e}")))?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match part_name.as_deref() {
            Some("json") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk =
                        chunk.map_err(|e| Error::Validation(format!("malformed upload: {e}")))?;
                    bytes.extend_from_slice(&chunk);
                }
                let info: TemplateUpload = serde_json::from_slice(&bytes)
                    .map_err(|e| Error::Validation(format!("bad upload metadata: {e}")))?;
                requested_id = info.template_id;
            }

            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();

                if !filename.to_lowercase().ends_with(".docx") {
                    return Err(Error::Validation(
                        "only .docx templates are accepted".to_string(),
                    ));
                }

                let mut hasher = md5::Context::new();
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk =
                        chunk.map_err(|e| Error::Validation(format!("malformed upload: {e}")))?;
                    hasher.consume(&chunk);
                    bytes.extend_from_slice(&chunk);
                }

                let content_md5 = format!("{:x}", hasher.finalize());
                upload = Some((filename, bytes, content_md5));
            }

            _ => {}
        }
    }

    let (filename, bytes, content_md5) =
        upload.ok_or_else(|| Error::Validation("missing template file".to_string()))?;

    docx::validate(&bytes)?;

    let id = requested_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    // A replacement upload leaves the superseded file behind; remove it
    // once the new row is known to be valid.
    let superseded = state.store.get_template(&id).ok();

    let meta = state.store.insert_template(&TemplateMeta {
        id,
        filename,
        content_md5,
        uploaded_at: String::new(),
    })?;
    fs::write(stored_file_path(&state.data_dir, &meta), &bytes)?;

    if let Some(old) = superseded {
        if old.content_md5 != meta.content_md5 {
            let _ = fs::remove_file(stored_file_path(&state.data_dir, &old));
        }
    }

    info!("stored template {} ({})", meta.id, meta.filename);
    Ok(meta)
}
