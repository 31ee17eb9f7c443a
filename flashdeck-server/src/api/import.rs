//! Batch import API handler
//!
//! POST /flashcards/batch accepts a multipart form with a `file` field
//! holding a CSV document and delegates the parsing to
//! [`flashdeck_core::BatchImporter`].

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    AppState,
};
use flashdeck_core::BatchImporter;

/// POST /flashcards/batch response
#[derive(Debug, Serialize)]
pub struct BatchImportResponse {
    pub message: String,
    pub errors: Vec<String>,
}

/// POST /flashcards/batch
///
/// Upload validation happens before any byte of the file is parsed:
/// the form must carry a `file` field, with a filename, ending in
/// `.csv`. Row-level problems never fail the request; they come back
/// in `errors` alongside the processed count.
pub async fn batch_import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<BatchImportResponse>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(ApiError::BadRequest("No file selected.".to_string())),
        };

        if !file_name.ends_with(".csv") {
            return Err(ApiError::BadRequest("Only CSV files are allowed.".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;

        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| ApiError::BadRequest("No file provided.".to_string()))?;

    let summary = BatchImporter::new(&state.store).import(&data).await?;

    tracing::info!(
        file = %file_name,
        processed = summary.processed,
        failed = summary.errors.len(),
        "Batch import finished"
    );

    Ok(Json(BatchImportResponse {
        message: format!("{} flashcards processed successfully.", summary.processed),
        errors: summary.errors,
    }))
}

/// Build batch import routes
pub fn import_routes() -> Router<AppState> {
    Router::new().route("/flashcards/batch", post(batch_import))
}
