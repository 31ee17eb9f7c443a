//! Flashcard CRUD API handlers
//!
//! GET /flashcards, POST /flashcards, PUT /flashcards/:id

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    AppState,
};
use flashdeck_core::Flashcard;

/// GET /flashcards response
#[derive(Debug, Serialize)]
pub struct FlashcardListResponse {
    pub flashcards: Vec<Flashcard>,
}

/// POST /flashcards request
///
/// Missing fields deserialize to their empty values and are rejected
/// by validation, so the error message stays the same whether a field
/// is absent or blank.
#[derive(Debug, Deserialize)]
pub struct CreateFlashcardRequest {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// PUT /flashcards/:id request: any subset of fields to change
#[derive(Debug, Deserialize)]
pub struct UpdateFlashcardRequest {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub examples: Option<Vec<String>>,
}

/// POST and PUT response carrying the affected flashcard
#[derive(Debug, Serialize)]
pub struct FlashcardResponse {
    pub message: String,
    pub flashcard: Flashcard,
}

/// GET /flashcards
///
/// List every stored flashcard. Reads the storage directory on each
/// call; order follows the directory listing.
pub async fn list_flashcards(
    State(state): State<AppState>,
) -> ApiResult<Json<FlashcardListResponse>> {
    let flashcards = state.store.load_all().await?;
    Ok(Json(FlashcardListResponse { flashcards }))
}

/// POST /flashcards
///
/// Create a flashcard from a JSON body. `word` and `translation` are
/// required; `examples` defaults to an empty list.
pub async fn create_flashcard(
    State(state): State<AppState>,
    Json(request): Json<CreateFlashcardRequest>,
) -> ApiResult<Json<FlashcardResponse>> {
    if request.word.trim().is_empty() || request.translation.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Both 'word' and 'translation' are required.".to_string(),
        ));
    }

    let flashcard = Flashcard::new(request.word, request.translation, request.examples);
    state.store.save(&flashcard).await?;

    tracing::info!(id = %flashcard.id, word = %flashcard.word, "Flashcard created");

    Ok(Json(FlashcardResponse {
        message: "Flashcard created successfully.".to_string(),
        flashcard,
    }))
}

/// PUT /flashcards/:id
///
/// Update an existing flashcard. Fields absent from the body keep
/// their stored values; provided fields must not be blank.
pub async fn update_flashcard(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateFlashcardRequest>,
) -> ApiResult<Json<FlashcardResponse>> {
    // Ids are generated UUIDs, so a path segment that does not parse
    // cannot name an existing record
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::NotFound("Flashcard not found".to_string()))?;

    let mut flashcard = state
        .store
        .load(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flashcard not found".to_string()))?;

    if let Some(word) = request.word {
        if word.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "'word' must be a non-empty string.".to_string(),
            ));
        }
        flashcard.word = word;
    }

    if let Some(translation) = request.translation {
        if translation.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "'translation' must be a non-empty string.".to_string(),
            ));
        }
        flashcard.translation = translation;
    }

    if let Some(examples) = request.examples {
        flashcard.examples = examples;
    }

    state.store.save(&flashcard).await?;

    tracing::info!(id = %flashcard.id, "Flashcard updated");

    Ok(Json(FlashcardResponse {
        message: "Flashcard updated successfully.".to_string(),
        flashcard,
    }))
}

/// Build flashcard CRUD routes
pub fn flashcard_routes() -> Router<AppState> {
    Router::new()
        .route("/flashcards", get(list_flashcards))
        .route("/flashcards", post(create_flashcard))
        .route("/flashcards/:id", put(update_flashcard))
}
