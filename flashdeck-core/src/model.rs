//! Flashcard record model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single vocabulary flashcard
///
/// Persisted as one JSON document per card, named `<id>.json` inside
/// the store directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Unique card identifier, generated at creation time
    pub id: Uuid,

    /// Word or phrase being learned
    pub word: String,

    /// Translation in the learner's language
    pub translation: String,

    /// Usage examples (absent in older records, so defaulted on read)
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Flashcard {
    /// Create a new flashcard with a freshly generated id
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        examples: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: word.into(),
            translation: translation.into(),
            examples,
        }
    }
}
