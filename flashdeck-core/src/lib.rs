//! flashdeck-core - flashcard storage and import
//!
//! Domain logic shared by the flashdeck services: the flashcard record
//! model, the file-backed record store, and the CSV batch importer.
//! HTTP concerns live in flashdeck-server.

pub mod error;
pub mod import;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use import::{BatchImporter, ImportSummary};
pub use model::Flashcard;
pub use store::FlashcardStore;
