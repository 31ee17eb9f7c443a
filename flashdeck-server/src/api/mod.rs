//! HTTP API handlers for flashdeck-server

pub mod flashcards;
pub mod health;
pub mod import;
pub mod ui;

pub use flashcards::flashcard_routes;
pub use health::health_routes;
pub use import::import_routes;
pub use ui::ui_routes;
