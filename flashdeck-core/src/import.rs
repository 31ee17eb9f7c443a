//! CSV batch import
//!
//! Parses an uploaded CSV document and saves one flashcard per valid
//! data row. Import is best-effort: a bad row is recorded as an error
//! and never stops the rows after it.

use csv::StringRecord;

use crate::error::{Error, Result};
use crate::model::Flashcard;
use crate::store::FlashcardStore;

/// Outcome of a batch import
///
/// `processed` counts cards actually written to the store; `errors`
/// holds one human-readable entry per rejected or failed row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of flashcards saved
    pub processed: usize,
    /// Per-row failure descriptions, in row order
    pub errors: Vec<String>,
}

/// CSV importer writing into a [`FlashcardStore`]
pub struct BatchImporter<'a> {
    store: &'a FlashcardStore,
}

impl<'a> BatchImporter<'a> {
    pub fn new(store: &'a FlashcardStore) -> Self {
        Self { store }
    }

    /// Import flashcards from raw CSV bytes
    ///
    /// The document must be UTF-8 with a header row naming `word`,
    /// `translation` and optionally `examples` (values separated by `;`).
    /// Column order does not matter and unknown columns are ignored.
    /// Rows are numbered from 1, headers excluded, in error entries.
    pub async fn import(&self, data: &[u8]) -> Result<ImportSummary> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::InvalidInput(format!("File is not valid UTF-8: {e}")))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| Error::InvalidInput(format!("Invalid CSV header: {e}")))?
            .clone();

        let word_col = column_index(&headers, "word");
        let translation_col = column_index(&headers, "translation");
        let examples_col = column_index(&headers, "examples");

        let mut summary = ImportSummary::default();

        for (row_idx, result) in reader.records().enumerate() {
            let row = row_idx + 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    summary.errors.push(format!("Row {row}: invalid CSV record: {e}"));
                    continue;
                }
            };

            let word = required_field(&record, word_col);
            let translation = required_field(&record, translation_col);

            let (word, translation) = match (word, translation) {
                (Some(word), Some(translation)) => (word, translation),
                (word, translation) => {
                    let mut missing = Vec::new();
                    if word.is_none() {
                        missing.push("'word'");
                    }
                    if translation.is_none() {
                        missing.push("'translation'");
                    }
                    summary.errors.push(format!(
                        "Row {row}: missing required {} {}",
                        if missing.len() == 1 { "field" } else { "fields" },
                        missing.join(" and ")
                    ));
                    continue;
                }
            };

            let examples = examples_col
                .and_then(|col| record.get(col))
                .map(split_examples)
                .unwrap_or_default();

            let card = Flashcard::new(word, translation, examples);
            match self.store.save(&card).await {
                Ok(()) => summary.processed += 1,
                Err(e) => {
                    tracing::warn!("Row {row}: failed to save flashcard: {e}");
                    summary.errors.push(format!("Row {row}: failed to save flashcard: {e}"));
                }
            }
        }

        Ok(summary)
    }
}

/// Locate a column by header name, ignoring surrounding whitespace
fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// A required cell: present and not blank
fn required_field<'r>(record: &'r StringRecord, col: Option<usize>) -> Option<&'r str> {
    record.get(col?).filter(|value| !value.trim().is_empty())
}

/// Split an `examples` cell on `;`, mapping a blank cell to no examples
fn split_examples(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(';').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_temp_store() -> (TempDir, FlashcardStore) {
        let temp = TempDir::new().unwrap();
        let store = FlashcardStore::open(temp.path()).await.unwrap();
        (temp, store)
    }

    async fn import_str(store: &FlashcardStore, csv: &str) -> ImportSummary {
        BatchImporter::new(store).import(csv.as_bytes()).await.unwrap()
    }

    #[tokio::test]
    async fn test_import_valid_rows() {
        let (_temp, store) = open_temp_store().await;

        let csv = "word,translation,examples\n\
                   casa,house,Mi casa es grande.;La casa azul\n\
                   perro,dog,\n";
        let summary = import_str(&store, csv).await;

        assert_eq!(summary.processed, 2);
        assert!(summary.errors.is_empty());

        let mut cards = store.load_all().await.unwrap();
        cards.sort_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].word, "casa");
        assert_eq!(
            cards[0].examples,
            vec!["Mi casa es grande.".to_string(), "La casa azul".to_string()]
        );
        assert_eq!(cards[1].word, "perro");
        assert!(cards[1].examples.is_empty());
    }

    #[tokio::test]
    async fn test_import_reports_missing_fields_by_row() {
        let (_temp, store) = open_temp_store().await;

        let csv = "word,translation\n\
                   casa,house\n\
                   gato,\n\
                   sol,sun\n";
        let summary = import_str(&store, csv).await;

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].starts_with("Row 2:"));
        assert!(summary.errors[0].contains("'translation'"));

        // The row after the bad one still got saved
        let cards = store.load_all().await.unwrap();
        assert!(cards.iter().any(|c| c.word == "sol"));
    }

    #[tokio::test]
    async fn test_import_reports_both_missing_fields() {
        let (_temp, store) = open_temp_store().await;

        let csv = "word,translation,examples\n\
                   ,,unused\n";
        let summary = import_str(&store, csv).await;

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].contains("'word' and 'translation'"));
    }

    #[tokio::test]
    async fn test_import_accepts_any_column_order() {
        let (_temp, store) = open_temp_store().await;

        let csv = "examples,translation,word\n\
                   El sol brilla.,sun,sol\n";
        let summary = import_str(&store, csv).await;

        assert_eq!(summary.processed, 1);
        let cards = store.load_all().await.unwrap();
        assert_eq!(cards[0].word, "sol");
        assert_eq!(cards[0].translation, "sun");
        assert_eq!(cards[0].examples, vec!["El sol brilla.".to_string()]);
    }

    #[tokio::test]
    async fn test_import_ignores_unknown_columns() {
        let (_temp, store) = open_temp_store().await;

        let csv = "word,notes,translation\n\
                   luna,lunar stuff,moon\n";
        let summary = import_str(&store, csv).await;

        assert_eq!(summary.processed, 1);
        assert!(summary.errors.is_empty());
    }

    #[tokio::test]
    async fn test_import_without_examples_column() {
        let (_temp, store) = open_temp_store().await;

        let csv = "word,translation\n\
                   mar,sea\n";
        let summary = import_str(&store, csv).await;

        assert_eq!(summary.processed, 1);
        let cards = store.load_all().await.unwrap();
        assert!(cards[0].examples.is_empty());
    }

    #[tokio::test]
    async fn test_import_missing_word_column_rejects_every_row() {
        let (_temp, store) = open_temp_store().await;

        let csv = "translation,examples\n\
                   house,\n\
                   dog,\n";
        let summary = import_str(&store, csv).await;

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.errors.len(), 2);
        assert!(summary.errors.iter().all(|e| e.contains("'word'")));
    }

    #[tokio::test]
    async fn test_import_empty_document() {
        let (_temp, store) = open_temp_store().await;

        let summary = import_str(&store, "").await;
        assert_eq!(summary.processed, 0);
        assert!(summary.errors.is_empty());
    }

    #[tokio::test]
    async fn test_import_header_only_document() {
        let (_temp, store) = open_temp_store().await;

        let summary = import_str(&store, "word,translation,examples\n").await;
        assert_eq!(summary.processed, 0);
        assert!(summary.errors.is_empty());
    }

    #[tokio::test]
    async fn test_import_rejects_invalid_utf8() {
        let (_temp, store) = open_temp_store().await;

        let result = BatchImporter::new(&store).import(&[0xff, 0xfe, 0x00]).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_import_semicolon_examples_keep_inner_whitespace() {
        let (_temp, store) = open_temp_store().await;

        let csv = "word,translation,examples\n\
                   pan,bread,uno; dos\n";
        import_str(&store, csv).await;

        let cards = store.load_all().await.unwrap();
        assert_eq!(cards[0].examples, vec!["uno".to_string(), " dos".to_string()]);
    }
}
