//! Deck file persistence
//!
//! A deck file is a JSON array of 3-element arrays
//! `[term, definition, wrong_count]`.

use crate::domain::Card;
use crate::error::{CardboxError, Result};
use std::fs;
use std::path::Path;

/// Load a deck from the given path.
///
/// A missing file is reported as `FileNotFound` so the caller can surface it
/// without aborting the session; malformed JSON surfaces as `DeckFormat`.
/// Neither touches any existing in-memory deck.
pub fn import_deck(path: &Path) -> Result<Vec<Card>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CardboxError::FileNotFound(path.to_path_buf())
        } else {
            CardboxError::Io(e)
        }
    })?;

    let cards = serde_json::from_str(&contents)?;
    Ok(cards)
}

/// Write the whole deck to the given path, overwriting atomically.
///
/// The file is written next to its destination and renamed into place, so a
/// crash mid-write never leaves a truncated deck behind.
pub fn export_deck(path: &Path, cards: &[Card]) -> Result<usize> {
    let contents = serde_json::to_string(cards)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;

    Ok(cards.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_import_missing_file_is_file_not_found() {
        let temp = TempDir::new().unwrap();
        let result = import_deck(&temp.path().join("absent.json"));
        match result {
            Err(CardboxError::FileNotFound(path)) => {
                assert!(path.ends_with("absent.json"));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_import_malformed_json_is_deck_format_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "[[\"dog\"]]").unwrap();
        match import_deck(&path) {
            Err(CardboxError::DeckFormat(_)) => {}
            other => panic!("Expected DeckFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");
        let cards = vec![
            Card {
                term: "dog".to_string(),
                definition: "a barking animal".to_string(),
                wrong_count: 0,
            },
            Card {
                term: "cat".to_string(),
                definition: "a meowing animal".to_string(),
                wrong_count: 2,
            },
        ];

        let saved = export_deck(&path, &cards).unwrap();
        assert_eq!(saved, 2);

        let loaded = import_deck(&path).unwrap();
        assert_eq!(loaded, cards);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");
        fs::write(&path, "[[\"old\",\"entry\",9]]").unwrap();

        export_deck(&path, &[Card::new("sun", "a star")]).unwrap();

        let loaded = import_deck(&path).unwrap();
        assert_eq!(loaded, vec![Card::new("sun", "a star")]);
    }

    #[test]
    fn test_export_leaves_no_temp_file_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");
        export_deck(&path, &[Card::new("sun", "a star")]).unwrap();
        assert!(!temp.path().join("deck.json.tmp").exists());
    }

    #[test]
    fn test_import_reads_the_on_disk_tuple_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");
        fs::write(&path, r#"[["dog","a barking animal",1]]"#).unwrap();
        let loaded = import_deck(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].term, "dog");
        assert_eq!(loaded[0].wrong_count, 1);
    }
}
