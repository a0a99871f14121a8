//! Card record

use serde::{Deserialize, Serialize};

/// A single flashcard: a term, its definition, and how many times the user
/// answered it wrongly.
///
/// On disk a card is a 3-element array `[term, definition, wrong_count]`; the
/// tuple conversions below keep that shape while the in-memory type stays a
/// named record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, u32)", into = "(String, String, u32)")]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub wrong_count: u32,
}

impl Card {
    /// Create a fresh card with a zero wrong-answer count.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Card {
            term: term.into(),
            definition: definition.into(),
            wrong_count: 0,
        }
    }
}

impl From<(String, String, u32)> for Card {
    fn from((term, definition, wrong_count): (String, String, u32)) -> Self {
        Card {
            term,
            definition,
            wrong_count,
        }
    }
}

impl From<Card> for (String, String, u32) {
    fn from(card: Card) -> Self {
        (card.term, card.definition, card.wrong_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_starts_with_zero_errors() {
        let card = Card::new("dog", "a barking animal");
        assert_eq!(card.term, "dog");
        assert_eq!(card.definition, "a barking animal");
        assert_eq!(card.wrong_count, 0);
    }

    #[test]
    fn test_serializes_as_three_element_array() {
        let card = Card {
            term: "cat".to_string(),
            definition: "a meowing animal".to_string(),
            wrong_count: 2,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"["cat","a meowing animal",2]"#);
    }

    #[test]
    fn test_deserializes_from_three_element_array() {
        let card: Card = serde_json::from_str(r#"["dog","a barking animal",1]"#).unwrap();
        assert_eq!(card.term, "dog");
        assert_eq!(card.definition, "a barking animal");
        assert_eq!(card.wrong_count, 1);
    }

    #[test]
    fn test_rejects_arrays_of_wrong_arity() {
        let result: std::result::Result<Card, _> = serde_json::from_str(r#"["dog","bark"]"#);
        assert!(result.is_err());
    }
}
