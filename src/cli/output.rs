//! Output formatting utilities
//!
//! Pure message builders for the interactive session, kept separate so the
//! wording is testable without driving the prompt loop.

/// Message after a successful add.
pub fn format_pair_added(term: &str, definition: &str) -> String {
    format!("The pair (\"{}\":\"{}\") has been added", term, definition)
}

/// Re-prompt when a term or definition already exists. `field` is the user
/// facing name of the colliding field ("term" or "definition").
pub fn format_duplicate(field: &str, value: &str) -> String {
    format!("The {} \"{}\" already exists. Try again:", field, value)
}

pub fn format_remove_failed(term: &str) -> String {
    format!("Can't remove \"{}\": there is no such card.", term)
}

pub fn format_ask(term: &str) -> String {
    format!("Print the definition of \"{}\":", term)
}

pub fn format_wrong(right: &str) -> String {
    format!("Wrong. The right answer is \"{}\".", right)
}

pub fn format_wrong_but_other(right: &str, other_term: &str) -> String {
    format!(
        "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
        right, other_term
    )
}

pub fn format_cards_loaded(count: usize) -> String {
    format!("{} cards have been loaded.", count)
}

pub fn format_cards_saved(count: usize) -> String {
    format!("{} cards have been saved.", count)
}

/// Message for the `hardest card` action. `terms` holds the terms of every
/// card tied at `max` errors; the caller only calls this when `max > 0`.
pub fn format_hardest_cards(max: u32, terms: &[&str]) -> String {
    if terms.len() == 1 {
        format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            terms[0], max
        )
    } else {
        let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
        format!(
            "The hardest cards are {}. You have {} errors answering them.",
            quoted.join(", "),
            max
        )
    }
}
