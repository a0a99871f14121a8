//! Interactive study session
//!
//! Drives a `CardStore` through a line-based prompt loop. The session is
//! generic over its input and output so tests can script it with in-memory
//! buffers, and it owns its transcript so parallel sessions never share
//! state.

use crate::cli::output;
use crate::domain::{AddOutcome, CardStore, Verdict};
use crate::error::{CardboxError, Result};
use crate::infrastructure::{deck_file, Transcript};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// One action of the prompt loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            "import" => Ok(Action::Import),
            "export" => Ok(Action::Export),
            "ask" => Ok(Action::Ask),
            "exit" => Ok(Action::Exit),
            "log" => Ok(Action::Log),
            "hardest card" => Ok(Action::HardestCard),
            "reset stats" => Ok(Action::ResetStats),
            _ => Err(()),
        }
    }
}

pub struct Session<R, W> {
    store: CardStore,
    transcript: Transcript,
    input: R,
    output: W,
    export_to: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            store: CardStore::new(),
            transcript: Transcript::new(),
            input,
            output,
            export_to: None,
        }
    }

    /// Configure a deck file to export when the session ends.
    pub fn with_export(mut self, path: Option<PathBuf>) -> Self {
        self.export_to = path;
        self
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run the prompt loop until `exit` or end of input. Both paths perform
    /// the final export if one was configured.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(action) = self.prompt(ACTION_PROMPT)? else {
                break;
            };
            match action.parse::<Action>() {
                Ok(Action::Add) => self.add_card()?,
                Ok(Action::Remove) => self.remove_card()?,
                Ok(Action::Import) => self.import_action()?,
                Ok(Action::Export) => self.export_action()?,
                Ok(Action::Ask) => self.ask_cards()?,
                Ok(Action::Log) => self.save_log()?,
                Ok(Action::HardestCard) => self.hardest_card()?,
                Ok(Action::ResetStats) => self.reset_stats()?,
                Ok(Action::Exit) => {
                    self.say("Bye bye!")?;
                    break;
                }
                Err(()) => self.say("Cannot recognize the action above. Try again:")?,
            }
        }

        if let Some(path) = self.export_to.clone() {
            self.export_deck(&path)?;
        }
        Ok(())
    }

    /// Load a deck from `path`, replacing the current store contents.
    /// Missing or malformed files are reported and leave the store alone.
    pub fn import_deck(&mut self, path: &Path) -> Result<()> {
        match deck_file::import_deck(path) {
            Ok(cards) => {
                let count = cards.len();
                self.store.replace_all(cards);
                if count > 0 {
                    self.say(&output::format_cards_loaded(count))?;
                }
                Ok(())
            }
            Err(CardboxError::FileNotFound(_)) => self.say("File not found."),
            Err(CardboxError::DeckFormat(e)) => {
                self.say(&format!("The file is not a valid deck: {}", e))
            }
            Err(e) => Err(e),
        }
    }

    fn export_deck(&mut self, path: &Path) -> Result<()> {
        let count = deck_file::export_deck(path, self.store.cards())?;
        if count > 0 {
            self.say(&output::format_cards_saved(count))?;
        }
        Ok(())
    }

    fn add_card(&mut self) -> Result<()> {
        let Some(term) = self.prompt_unique("term", "The card:")? else {
            return Ok(());
        };
        let Some(definition) = self.prompt_unique("definition", "The definition of the card:")?
        else {
            return Ok(());
        };

        // Both fields were just checked for uniqueness, so this cannot fail.
        if let AddOutcome::Added { .. } = self.store.add(&term, &definition) {
            self.say(&output::format_pair_added(&term, &definition))?;
        }
        Ok(())
    }

    /// Prompt until the answer is unique for the given card field.
    fn prompt_unique(&mut self, field: &str, question: &str) -> Result<Option<String>> {
        let Some(mut value) = self.prompt(question)? else {
            return Ok(None);
        };
        loop {
            let taken = match field {
                "term" => self.store.find_by_term(&value).is_some(),
                _ => self.store.find_by_definition(&value).is_some(),
            };
            if !taken {
                return Ok(Some(value));
            }
            let Some(again) = self.prompt(&output::format_duplicate(field, &value))? else {
                return Ok(None);
            };
            value = again;
        }
    }

    fn remove_card(&mut self) -> Result<()> {
        let Some(term) = self.prompt("Which card?")? else {
            return Ok(());
        };
        if self.store.remove(&term) {
            self.say("The card has been removed.")
        } else {
            self.say(&output::format_remove_failed(&term))
        }
    }

    fn import_action(&mut self) -> Result<()> {
        let Some(name) = self.prompt("File name:")? else {
            return Ok(());
        };
        self.import_deck(Path::new(&name))
    }

    fn export_action(&mut self) -> Result<()> {
        let Some(name) = self.prompt("File name:")? else {
            return Ok(());
        };
        self.export_deck(Path::new(&name))
    }

    fn ask_cards(&mut self) -> Result<()> {
        let Some(count) = self.prompt_count()? else {
            return Ok(());
        };
        if self.store.is_empty() && count > 0 {
            return self.say("No cards to ask. Add some first.");
        }

        let drawn = self.store.sample(count, &mut rand::thread_rng())?;
        for card in drawn {
            let Some(answer) = self.prompt(&output::format_ask(&card.term))? else {
                return Ok(());
            };
            let message = match self.store.grade_answer(&card.term, &answer)? {
                Verdict::Correct => "Correct!".to_string(),
                Verdict::CorrectForOther { index } => {
                    let other = self
                        .store
                        .get(index)
                        .map(|c| c.term.clone())
                        .unwrap_or_default();
                    output::format_wrong_but_other(&card.definition, &other)
                }
                Verdict::Wrong => output::format_wrong(&card.definition),
            };
            self.say(&message)?;
        }
        Ok(())
    }

    /// Ask how many cards to quiz, re-prompting on non-numeric input.
    fn prompt_count(&mut self) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.prompt("How many times to ask?")? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(count) => return Ok(Some(count)),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    fn save_log(&mut self) -> Result<()> {
        let Some(name) = self.prompt("File name:")? else {
            return Ok(());
        };
        self.transcript.save_to(Path::new(&name))?;
        self.say("The log has been saved.")
    }

    fn hardest_card(&mut self) -> Result<()> {
        let (max, indices) = self.store.hardest_cards();
        if max == 0 {
            return self.say("There are no cards with errors.");
        }
        let terms: Vec<&str> = indices
            .iter()
            .filter_map(|&i| self.store.get(i).map(|card| card.term.as_str()))
            .collect();
        let message = output::format_hardest_cards(max, &terms);
        self.say(&message)
    }

    fn reset_stats(&mut self) -> Result<()> {
        self.store.reset_statistics();
        self.say("Card statistics have been reset.")
    }

    /// Print one line and record it in the transcript.
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.transcript.record(text);
        Ok(())
    }

    /// Print a question and read one answer line. Returns `None` at end of
    /// input; both the question and the answer land in the transcript.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.say(question)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        self.transcript.record(&answer);
        Ok(Some(answer))
    }
}
