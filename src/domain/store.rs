//! Card store: mutation, lookup, sampling, grading and statistics

use crate::domain::Card;
use crate::error::{CardboxError, Result};
use rand::Rng;

/// Outcome of trying to add a card.
///
/// Duplicates are ordinary outcomes rather than errors; the caller decides
/// how to surface them. Each variant carries the index of the card involved:
/// the freshly appended card on `Added`, the conflicting card otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added { index: usize },
    DuplicateTerm { index: usize },
    DuplicateDefinition { index: usize },
}

/// Outcome of grading one answer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The suggested definition matches the asked card exactly.
    Correct,
    /// The suggested definition belongs to a different card; `index` points
    /// at that card. Still counted as a miss for the asked card.
    CorrectForOther { index: usize },
    Wrong,
}

/// An ordered collection of flashcards with unique terms and unique
/// definitions. Insertion order is preserved and is the iteration order.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        CardStore { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Add a new card. The term check takes priority over the definition
    /// check; the store is mutated only on `Added`.
    pub fn add(&mut self, term: &str, definition: &str) -> AddOutcome {
        if let Some(index) = self.find_by_term(term) {
            return AddOutcome::DuplicateTerm { index };
        }
        if let Some(index) = self.find_by_definition(definition) {
            return AddOutcome::DuplicateDefinition { index };
        }
        self.cards.push(Card::new(term, definition));
        AddOutcome::Added {
            index: self.cards.len() - 1,
        }
    }

    /// Remove the card with the given term. Returns whether a card was
    /// actually removed.
    pub fn remove(&mut self, term: &str) -> bool {
        match self.find_by_term(term) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the entire contents of the store, e.g. after importing a deck
    /// file. No uniqueness validation is applied to the incoming cards;
    /// `grade_answer` tolerates duplicate definitions from malformed imports.
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Draw `count` cards independently and uniformly at random, with
    /// replacement. Drawing from an empty store is undefined, so it is
    /// rejected explicitly unless `count` is zero.
    pub fn sample<R: Rng>(&self, count: usize, rng: &mut R) -> Result<Vec<Card>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.cards.is_empty() {
            return Err(CardboxError::EmptyDeck);
        }
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = rng.gen_range(0..self.cards.len());
            drawn.push(self.cards[index].clone());
        }
        Ok(drawn)
    }

    /// Grade one answer attempt for the card with the given term.
    ///
    /// An exact, case-sensitive match against the asked card's own definition
    /// is `Correct` and does not touch the statistics, even if another card
    /// happens to share that definition (possible after a malformed import).
    /// Any other answer increments the asked card's wrong count before the
    /// rest of the store is consulted.
    pub fn grade_answer(&mut self, term: &str, suggested: &str) -> Result<Verdict> {
        let target = self
            .find_by_term(term)
            .ok_or_else(|| CardboxError::CardNotFound(term.to_string()))?;

        if self.cards[target].definition == suggested {
            return Ok(Verdict::Correct);
        }

        self.cards[target].wrong_count += 1;

        match self.find_by_definition(suggested) {
            Some(index) => Ok(Verdict::CorrectForOther { index }),
            None => Ok(Verdict::Wrong),
        }
    }

    /// Index of the first card whose term matches exactly. Linear scan, no
    /// case folding, no trimming.
    pub fn find_by_term(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.term == term)
    }

    /// Index of the first card whose definition matches exactly.
    pub fn find_by_definition(&self, definition: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.definition == definition)
    }

    /// Reset every card's wrong-answer count to zero.
    pub fn reset_statistics(&mut self) {
        for card in &mut self.cards {
            card.wrong_count = 0;
        }
    }

    /// The maximum wrong-answer count together with the indices of every
    /// card achieving it, in store order. An empty store yields `(0, [])`.
    ///
    /// When all counts are zero this returns every index; whether "zero
    /// errors" is worth reporting is the caller's policy, not the store's.
    pub fn hardest_cards(&self) -> (u32, Vec<usize>) {
        let max = match self.cards.iter().map(|card| card.wrong_count).max() {
            Some(max) => max,
            None => return (0, Vec::new()),
        };
        let indices = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.wrong_count == max)
            .map(|(i, _)| i)
            .collect();
        (max, indices)
    }
}
