//! cardbox - Terminal flashcard study application
//!
//! A command-line flashcard tool that stores term/definition pairs, quizzes
//! the user on random cards, tracks per-card wrong-answer counts and persists
//! the deck as a JSON file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CardboxError;
