//! Infrastructure layer - File I/O and configuration

pub mod config;
pub mod deck_file;
pub mod transcript;

pub use config::Config;
pub use deck_file::{export_deck, import_deck};
pub use transcript::Transcript;
