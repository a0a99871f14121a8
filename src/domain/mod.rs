//! Domain layer - Cards and the card store

pub mod card;
pub mod store;

pub use card::Card;
pub use store::{AddOutcome, CardStore, Verdict};
