//! Application layer - The interactive study session

pub mod session;

pub use session::{Action, Session};
