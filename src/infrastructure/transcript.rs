//! Session transcript
//!
//! Records every line the session prints or reads, in order, so the `log`
//! action can dump the whole exchange to a file. Owned by one session;
//! independent sessions never share transcript state.

use crate::error::Result;
use chrono::Utc;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Record one line of the exchange.
    pub fn record(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Save the transcript to a file with a timestamped header. The
    /// transcript keeps accumulating afterwards; saving does not clear it.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let mut contents = format!("# cardbox session log, saved {}\n", Utc::now().to_rfc3339());
        for line in &self.lines {
            contents.push_str(line);
            contents.push('\n');
        }
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_records_lines_in_order() {
        let mut transcript = Transcript::new();
        transcript.record("Input the action");
        transcript.record("add");
        assert_eq!(transcript.lines(), &["Input the action", "add"]);
    }

    #[test]
    fn test_save_writes_header_and_all_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.log");

        let mut transcript = Transcript::new();
        transcript.record("The card:");
        transcript.record("dog");
        transcript.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# cardbox session log, saved "));
        assert!(contents.contains("The card:\n"));
        assert!(contents.contains("dog\n"));
    }

    #[test]
    fn test_save_does_not_clear_the_transcript() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.log");

        let mut transcript = Transcript::new();
        transcript.record("first");
        transcript.save_to(&path).unwrap();
        transcript.record("second");

        assert_eq!(transcript.lines().len(), 2);
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut a = Transcript::new();
        let b = Transcript::new();
        a.record("only in a");
        assert!(b.lines().is_empty());
    }
}
