//! Progress line on stderr
//!
//! Advances once per completed lookup. Safe to share across the lookup
//! futures; when disabled it only counts.

use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug)]
pub struct Progress {
    label: String,
    total: usize,
    done: AtomicUsize,
    visible: bool,
}

impl Progress {
    /// Progress line that is drawn only when stderr is a terminal
    pub fn new(label: impl Into<String>, total: usize) -> Self {
        Self {
            label: label.into(),
            total,
            done: AtomicUsize::new(0),
            visible: std::io::stderr().is_terminal(),
        }
    }

    /// Progress that counts but never draws
    pub fn hidden(total: usize) -> Self {
        Self {
            label: String::new(),
            total,
            done: AtomicUsize::new(0),
            visible: false,
        }
    }

    pub fn advance(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.visible {
            let frame = SPINNER[done % SPINNER.len()];
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\r{} {} {}/{}", frame, self.label, done, self.total);
            let _ = stderr.flush();
        }
    }

    pub fn position(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }

    /// Clear the progress line
    pub fn finish(&self) {
        if self.visible {
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\r\x1b[2K");
            let _ = stderr.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_counts() {
        let progress = Progress::hidden(3);
        progress.advance();
        progress.advance();
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
