use std::io::Write;
use std::sync::Mutex;

use terminal_size::{Width, terminal_size};

use crate::console::ansi;

/// An append-only consumer of rendered console lines. The console holds a
/// reference to its sinks; it never opens, flushes, or closes them.
pub trait Sink: Send + Sync {
    /// Append `text` followed by a line terminator.
    fn write_line(&self, text: &str);

    /// Erase an unterminated in-progress line (e.g. a `\r`-based spinner
    /// written by another part of the program). Default: nothing to erase.
    fn clear_line(&self) {}

    /// Column count when the sink is a real terminal.
    fn columns(&self) -> Option<usize> {
        None
    }
}

#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, text: &str) {
        println!("{text}");
    }

    fn clear_line(&self) {
        print!("{}{}", ansi::CARRIAGE_RETURN, ansi::CLEAR_LINE);
        let _ = std::io::stdout().flush();
    }

    fn columns(&self) -> Option<usize> {
        terminal_size().map(|(Width(w), _)| w as usize)
    }
}

#[derive(Debug, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, text: &str) {
        eprintln!("{text}");
    }

    fn clear_line(&self) {
        eprint!("{}{}", ansi::CARRIAGE_RETURN, ansi::CLEAR_LINE);
        let _ = std::io::stderr().flush();
    }
}

/// In-memory sink that records everything written to it. Used by tests and
/// by embedders that want to capture output instead of printing it.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
    clears: Mutex<usize>,
    columns: Option<usize>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer that reports a fixed terminal width.
    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns: Some(columns),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// How many times `clear_line` was invoked.
    pub fn clear_count(&self) -> usize {
        self.clears.lock().map(|c| *c).unwrap_or(0)
    }
}

impl Sink for BufferSink {
    fn write_line(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_string());
        }
    }

    fn clear_line(&self) {
        if let Ok(mut clears) = self.clears.lock() {
            *clears += 1;
        }
    }

    fn columns(&self) -> Option<usize> {
        self.columns
    }
}
