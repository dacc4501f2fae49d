pub mod ansi;
mod format;
pub mod sink;
mod table;
#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive};

use crate::console::sink::Sink;
use crate::errors::Result;

/// Severity of a rendered line. `Warn` and `Error` route to the error
/// sink; `Log` and `Info` to the output sink.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIterDerive, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Log,
    Info,
    Warn,
    Error,
}

/// Post-processing hook applied to every rendered line (after indentation)
/// before it reaches a sink.
pub type LineFormatter = Box<dyn Fn(Level, &str) -> String + Send + Sync>;

/// Indentation marker repeated once per open group.
const GROUP_MARKER: &str = "> ";
/// Sentinel label for `count()` calls without one.
const NO_COUNT_LABEL: &str = "<no label>";
/// Sentinel label for `time()`/`time_end()` calls without one.
const DEFAULT_TIMER_LABEL: &str = "default";
/// Table sizing target when the output sink is not a real terminal.
const DEFAULT_WIDTH: usize = 80;

/// A stateful console-output formatter. Wraps a pair of sinks and layers
/// leveled logging, nested indentation groups, labeled occurrence counters,
/// and a width-constrained table renderer on top of them.
///
/// One instance per caller; there is no process-wide singleton. All state
/// lives in the instance, so concurrent callers sharing one must serialize
/// externally (a single mutex around the instance is enough, no call ever
/// blocks).
pub struct FormattingConsole {
    output: Arc<dyn Sink>,
    error: Arc<dyn Sink>,
    group_level: usize,
    counts: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
    formatter: Option<LineFormatter>,
    output_width: usize,
}

impl FormattingConsole {
    /// Wrap a pair of sinks. The table sizing width is sampled once here
    /// from the output sink, defaulting to 80 when it reports none.
    pub fn new(output: Arc<dyn Sink>, error: Arc<dyn Sink>) -> Self {
        let output_width = output.columns().unwrap_or(DEFAULT_WIDTH);
        Self {
            output,
            error,
            group_level: 0,
            counts: HashMap::new(),
            timers: HashMap::new(),
            formatter: None,
            output_width,
        }
    }

    /// Console over the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(Arc::new(sink::StdoutSink), Arc::new(sink::StderrSink))
    }

    /// Install a line formatter; every subsequent line passes through it.
    pub fn with_formatter(mut self, formatter: LineFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    // ---- Leveled logging ----------------------------------------------

    pub fn log(&self, args: &[Value]) -> Result<()> {
        self.leveled(Level::Log, args)
    }

    pub fn info(&self, args: &[Value]) -> Result<()> {
        self.leveled(Level::Info, args)
    }

    pub fn warn(&self, args: &[Value]) -> Result<()> {
        self.leveled(Level::Warn, args)
    }

    pub fn error(&self, args: &[Value]) -> Result<()> {
        self.leveled(Level::Error, args)
    }

    /// Synonym for [`error`](Self::error).
    pub fn exception(&self, args: &[Value]) -> Result<()> {
        self.error(args)
    }

    /// Same formatting and routing as `log`; the call site is the only
    /// trace context an append-only console can offer.
    pub fn trace(&self, args: &[Value]) -> Result<()> {
        self.log(args)
    }

    /// Emit the compact structural encoding of a single value.
    pub fn dir(&self, value: &Value) -> Result<()> {
        let encoded = format::encode(value)?;
        self.emit(Level::Log, &encoded);
        Ok(())
    }

    // ---- Indentation groups -------------------------------------------

    /// Open a group. A supplied label is emitted as a `Log` line at the
    /// new, already-incremented indentation level.
    pub fn group(&mut self, label: Option<&str>) {
        self.group_level += 1;
        if let Some(label) = label {
            self.emit(Level::Log, label);
        }
    }

    /// Identical to [`group`](Self::group): output is append-only text,
    /// so collapsing is a display hint with nothing to act on.
    pub fn group_collapsed(&mut self, label: Option<&str>) {
        self.group(label);
    }

    /// Close the innermost group. Unmatched calls clamp at level zero.
    pub fn group_end(&mut self) {
        self.group_level = self.group_level.saturating_sub(1);
    }

    pub fn group_level(&self) -> usize {
        self.group_level
    }

    // ---- Counters ------------------------------------------------------

    /// Bump the counter for `label` (sentinel `<no label>` when omitted)
    /// and emit `"<label>: <count>"`. Counters never reset.
    pub fn count(&mut self, label: Option<&str>) {
        let key = label.unwrap_or(NO_COUNT_LABEL);
        let n = {
            let entry = self.counts.entry(key.to_string()).or_insert(0);
            *entry += 1;
            *entry
        };
        self.emit(Level::Log, &format!("{key}: {n}"));
    }

    // ---- Assertion -----------------------------------------------------

    /// Console-assert convention: logs the message when the assertion
    /// FAILS, emits nothing when it holds.
    pub fn assert(&self, assertion: bool, args: &[Value]) -> Result<()> {
        if assertion {
            return Ok(());
        }
        self.log(args)
    }

    // ---- Tables --------------------------------------------------------

    /// Render a sequence or keyed collection as a two-column table sized
    /// to the sampled output width. Any other input emits nothing.
    pub fn table(&self, value: &Value) -> Result<()> {
        if let Some(lines) = table::render(value, self.output_width)? {
            for line in &lines {
                self.emit(Level::Log, line);
            }
        }
        Ok(())
    }

    /// [`table`](Self::table) over any serializable value.
    pub fn table_of<T: Serialize>(&self, value: &T) -> Result<()> {
        self.table(&serde_json::to_value(value)?)
    }

    // ---- Timers --------------------------------------------------------

    /// Start a timer. An already-running label keeps its original start.
    pub fn time(&mut self, label: Option<&str>) {
        let key = label.unwrap_or(DEFAULT_TIMER_LABEL);
        self.timers
            .entry(key.to_string())
            .or_insert_with(Instant::now);
    }

    /// Stop a timer and emit `"<label>: <millis>ms"`. Unknown labels emit
    /// nothing.
    pub fn time_end(&mut self, label: Option<&str>) {
        let key = label.unwrap_or(DEFAULT_TIMER_LABEL);
        if let Some(start) = self.timers.remove(key) {
            let elapsed = start.elapsed().as_millis();
            self.emit(Level::Log, &format!("{key}: {elapsed}ms"));
        }
    }

    // ---- Miscellaneous -------------------------------------------------

    /// No-op: output is append-only and cannot be erased.
    pub fn clear(&self) {}

    /// Always `None`: rendered output is written through, never retained.
    pub fn buffer(&self) -> Option<String> {
        None
    }

    pub fn output_width(&self) -> usize {
        self.output_width
    }

    // ---- Internals -----------------------------------------------------

    fn leveled(&self, level: Level, args: &[Value]) -> Result<()> {
        let message = format::format_message(args)?;
        self.emit(level, &message);
        Ok(())
    }

    /// Indent, run the formatter hook, clear any in-progress partial line
    /// on the target sink, then write.
    fn emit(&self, level: Level, message: &str) {
        let line = format!("{}{message}", GROUP_MARKER.repeat(self.group_level));
        let line = match &self.formatter {
            Some(formatter) => formatter(level, &line),
            None => line,
        };
        let sink = self.sink_for(level);
        sink.clear_line();
        sink.write_line(&line);
    }

    fn sink_for(&self, level: Level) -> &dyn Sink {
        match level {
            Level::Warn | Level::Error => self.error.as_ref(),
            Level::Log | Level::Info => self.output.as_ref(),
        }
    }
}

impl fmt::Debug for FormattingConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattingConsole")
            .field("group_level", &self.group_level)
            .field("counts", &self.counts)
            .field("output_width", &self.output_width)
            .finish()
    }
}
