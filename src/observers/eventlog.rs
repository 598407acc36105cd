//! Event logging observer.
//!
//! Records every state update it sees: an ordered history, per-value
//! occurrence counts, and optionally a line-per-event file sink. Sink
//! failures are contained here — they are counted and logged, and `notify`
//! always returns normally, because a notification pass has no recovery
//! semantics for a failing observer.

use crate::subject::Observer;
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Records state updates in memory and optionally to a file.
#[derive(Default)]
pub struct EventLog {
    history: Vec<i32>,
    counts: FxHashMap<i32, u64>,
    sink: Option<Box<dyn Write>>,
    write_errors: u64,
}

impl EventLog {
    /// In-memory log with no file sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log that mirrors every event as a line appended to `path`.
    pub fn with_sink(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Failed to open event log file {}: {}", path.display(), e))?;
        Ok(Self {
            sink: Some(Box::new(BufWriter::new(file))),
            ..Self::default()
        })
    }

    /// Log that mirrors every event to an arbitrary writer.
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            sink: Some(writer),
            ..Self::default()
        }
    }

    /// All recorded values, oldest first.
    pub fn history(&self) -> &[i32] {
        &self.history
    }

    /// How many times `value` has been recorded.
    pub fn count_of(&self, value: i32) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of sink writes that failed. Failures never escape `notify`.
    pub fn write_errors(&self) -> u64 {
        self.write_errors
    }

    fn write_entry(&mut self, value: i32) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let result = writeln!(sink, "state {value}").and_then(|_| sink.flush());
        if let Err(e) = result {
            self.write_errors += 1;
            warn!("[eventlog] failed to write event to sink: {e}");
        }
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog")
            .field("history", &self.history.len())
            .field("has_sink", &self.sink.is_some())
            .field("write_errors", &self.write_errors)
            .finish()
    }
}

impl Observer for EventLog {
    fn notify(&mut self, value: i32) {
        self.history.push(value);
        *self.counts.entry(value).or_insert(0) += 1;
        self.write_entry(value);
        info!("[eventlog] event logged with state {value}");
    }
}
