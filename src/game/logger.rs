//! Leveled logger for human-readable match traces
//!
//! Separate from the authoritative event log: this is the observability
//! channel the presentation layer (or the CLI) reads. Supports stdout
//! output, in-memory capture for tests, or both.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Verbosity level for trace output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// No output
    Silent = 0,
    /// Outcome and warnings only
    Minimal = 1,
    /// Turns, phases, and resolved commands (default)
    #[default]
    Normal = 2,
    /// All resolution detail
    Verbose = 3,
}

/// Output destination for trace messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Print to stdout (default)
    #[default]
    Stdout,
    /// Capture to the in-memory buffer only
    Memory,
    /// Both stdout and the buffer
    Both,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
}

/// Centralized trace logger
#[derive(Debug)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_mode: OutputMode::default(),
            buffer: RefCell::new(Vec::new()),
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Capture to memory instead of printing (used by tests)
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    /// Outcome and warnings
    pub fn minimal(&self, message: &str) {
        self.emit(VerbosityLevel::Minimal, message);
    }

    /// Turn/phase/command trace
    pub fn normal(&self, message: &str) {
        self.emit(VerbosityLevel::Normal, message);
    }

    /// Full resolution detail
    pub fn verbose(&self, message: &str) {
        self.emit(VerbosityLevel::Verbose, message);
    }

    fn emit(&self, level: VerbosityLevel, message: &str) {
        if level > self.verbosity {
            return;
        }
        if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both) {
            println!("{message}");
        }
        if matches!(self.output_mode, OutputMode::Memory | OutputMode::Both) {
            self.buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
            });
        }
    }

    /// Snapshot of captured entries
    pub fn captured(&self) -> Vec<LogEntry> {
        self.buffer.borrow().clone()
    }

    pub fn captured_len(&self) -> usize {
        self.buffer.borrow().len()
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}
