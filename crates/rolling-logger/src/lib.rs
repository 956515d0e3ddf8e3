//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a bounded ring
//! buffer and forwards every record to a [`LogSink`] (the browser console
//! in the web app, a collector in tests).
//!
//! The buffer is for host and test inspection through
//! [`RollingLogger::recent`]; set `capacity` to 0 to skip it entirely.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

/// One captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Output side of the logger
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &LogEntry);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Records above this level are dropped before reaching the buffer
    pub level: LevelFilter,
    /// Ring buffer size; the oldest record is evicted when full
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

pub struct RollingLogger {
    config: LoggerConfig,
    buffer: Mutex<VecDeque<LogEntry>>,
    sink: Box<dyn LogSink>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig, sink: impl LogSink + 'static) -> Self {
        Self {
            config,
            buffer: Mutex::new(VecDeque::with_capacity(config.capacity)),
            sink: Box::new(sink),
        }
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, entry: LogEntry) {
        if self.config.capacity == 0 {
            return;
        }
        // A poisoned buffer only loses history; the sink still gets the record.
        if let Ok(mut buffer) = self.buffer.lock() {
            while buffer.len() >= self.config.capacity {
                buffer.pop_front();
            }
            buffer.push_back(entry);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        self.sink.write(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install a [`RollingLogger`] as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(
    config: LoggerConfig,
    sink: impl LogSink + 'static,
) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(config, sink)));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(logger)
}
