//! Console Logging
//!
//! Installs the rolling logger with a sink that writes to the browser console.

use rolling_logger::{LogEntry, LogSink, LoggerConfig};
use log::{Level, LevelFilter};
use wasm_bindgen::JsValue;

/// Writes each record to `console.{error,warn,info,debug}` by level
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_string());
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

pub fn init() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let config = LoggerConfig { level, ..Default::default() };
    if let Err(e) = rolling_logger::init(config, ConsoleSink) {
        web_sys::console::warn_1(&format!("[LOG] Logger already installed: {}", e).into());
    }
}
