//! Diagnostic sinks.
//!
//! A collection reports every error to a [`DiagnosticSink`] right before
//! returning it. The sink is write-only: nothing it does can change the error
//! the caller receives.
//!
//! Two sinks ship with the crate:
//!
//! - [`NoopSink`]: discards everything (the default)
//! - [`TracingSink`]: forwards to the [`tracing`] crate
//!
//! ## Examples
//!
//! ```rust
//! use keyed_collection::{Collection, CollectionOptions, DiagnosticSink, Level};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Default)]
//! struct Recorder(Mutex<Vec<String>>);
//!
//! impl DiagnosticSink for Recorder {
//!     fn write(&self, level: Level, category: &str, message: &str) {
//!         self.0.lock().unwrap().push(format!("[{}] {}: {}", level, category, message));
//!     }
//! }
//!
//! let recorder = Arc::new(Recorder::default());
//! let collection = Collection::with_options(CollectionOptions::new().with_sink(recorder.clone()));
//! assert!(collection.get("nope").is_err());
//!
//! assert_eq!(
//!     recorder.0.lock().unwrap()[0],
//!     "[error] COLLECTION: The key nope does not exist in the collection. Code : 101"
//! );
//! ```

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Returns the lowercase name of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives diagnostics emitted by a collection.
pub trait DiagnosticSink: Send + Sync {
    /// Records one message. Must not panic.
    fn write(&self, level: Level, category: &str, message: &str);
}

/// A sink that discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn write(&self, _level: Level, _category: &str, _message: &str) {}
}

/// A sink that emits each message as a `tracing` event.
///
/// The level maps onto the matching `tracing` level and the category is
/// recorded as the `category` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write(&self, level: Level, category: &str, message: &str) {
        match level {
            Level::Debug => tracing::debug!(category, "{}", message),
            Level::Info => tracing::info!(category, "{}", message),
            Level::Warning => tracing::warn!(category, "{}", message),
            Level::Error => tracing::error!(category, "{}", message),
        }
    }
}
