//! Configuration options for collections.
//!
//! [`CollectionOptions`] picks the [`DiagnosticSink`] a collection reports
//! errors to, and the category string attached to each report.
//!
//! ## Examples
//!
//! ```rust
//! use keyed_collection::{Collection, CollectionOptions};
//!
//! // Errors are sent to `tracing` under the "USERS" category
//! let options = CollectionOptions::tracing().with_category("USERS");
//! let users = Collection::with_options(options);
//! assert_eq!(users.options().category, "USERS");
//! ```

use crate::sink::{DiagnosticSink, NoopSink, TracingSink};
use std::fmt;
use std::sync::Arc;

/// Category used when none is configured.
pub const DEFAULT_CATEGORY: &str = "COLLECTION";

/// Configuration options for a [`Collection`](crate::Collection).
///
/// Collections derived from another one (`from`, `map`, `filter`, `reverse`,
/// `flatten`) inherit its options.
#[derive(Clone)]
pub struct CollectionOptions {
    pub sink: Arc<dyn DiagnosticSink>,
    pub category: String,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        CollectionOptions {
            sink: Arc::new(NoopSink),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl fmt::Debug for CollectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionOptions")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl CollectionOptions {
    /// Creates default options (no-op sink, `"COLLECTION"` category).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::CollectionOptions;
    ///
    /// let options = CollectionOptions::new();
    /// assert_eq!(options.category, "COLLECTION");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that report to [`TracingSink`].
    #[must_use]
    pub fn tracing() -> Self {
        CollectionOptions {
            sink: Arc::new(TracingSink),
            ..Default::default()
        }
    }

    /// Sets the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Sets the category attached to every diagnostic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::CollectionOptions;
    ///
    /// let options = CollectionOptions::new().with_category("CART");
    /// assert_eq!(options.category, "CART");
    /// ```
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
