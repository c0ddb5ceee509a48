// --- File: crates/connectify_common/src/services.rs ---
//! Service abstractions for collaborators outside this process.
//!
//! These traits decouple request handling from the concrete backends (config files,
//! databases, vendor APIs) so handlers can be tested against in-memory implementations.

use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Source of the stored keys of an installed third-party app.
///
/// Keys are free-form JSON objects; callers pick out the entries they understand.
pub trait AppKeysSource: Send + Sync {
    /// Error type returned by key lookups.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get the keys stored for the app identified by `slug`.
    ///
    /// An app without stored keys yields an empty JSON object.
    fn app_keys(&self, slug: &str) -> BoxFuture<'_, serde_json::Value, Self::Error>;
}
