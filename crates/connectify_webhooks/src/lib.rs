// --- File: crates/connectify_webhooks/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
#[cfg(all(test, feature = "openapi"))]
mod doc_test;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod repository;
pub mod routes;

pub use error::WebhookError;
pub use logic::WebhookService;
pub use repository::{InMemoryWebhookRepository, WebhookRepository};
pub use routes::routes;
