// --- File: crates/connectify_app_store/src/error.rs ---
use connectify_common::{config_error, ConnectifyError, HttpStatusCode};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppStoreError {
    #[error("Keys of app '{0}' must be a JSON object")]
    InvalidKeys(String),
}

impl From<AppStoreError> for ConnectifyError {
    fn from(err: AppStoreError) -> Self {
        config_error(err)
    }
}

impl HttpStatusCode for AppStoreError {
    fn status_code(&self) -> u16 {
        match self {
            AppStoreError::InvalidKeys(_) => 500,
        }
    }
}
