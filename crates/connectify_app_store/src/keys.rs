// --- File: crates/connectify_app_store/src/keys.rs ---
use connectify_common::services::{AppKeysSource, BoxFuture};
use connectify_config::AppConfig;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

use crate::error::AppStoreError;

/// App keys read from the `app_store.apps` section of the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigAppKeys {
    apps: HashMap<String, Value>,
}

impl ConfigAppKeys {
    pub fn new(apps: HashMap<String, Value>) -> Self {
        Self { apps }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let apps = config
            .app_store
            .as_ref()
            .map(|app_store| app_store.apps.clone())
            .unwrap_or_default();
        Self::new(apps)
    }

    fn lookup(&self, slug: &str) -> Result<Value, AppStoreError> {
        match self.apps.get(slug) {
            None => {
                debug!("No keys stored for app '{}'", slug);
                Ok(Value::Object(Map::new()))
            }
            Some(keys @ Value::Object(_)) => Ok(keys.clone()),
            Some(_) => Err(AppStoreError::InvalidKeys(slug.to_string())),
        }
    }
}

impl AppKeysSource for ConfigAppKeys {
    type Error = AppStoreError;

    fn app_keys(&self, slug: &str) -> BoxFuture<'_, Value, Self::Error> {
        let result = self.lookup(slug);
        Box::pin(async move { result })
    }
}
