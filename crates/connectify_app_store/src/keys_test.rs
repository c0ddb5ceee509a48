#[cfg(test)]
mod tests {
    use crate::error::AppStoreError;
    use crate::keys::ConfigAppKeys;
    use crate::zapier::{setup_props, ZapierSetupProps};
    use connectify_common::services::AppKeysSource;
    use connectify_common::{ConnectifyError, HttpStatusCode};
    use connectify_config::{AppConfig, AppStoreConfig};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn keys_with(slug: &str, value: Value) -> ConfigAppKeys {
        ConfigAppKeys::new(HashMap::from([(slug.to_string(), value)]))
    }

    #[tokio::test]
    async fn test_unknown_app_has_empty_keys() {
        let keys = ConfigAppKeys::default();
        assert_eq!(keys.app_keys("zapier").await.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_keys_read_from_config() {
        let config = AppConfig {
            use_app_store: true,
            app_store: Some(AppStoreConfig {
                apps: HashMap::from([(
                    "zapier".to_string(),
                    json!({ "invite_link": "https://zapier.com/developer/public-invite/1" }),
                )]),
            }),
            ..AppConfig::default()
        };

        let keys = ConfigAppKeys::from_config(&config);
        assert_eq!(
            keys.app_keys("zapier").await.unwrap()["invite_link"],
            "https://zapier.com/developer/public-invite/1"
        );
    }

    #[tokio::test]
    async fn test_non_object_keys_are_rejected() {
        let keys = keys_with("zapier", json!("oops"));
        let err = keys.app_keys("zapier").await.unwrap_err();
        assert_eq!(err, AppStoreError::InvalidKeys("zapier".to_string()));
        assert_eq!(err.status_code(), 500);
        assert!(matches!(
            ConnectifyError::from(err),
            ConnectifyError::ConfigError(_)
        ));
    }

    #[tokio::test]
    async fn test_setup_props_use_invite_link() {
        let keys = keys_with("zapier", json!({ "invite_link": "https://invite" }));
        assert_eq!(
            setup_props(&keys).await.unwrap(),
            ZapierSetupProps {
                invite_link: "https://invite".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_setup_props_default_to_empty_link() {
        // unset secret marker resolves to null
        let keys = keys_with("zapier", json!({ "invite_link": null }));
        assert_eq!(setup_props(&keys).await.unwrap().invite_link, "");

        let keys = keys_with("zapier", json!({ "invite_link": 42 }));
        assert_eq!(setup_props(&keys).await.unwrap().invite_link, "");

        let keys = ConfigAppKeys::default();
        assert_eq!(setup_props(&keys).await.unwrap().invite_link, "");
    }

    #[test]
    fn test_setup_props_serialize_camel_case() {
        let props = ZapierSetupProps {
            invite_link: "https://invite".to_string(),
        };
        assert_eq!(
            serde_json::to_value(props).unwrap(),
            json!({ "inviteLink": "https://invite" })
        );
    }
}
