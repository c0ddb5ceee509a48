// --- File: crates/connectify_app_store/src/zapier.rs ---
//! Zapier setup page data.

use connectify_common::services::AppKeysSource;
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub const ZAPIER_SLUG: &str = "zapier";

/// Props rendered by the Zapier setup page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ZapierSetupProps {
    /// Invite link to the private Zapier integration, empty when not configured
    pub invite_link: String,
}

/// Loads the setup props from the stored Zapier keys.
///
/// A missing or non-string `invite_link` key yields an empty link.
pub async fn setup_props<S>(source: &S) -> Result<ZapierSetupProps, S::Error>
where
    S: AppKeysSource + ?Sized,
{
    let keys = source.app_keys(ZAPIER_SLUG).await?;
    let invite_link = keys
        .get("invite_link")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string();

    Ok(ZapierSetupProps { invite_link })
}
