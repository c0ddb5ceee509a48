// --- File: crates/connectify_booker/src/name_field.rs ---
//! Editability rule for the booker's "name" input.
//!
//! When an attendee reschedules, the booking form is pre-filled from the existing
//! booking and the name is locked. The one exception: the form asks for first and
//! last name separately, the last name is mandatory, and the stored response has no
//! last name. The field then stays editable so the attendee can complete it.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Variant that renders separate first/last name inputs.
pub const FIRST_AND_LAST_NAME_VARIANT: &str = "firstAndLastName";
/// Variant that renders a single full-name input.
pub const FULL_NAME_VARIANT: &str = "fullName";
/// Sub-field holding the last name inside [`FIRST_AND_LAST_NAME_VARIANT`].
pub const LAST_NAME_FIELD: &str = "lastName";

/// One sub-field of a variant, e.g. `{ "name": "lastName", "required": true }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SubFieldSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl SubFieldSpec {
    /// An absent flag means optional.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VariantDefinition {
    #[serde(default)]
    pub fields: Vec<SubFieldSpec>,
}

impl VariantDefinition {
    /// First sub-field called `name`, in declaration order.
    pub fn find_field(&self, name: &str) -> Option<&SubFieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VariantsConfig {
    #[serde(default)]
    pub variants: HashMap<String, VariantDefinition>,
}

/// Form-schema entry of the name field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default)]
    pub variants_config: VariantsConfig,
}

impl FieldDescriptor {
    pub fn variant(&self, name: &str) -> Option<&VariantDefinition> {
        self.variants_config.variants.get(name)
    }

    /// Whether the `firstAndLastName` variant declares a mandatory `lastName` sub-field.
    ///
    /// A missing variant or a missing sub-field both count as "not required".
    pub fn is_last_name_required(&self) -> bool {
        self.variant(FIRST_AND_LAST_NAME_VARIANT)
            .and_then(|variant| variant.find_field(LAST_NAME_FIELD))
            .is_some_and(SubFieldSpec::is_required)
    }

    fn uses_first_and_last_name(&self) -> bool {
        self.variant.as_deref() == Some(FIRST_AND_LAST_NAME_VARIANT)
    }
}

/// Current value bound to the "name" response.
///
/// On the wire this is either a bare string or `{ "firstName": ..., "lastName": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum NameResponse {
    Structured(FullName),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl<'de> Deserialize<'de> for FullName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // a derived impl would also accept `["John", "Doe"]`
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Fields {
            #[serde(default)]
            first_name: String,
            #[serde(default)]
            last_name: String,
        }

        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let fields: Fields = serde_json::from_value(serde_json::Value::Object(object))
            .map_err(serde::de::Error::custom)?;
        Ok(FullName {
            first_name: fields.first_name,
            last_name: fields.last_name,
        })
    }
}

impl NameResponse {
    pub fn structured(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        NameResponse::Structured(FullName {
            first_name: first_name.into(),
            last_name: last_name.into(),
        })
    }

    /// The last name, only for structured responses.
    pub fn last_name(&self) -> Option<&str> {
        match self {
            NameResponse::Structured(name) => Some(name.last_name.as_str()),
            NameResponse::Text(_) => None,
        }
    }

    fn has_last_name(&self) -> bool {
        self.last_name().is_some_and(|last_name| !last_name.is_empty())
    }
}

impl Default for NameResponse {
    fn default() -> Self {
        NameResponse::Text(String::new())
    }
}

impl From<&str> for NameResponse {
    fn from(name: &str) -> Self {
        NameResponse::Text(name.to_string())
    }
}

/// Decides whether the name input renders read-only.
///
/// Outside a reschedule, or once the attendee has typed into the field, the field is
/// editable. Otherwise it is read-only unless the `firstAndLastName` variant is active,
/// its `lastName` sub-field is required, and `name_response` carries no non-empty last
/// name.
pub fn resolve(
    field: &FieldDescriptor,
    name_response: &NameResponse,
    is_reschedule: bool,
    is_name_field_dirty: bool,
) -> bool {
    if !is_reschedule {
        return false;
    }
    // user edits are never locked again
    if is_name_field_dirty {
        return false;
    }

    let last_name_required = field.is_last_name_required();

    if !field.uses_first_and_last_name() {
        return true;
    }
    if !last_name_required {
        return true;
    }
    name_response.has_last_name()
}
