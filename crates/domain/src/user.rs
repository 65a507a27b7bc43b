//! Normalized user profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, ProviderResult};

/// Normalized user record mapped from the upstream resource payload.
///
/// Only `id` must be present upstream; every other field is extracted
/// best-effort at decode time and absent when the upstream omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Upstream account identifier.
    pub id: String,
    /// Display name, mapped from the upstream `name` field.
    pub nickname: Option<String>,
    /// Email address, when the upstream exposes one.
    pub email: Option<String>,
    /// Login name, mapped from the upstream `username` field.
    pub name: Option<String>,
    /// Avatar URL, mapped from the upstream `avatar_url` field.
    pub avatar: Option<String>,
    /// Untransformed resource payload for callers needing extra fields.
    pub raw: Value,
}

impl UserProfile {
    /// Maps a resource-endpoint payload into the normalized profile.
    ///
    /// The upstream serves `id` as either a JSON string or a number;
    /// numbers are rendered as their decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Decode`] when the payload has no usable
    /// `id`.
    pub fn from_resource(raw: Value) -> ProviderResult<Self> {
        let id = match raw.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(ProviderError::Decode {
                    message: "user resource is missing required id field".to_string(),
                });
            }
        };

        Ok(Self {
            id,
            nickname: string_field(&raw, "name"),
            email: string_field(&raw, "email"),
            name: string_field(&raw, "username"),
            avatar: string_field(&raw, "avatar_url"),
            raw,
        })
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(String::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn maps_the_documented_field_table() {
        let raw = json!({
            "id": "42",
            "name": "alice",
            "username": "alice01",
            "email": "a@x.com",
            "avatar_url": "http://x/a.png"
        });
        let user = UserProfile::from_resource(raw.clone()).unwrap();

        assert_eq!(user.id, "42");
        assert_eq!(user.nickname.as_deref(), Some("alice"));
        assert_eq!(user.name.as_deref(), Some("alice01"));
        assert_eq!(user.email.as_deref(), Some("a@x.com"));
        assert_eq!(user.avatar.as_deref(), Some("http://x/a.png"));
        assert_eq!(user.raw, raw);
    }

    #[test]
    fn numeric_id_is_rendered_as_string() {
        let user = UserProfile::from_resource(json!({"id": 42, "name": "alice"})).unwrap();
        assert_eq!(user.id, "42");
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let user = UserProfile::from_resource(json!({"id": "7"})).unwrap();
        assert!(user.nickname.is_none());
        assert!(user.email.is_none());
        assert!(user.name.is_none());
        assert!(user.avatar.is_none());
    }

    #[test]
    fn missing_id_is_a_decode_error() {
        let err = UserProfile::from_resource(json!({"name": "alice"})).unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
    }

    #[test]
    fn null_id_is_a_decode_error() {
        let err = UserProfile::from_resource(json!({"id": null})).unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
    }
}
