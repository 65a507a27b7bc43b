//! Provider endpoint configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name this provider registers under in a multi-provider host.
pub const PROVIDER_NAME: &str = "thebizark";

/// Path of the account-organizations resource.
///
/// Fixed by the upstream API; intentionally not part of the override
/// surface.
pub const ORGANIZATIONS_PATH: &str = "/oapi/v1/account/organizations";

const DEFAULT_ENDPOINT: &str = "http://dbp.thebizark.com";
const DEFAULT_AUTHORIZE_PATH: &str = "/oauth/authorize";
const DEFAULT_TOKEN_PATH: &str = "/oauth/access_token";
const DEFAULT_RESOURCE_PATH: &str = "/oapi/v1/resource";

/// Override map accepted at construction time.
///
/// Known keys replace the matching [`ProviderConfig`] field; unknown keys
/// are kept in [`ProviderConfig::extra`] so hosts can carry
/// provider-specific settings without a code change here.
pub type ConfigOverrides = BTreeMap<String, String>;

/// Endpoint and credential configuration for the Thebizark provider.
///
/// Immutable after construction except through
/// [`ProviderConfig::apply_overrides`]. Endpoint URLs are built by plain
/// concatenation of `endpoint` and the path fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the identity service.
    pub endpoint: String,
    /// Path of the authorization endpoint, appended to `endpoint`.
    pub authorize_path: String,
    /// Path of the token endpoint, appended to `endpoint`.
    pub token_path: String,
    /// Path of the user resource endpoint, appended to `endpoint`.
    pub resource_path: String,
    /// OAuth2 client identifier.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Redirect URL registered with the identity service.
    pub redirect_url: String,
    /// Requested scopes; omitted from the authorize URL when empty.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Separator used when joining `scopes` into the `scope` parameter.
    #[serde(default = "default_scope_separator")]
    pub scope_separator: String,
    /// Override keys this provider does not interpret, kept for the host.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

fn default_scope_separator() -> String {
    ",".to_string()
}

impl ProviderConfig {
    /// Creates a configuration with the default Thebizark endpoints.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            authorize_path: DEFAULT_AUTHORIZE_PATH.to_string(),
            token_path: DEFAULT_TOKEN_PATH.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
            scopes: Vec::new(),
            scope_separator: default_scope_separator(),
            extra: BTreeMap::new(),
        }
    }

    /// Merges an override map into this configuration.
    ///
    /// Accepts both the snake_case field names and the key spellings of
    /// the original caller-facing surface (`postfixAuthorize`,
    /// `clientId`, ...). Unrecognized keys land in [`Self::extra`].
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        for (key, value) in overrides {
            match key.as_str() {
                "endpoint" => self.endpoint = value,
                "authorize_path" | "postfixAuthorize" => self.authorize_path = value,
                "token_path" | "postfixAccessToken" => self.token_path = value,
                "resource_path" | "postfixResourceOwnerDetails" => self.resource_path = value,
                "client_id" | "clientId" => self.client_id = value,
                "client_secret" | "clientSecret" => self.client_secret = value,
                "redirect_url" | "redirectUrl" => self.redirect_url = value,
                "scope_separator" => self.scope_separator = value,
                "scopes" => {
                    self.scopes = value
                        .split(&self.scope_separator)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect();
                }
                _ => {
                    self.extra.insert(key, value);
                }
            }
        }
    }

    /// Builder form of [`Self::apply_overrides`].
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.apply_overrides(overrides);
        self
    }

    /// Builder for the requested scopes.
    #[must_use]
    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// URL of the authorization endpoint, without query parameters.
    #[must_use]
    pub fn authorize_url_base(&self) -> String {
        format!("{}{}", self.endpoint, self.authorize_path)
    }

    /// URL of the token endpoint.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}{}", self.endpoint, self.token_path)
    }

    /// URL of the user resource endpoint.
    #[must_use]
    pub fn resource_url(&self) -> String {
        format!("{}{}", self.endpoint, self.resource_path)
    }

    /// URL of the account-organizations endpoint.
    #[must_use]
    pub fn organizations_url(&self) -> String {
        format!("{}{ORGANIZATIONS_PATH}", self.endpoint)
    }
}
