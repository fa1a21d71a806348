use super::COINCAP_API_BASE;
use super::COINCAP_API_KEY;
use super::COINCAP_ICON_BASE;
use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_API_BASE: &str = "https://api.coincap.io/v2";
pub const DEFAULT_ICON_BASE: &str = "https://assets.coincap.io/assets/icons";

/// Where market data and coin icons are loaded from.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EndpointPrefs {
    api_base: String,
    icon_base: String,
    /// Sent as a bearer token when present.
    #[serde(skip_serializing)]
    api_key: Option<String>,
}

impl EndpointPrefs {
    pub fn new(api_base: impl Into<String>, icon_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_base(api_base.into()),
            icon_base: trim_base(icon_base.into()),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Reads `COINCAP_API_BASE`, `COINCAP_ICON_BASE` and `COINCAP_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_vars(super::env_var)
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut prefs = Self::new(
            var(COINCAP_API_BASE).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            var(COINCAP_ICON_BASE).unwrap_or_else(|| DEFAULT_ICON_BASE.to_string()),
        );
        prefs.api_key = var(COINCAP_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        prefs
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Icon host base URL without a trailing slash.
    pub fn icon_base(&self) -> &str {
        &self.icon_base
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Default for EndpointPrefs {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_ICON_BASE)
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
