use super::display_preference::DisplayPreference;
use super::endpoint::EndpointPrefs;
use super::LOG_LEVEL;
use dioxus_logger::tracing::Level;
use std::str::FromStr;

/// Represents all settings, resolved once at start-up.
#[derive(Clone, PartialEq, Debug)]
pub struct UserPrefs {
    endpoint: EndpointPrefs,
    display_preference: DisplayPreference,
    log_level: Level,
}

impl UserPrefs {
    pub fn new(endpoint: EndpointPrefs, display_preference: DisplayPreference) -> Self {
        Self {
            endpoint,
            display_preference,
            log_level: Level::INFO,
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(super::env_var)
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            endpoint: EndpointPrefs::from_vars(&var),
            display_preference: DisplayPreference::from_vars(&var),
            log_level: log_level_from_vars(&var),
        }
    }

    pub fn endpoint(&self) -> &EndpointPrefs {
        &self.endpoint
    }

    pub fn display_preference(&self) -> &DisplayPreference {
        &self.display_preference
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Reads `LOG_LEVEL` (`trace`, `debug`, `info`, `warn`, `error`), defaulting to `info`.
///
/// Separate from [`UserPrefs::from_env`] so the launcher can set up logging
/// before anything else runs.
pub fn log_level() -> Level {
    log_level_from_vars(super::env_var)
}

fn log_level_from_vars(var: impl Fn(&str) -> Option<String>) -> Level {
    var(LOG_LEVEL)
        .and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::INFO)
}
