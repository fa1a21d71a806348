use super::LOAD_MORE_MODE;
use super::NUMBER_LOCALE;
use crate::number_format::NumberLocale;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// What "Load More" does with the rows already on screen.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LoadMoreMode {
    /// Show only the newest page.
    #[default]
    Replace,
    /// Concatenate the newest page onto the rows already shown.
    Append,
}

/// How the coin table presents its data.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct DisplayPreference {
    pub locale: NumberLocale,
    pub load_more: LoadMoreMode,
}

impl DisplayPreference {
    /// Reads `NUMBER_LOCALE` (`en-US`, `de-DE`, `fr-FR`, `de-CH`) and
    /// `LOAD_MORE_MODE` (`replace` or `append`).
    ///
    /// Unrecognised values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(super::env_var)
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let locale = var(NUMBER_LOCALE)
            .and_then(|s| NumberLocale::from_str(s.trim()).ok())
            .unwrap_or_default();
        let load_more = var(LOAD_MORE_MODE)
            .and_then(|s| LoadMoreMode::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self { locale, load_more }
    }
}
