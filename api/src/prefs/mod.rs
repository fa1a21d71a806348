//! Start-up configuration.
//!
//! Every setting has an in-code default and can be overridden by a variable.
//! Native builds read the process environment at start-up. A browser has no
//! process environment, so wasm builds use the values present when the crate
//! was compiled.

pub mod display_preference;
pub mod endpoint;
pub mod user_prefs;

pub const COINCAP_API_BASE: &str = "COINCAP_API_BASE";
pub const COINCAP_ICON_BASE: &str = "COINCAP_ICON_BASE";
pub const COINCAP_API_KEY: &str = "COINCAP_API_KEY";
pub const NUMBER_LOCALE: &str = "NUMBER_LOCALE";
pub const LOAD_MORE_MODE: &str = "LOAD_MORE_MODE";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Looks up a configuration variable. Empty values count as unset.
pub fn env_var(name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup(name: &str) -> Option<String> {
    let baked = match name {
        COINCAP_API_BASE => option_env!("COINCAP_API_BASE"),
        COINCAP_ICON_BASE => option_env!("COINCAP_ICON_BASE"),
        COINCAP_API_KEY => option_env!("COINCAP_API_KEY"),
        NUMBER_LOCALE => option_env!("NUMBER_LOCALE"),
        LOAD_MORE_MODE => option_env!("LOAD_MORE_MODE"),
        LOG_LEVEL => option_env!("LOG_LEVEL"),
        _ => None,
    };
    baked.map(str::to_string)
}
