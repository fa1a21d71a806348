//! This crate contains the market data model, the CoinCap client and the
//! formatting rules shared by the user interface.

pub mod coin;
pub mod market_providers;
pub mod number_format;
pub mod page;
pub mod prefs;

use thiserror::Error;

/// Everything that can go wrong while fetching one page of assets.
///
/// The table collapses all variants into a single "log and keep the last good
/// page" path; the distinction only matters for the log line.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, CORS, offline...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The body was not a valid assets envelope.
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}
