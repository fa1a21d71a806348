//! One table row per coin, plus the display strings it is rendered from.

use api::coin::Coin;
use api::number_format::format_grouped;
use api::number_format::format_percent_change;
use api::number_format::NumberLocale;
use dioxus::prelude::*;

/// Shown for a numeric field the upstream left empty.
const NO_VALUE: &str = "-";

/// Column headings, in render order.
pub const COLUMN_TITLES: [&str; 8] = [
    "Rank",
    "Coin",
    "Price (USD)",
    "Market Cap (USD)",
    "VWAP (24Hr)",
    "Supply",
    "Volume (24Hr)",
    "Change (24Hr)",
];

/// A coin with every cell already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRowView {
    pub id: String,
    pub rank: String,
    pub icon_url: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub vwap: String,
    pub supply: String,
    pub volume: String,
    pub change: String,
}

impl CoinRowView {
    pub fn new(coin: &Coin, locale: NumberLocale) -> Self {
        let grouped =
            |v: Option<f64>| v.map_or_else(|| NO_VALUE.to_string(), |v| format_grouped(v, locale));

        Self {
            id: coin.id.clone(),
            rank: coin.rank.to_string(),
            icon_url: coin.icon_url.clone(),
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            price: grouped(coin.price_usd),
            market_cap: grouped(coin.market_cap_usd),
            vwap: grouped(coin.vwap_24hr),
            supply: grouped(coin.supply),
            volume: grouped(coin.volume_usd_24hr),
            change: coin
                .change_percent_24hr
                .map_or_else(|| NO_VALUE.to_string(), format_percent_change),
        }
    }
}

/// Icon, bold name and muted symbol side by side.
#[component]
fn CoinIdentity(icon_url: String, name: String, symbol: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            img {
                src: "{icon_url}",
                alt: "{symbol}",
                width: "36",
                height: "36",
            }
            div {
                style: "display: flex; flex-direction: column;",
                strong { "{name}" }
                small {
                    style: "color: var(--pico-muted-color);",
                    "{symbol}"
                }
            }
        }
    }
}

#[component]
pub fn CoinRow(row: CoinRowView) -> Element {
    rsx! {
        tr {
            td { "{row.rank}" }
            td {
                CoinIdentity {
                    icon_url: row.icon_url.clone(),
                    name: row.name.clone(),
                    symbol: row.symbol.clone(),
                }
            }
            td { "{row.price}" }
            td { "{row.market_cap}" }
            td { "{row.vwap}" }
            td { "{row.supply}" }
            td { "{row.volume}" }
            td { "{row.change}" }
        }
    }
}
