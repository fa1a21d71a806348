//! The coin data model and its decoding from the CoinCap `/assets` payload.

use serde::de;
use serde::Deserialize;
use serde::Deserializer;

/// The JSON envelope returned by `GET /assets`.
///
/// Only `data` is consumed; other top level keys (e.g. `timestamp`) are ignored.
#[derive(Deserialize, Debug)]
pub struct AssetsEnvelope {
    pub data: Vec<CoinRecord>,
}

/// A single asset exactly as the upstream API describes it.
///
/// Numeric fields arrive as strings (`"43512.5510"`) and sometimes as `null`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CoinRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "deserialize_rank")]
    pub rank: u32,
    #[serde(rename = "priceUsd", default, deserialize_with = "deserialize_decimal")]
    pub price_usd: Option<f64>,
    #[serde(rename = "marketCapUsd", default, deserialize_with = "deserialize_decimal")]
    pub market_cap_usd: Option<f64>,
    #[serde(rename = "vwap24Hr", default, deserialize_with = "deserialize_decimal")]
    pub vwap_24hr: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub supply: Option<f64>,
    #[serde(rename = "volumeUsd24Hr", default, deserialize_with = "deserialize_decimal")]
    pub volume_usd_24hr: Option<f64>,
    #[serde(rename = "changePercent24Hr", default, deserialize_with = "deserialize_decimal")]
    pub change_percent_24hr: Option<f64>,
}

/// A coin ready for display: the upstream record plus its derived icon URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub price_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    pub vwap_24hr: Option<f64>,
    pub supply: Option<f64>,
    pub volume_usd_24hr: Option<f64>,
    pub change_percent_24hr: Option<f64>,
    pub icon_url: String,
}

impl Coin {
    pub fn from_record(record: CoinRecord, icon_base: &str) -> Self {
        let icon_url = icon_url(icon_base, &record.symbol);
        Self {
            id: record.id,
            name: record.name,
            symbol: record.symbol,
            rank: record.rank,
            price_usd: record.price_usd,
            market_cap_usd: record.market_cap_usd,
            vwap_24hr: record.vwap_24hr,
            supply: record.supply,
            volume_usd_24hr: record.volume_usd_24hr,
            change_percent_24hr: record.change_percent_24hr,
            icon_url,
        }
    }
}

impl AssetsEnvelope {
    /// Maps every record to a [`Coin`], preserving upstream order.
    pub fn into_coins(self, icon_base: &str) -> Vec<Coin> {
        self.data
            .into_iter()
            .map(|record| Coin::from_record(record, icon_base))
            .collect()
    }
}

/// Builds the icon URL for a ticker symbol: `{icon_base}/{symbol lowercased}@2x.png`.
pub fn icon_url(icon_base: &str, symbol: &str) -> String {
    format!(
        "{}/{}@2x.png",
        icon_base.trim_end_matches('/'),
        symbol.to_lowercase()
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(serde_json::Number),
}

/// Accepts `"12.5"`, `12.5` or `null`. A string that is not a number becomes `None`.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::Str(s)) => s.trim().parse::<f64>().ok(),
        Some(StringOrNumber::Num(n)) => n.as_f64(),
        None => None,
    })
}

fn deserialize_rank<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let rank = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s.trim().parse::<u32>().map_err(de::Error::custom)?,
        StringOrNumber::Num(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| de::Error::custom(format!("invalid rank {n}")))?,
    };
    if rank == 0 {
        return Err(de::Error::custom("rank must be positive"));
    }
    Ok(rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ICONS: &str = "https://assets.coincap.io/assets/icons";

    fn bitcoin() -> serde_json::Value {
        json!({
            "id": "bitcoin",
            "rank": "1",
            "symbol": "BTC",
            "name": "Bitcoin",
            "supply": "19650000.0000000000000000",
            "maxSupply": "21000000.0000000000000000",
            "marketCapUsd": "1234567890123.4567",
            "volumeUsd24Hr": "9876543210.12",
            "priceUsd": "62831.8530",
            "changePercent24Hr": "-3.456",
            "vwap24Hr": "63001.12",
            "explorer": "https://blockchain.info/"
        })
    }

    #[test]
    fn icon_url_lowercases_symbol() {
        assert_eq!(
            icon_url(ICONS, "BTC"),
            "https://assets.coincap.io/assets/icons/btc@2x.png"
        );
        assert_eq!(icon_url("https://icons.test/", "UsDt"), "https://icons.test/usdt@2x.png");
    }

    #[test]
    fn decodes_string_encoded_numbers() {
        let record: CoinRecord = serde_json::from_value(bitcoin()).unwrap();
        assert_eq!(record.rank, 1);
        assert_eq!(record.price_usd, Some(62831.853));
        assert_eq!(record.change_percent_24hr, Some(-3.456));
        assert_eq!(record.supply, Some(19_650_000.0));
    }

    #[test]
    fn null_and_missing_numbers_decode_to_none() {
        let mut value = bitcoin();
        value["vwap24Hr"] = serde_json::Value::Null;
        value.as_object_mut().unwrap().remove("supply");
        value["priceUsd"] = json!("not a number");

        let record: CoinRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.vwap_24hr, None);
        assert_eq!(record.supply, None);
        assert_eq!(record.price_usd, None);
        assert_eq!(record.market_cap_usd, Some(1234567890123.4567));
    }

    #[test]
    fn numeric_rank_is_accepted() {
        let mut value = bitcoin();
        value["rank"] = json!(12);
        let record: CoinRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.rank, 12);
    }

    #[test]
    fn zero_or_garbage_rank_is_rejected() {
        for rank in [json!("0"), json!("first"), json!(-4), json!(1.5)] {
            let mut value = bitcoin();
            value["rank"] = rank.clone();
            assert!(
                serde_json::from_value::<CoinRecord>(value).is_err(),
                "rank {rank} should be rejected"
            );
        }
    }

    #[test]
    fn one_bad_record_fails_the_whole_envelope() {
        let mut broken = bitcoin();
        broken.as_object_mut().unwrap().remove("symbol");
        let body = json!({ "data": [bitcoin(), broken], "timestamp": 1700000000000u64 });

        assert!(serde_json::from_value::<AssetsEnvelope>(body).is_err());
    }

    #[test]
    fn envelope_maps_to_coins_in_order() {
        let mut eth = bitcoin();
        eth["id"] = json!("ethereum");
        eth["rank"] = json!("2");
        eth["symbol"] = json!("ETH");
        eth["name"] = json!("Ethereum");
        let body = json!({ "data": [bitcoin(), eth], "timestamp": 1700000000000u64 });

        let envelope: AssetsEnvelope = serde_json::from_value(body).unwrap();
        let coins = envelope.into_coins(ICONS);

        assert_eq!(coins.len(), 2);
        assert_eq!(coins[0].id, "bitcoin");
        assert_eq!(coins[1].rank, 2);
        assert_eq!(coins[1].icon_url, format!("{ICONS}/eth@2x.png"));
    }
}
