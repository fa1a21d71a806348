//! Defines traits and implementations for external market data providers.

use crate::coin::Coin;
use crate::page::PageRequest;
use crate::FetchError;

/// A trait for any service that can list ranked assets a page at a time.
#[allow(async_fn_in_trait)]
pub trait MarketProvider {
    /// Fetches one page of assets in upstream rank order.
    async fn get_assets(&self, request: PageRequest) -> Result<Vec<Coin>, FetchError>;
}

/// Provides market data from the public CoinCap REST API.
pub mod coin_cap {
    use super::*;
    use crate::coin::AssetsEnvelope;
    use crate::prefs::endpoint::EndpointPrefs;
    use dioxus_logger::tracing::debug;

    /// An implementation of the `MarketProvider` trait for CoinCap.
    ///
    /// Cheap to clone; clones share the underlying connection pool.
    #[derive(Clone, Debug)]
    pub struct CoinCap {
        client: reqwest::Client,
        endpoint: EndpointPrefs,
    }

    impl CoinCap {
        pub fn new(endpoint: EndpointPrefs) -> Self {
            Self {
                client: reqwest::Client::new(),
                endpoint,
            }
        }

        pub fn endpoint(&self) -> &EndpointPrefs {
            &self.endpoint
        }

        /// `{api_base}/assets?limit={limit}&offset={offset}`
        pub fn assets_url(&self, request: PageRequest) -> String {
            format!(
                "{}/assets?limit={}&offset={}",
                self.endpoint.api_base(),
                request.limit(),
                request.offset()
            )
        }

        /// Decodes a raw `/assets` body into coins with derived icon URLs.
        pub fn decode_assets(&self, body: &str) -> Result<Vec<Coin>, FetchError> {
            let envelope: AssetsEnvelope = serde_json::from_str(body)?;
            Ok(envelope.into_coins(self.endpoint.icon_base()))
        }
    }

    impl PartialEq for CoinCap {
        fn eq(&self, other: &Self) -> bool {
            self.endpoint == other.endpoint
        }
    }

    impl MarketProvider for CoinCap {
        async fn get_assets(&self, request: PageRequest) -> Result<Vec<Coin>, FetchError> {
            let url = self.assets_url(request);
            debug!("GET {}", url);

            let mut builder = self.client.get(&url);
            if let Some(key) = self.endpoint.api_key() {
                builder = builder.bearer_auth(key);
            }

            let resp = builder.send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = resp.text().await?;
            self.decode_assets(&body)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn coin_cap() -> CoinCap {
            CoinCap::new(EndpointPrefs::new(
                "https://api.coincap.io/v2/",
                "https://assets.coincap.io/assets/icons",
            ))
        }

        #[test]
        fn builds_paginated_assets_url() {
            let provider = coin_cap();
            assert_eq!(
                provider.assets_url(PageRequest::new(1)),
                "https://api.coincap.io/v2/assets?limit=50&offset=0"
            );
            assert_eq!(
                provider.assets_url(PageRequest::new(3)),
                "https://api.coincap.io/v2/assets?limit=50&offset=100"
            );
        }

        #[test]
        fn decodes_body_and_derives_icons() {
            let body = r#"{
                "data": [
                    {"id":"bitcoin","rank":"1","symbol":"BTC","name":"Bitcoin",
                     "supply":"19650000","marketCapUsd":"1234567.5","volumeUsd24Hr":"1000",
                     "priceUsd":"1234.5","changePercent24Hr":"-3.456","vwap24Hr":null},
                    {"id":"tether","rank":"2","symbol":"USDT","name":"Tether",
                     "supply":"1","marketCapUsd":"1","volumeUsd24Hr":"1",
                     "priceUsd":"1.0001","changePercent24Hr":"0.01","vwap24Hr":"1"}
                ],
                "timestamp": 1700000000000
            }"#;

            let coins = coin_cap().decode_assets(body).unwrap();
            assert_eq!(coins.len(), 2);
            assert_eq!(coins[0].icon_url, "https://assets.coincap.io/assets/icons/btc@2x.png");
            assert_eq!(coins[0].vwap_24hr, None);
            assert_eq!(coins[1].icon_url, "https://assets.coincap.io/assets/icons/usdt@2x.png");
        }

        #[test]
        fn malformed_body_is_a_decode_error() {
            let err = coin_cap().decode_assets("<html>rate limited</html>").unwrap_err();
            assert!(matches!(err, FetchError::Decode(_)));

            let err = coin_cap().decode_assets(r#"{"error":"nope"}"#).unwrap_err();
            assert!(matches!(err, FetchError::Decode(_)));
        }
    }
}
