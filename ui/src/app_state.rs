use api::market_providers::coin_cap::CoinCap;
use api::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
    pub market: CoinCap,
}

/// Stable, non-reactive application context: settings plus the market client.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        let market = CoinCap::new(prefs.endpoint().clone());
        Self(Arc::new(AppStateData { prefs, market }))
    }
}
