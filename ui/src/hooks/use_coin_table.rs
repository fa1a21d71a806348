use crate::app_state::AppState;
use crate::coin_table_state::CoinTableState;
use api::market_providers::MarketProvider;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

#[derive(Clone, Copy)]
pub struct CoinTableHandle {
    state: Signal<CoinTableState>,
}

impl CoinTableHandle {
    /// Returns the state signal. Call `.read()` on it in a component to subscribe.
    pub fn state(&self) -> Signal<CoinTableState> {
        self.state
    }

    /// Moves to the next page. The page-change effect in [`use_coin_table`] does the fetch.
    pub fn load_more(&mut self) {
        let page = self.state.write().load_more();
        info!("load more: page {}", page);
    }
}

/// Owns the coin table state and re-fetches whenever the page changes,
/// including once on mount.
pub fn use_coin_table() -> CoinTableHandle {
    let app_state = use_context::<AppState>();
    let load_more = app_state.prefs.display_preference().load_more;

    let mut state = use_signal(|| CoinTableState::new(load_more));
    let page = use_memo(move || state.read().page());

    use_effect(move || {
        let page = page();
        let market = app_state.market.clone();
        let ticket = state.write().begin_fetch();
        info!("fetching page {}", page);

        spawn(async move {
            let outcome = market.get_assets(ticket.request()).await;
            state.write().settle(ticket, outcome);
        });
    });

    CoinTableHandle { state }
}
