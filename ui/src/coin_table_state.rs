//! The coin table's state and fetch lifecycle, independent of any renderer.
//!
//! A fetch is split in two halves so the component can run the network call
//! in between: [`CoinTableState::begin_fetch`] raises the loading flag and hands
//! out a [`FetchTicket`], and [`CoinTableState::settle`] applies the outcome.
//! Every ticket carries a token; only the most recently issued one may clear
//! the loading flag or replace the rows.

use std::collections::HashSet;

use api::coin::Coin;
use api::page::PageRequest;
use api::prefs::display_preference::LoadMoreMode;
use api::FetchError;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

/// Proof that a fetch was started, returned to [`CoinTableState::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    token: u64,
    request: PageRequest,
}

impl FetchTicket {
    pub fn request(&self) -> PageRequest {
        self.request
    }
}

/// What [`CoinTableState::settle`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Rows were taken from the response.
    Applied { rows: usize },
    /// The fetch failed; the previous rows stay on screen.
    Failed,
    /// A newer fetch was started meanwhile and this outcome was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinTableState {
    coins: Vec<Coin>,
    is_loading: bool,
    page: u32,
    mode: LoadMoreMode,
    latest_token: u64,
}

impl CoinTableState {
    /// Empty table on page 1, not loading.
    pub fn new(mode: LoadMoreMode) -> Self {
        Self {
            coins: Vec::new(),
            is_loading: false,
            page: 1,
            mode,
            latest_token: 0,
        }
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn mode(&self) -> LoadMoreMode {
        self.mode
    }

    /// Advances to the next page and returns it. The caller re-fetches on page change.
    pub fn load_more(&mut self) -> u32 {
        self.page = self.page.saturating_add(1);
        self.page
    }

    /// Marks the table as loading and issues a ticket for the current page.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_token += 1;
        self.is_loading = true;
        FetchTicket {
            token: self.latest_token,
            request: PageRequest::new(self.page),
        }
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Failures are logged and swallowed. Outcomes of superseded tickets never
    /// touch the loading flag; in replace mode they are dropped entirely, in
    /// append mode successful pages are still merged so no page goes missing.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<Coin>, FetchError>,
    ) -> Settled {
        let page = ticket.request.page();
        let is_latest = ticket.token == self.latest_token;

        if is_latest {
            self.is_loading = false;
        }

        match outcome {
            Ok(coins) if is_latest || self.mode.is_append() => {
                let rows = coins.len();
                match self.mode {
                    LoadMoreMode::Replace => self.coins = coins,
                    LoadMoreMode::Append => self.merge(coins),
                }
                info!("page {} loaded: {} coins", page, rows);
                Settled::Applied { rows }
            }
            Ok(_) => {
                debug!("dropping stale response for page {}", page);
                Settled::Stale
            }
            Err(e) if is_latest => {
                warn!("Error fetching coins for page {}: {}", page, e);
                Settled::Failed
            }
            Err(e) => {
                debug!("stale fetch for page {} failed: {}", page, e);
                Settled::Stale
            }
        }
    }

    /// Adds rows whose id is not shown yet, keeping the table in rank order.
    fn merge(&mut self, coins: Vec<Coin>) {
        let mut seen: HashSet<String> = self.coins.iter().map(|c| c.id.clone()).collect();
        self.coins
            .extend(coins.into_iter().filter(|c| seen.insert(c.id.clone())));
        self.coins.sort_by_key(|c| c.rank);
    }
}

impl Default for CoinTableState {
    fn default() -> Self {
        Self::new(LoadMoreMode::default())
    }
}
