use crate::app_state::AppState;
use crate::coin_table_state::CoinTableState;
use crate::components::coin_row::CoinRow;
use crate::components::coin_row::CoinRowView;
use crate::components::coin_row::COLUMN_TITLES;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Overflow;
use crate::hooks::use_coin_table::use_coin_table;
use api::number_format::NumberLocale;
use dioxus::prelude::*;

/// The paginated market table with its "Load More" control.
///
/// Fetch failures are only logged; the table keeps whatever it showed before.
#[component]
pub fn CoinTable() -> Element {
    let app_state = use_context::<AppState>();
    let locale = app_state.prefs.display_preference().locale;

    let mut coin_table = use_coin_table();
    let state = coin_table.state().read().clone();

    rsx! {
        CoinTableView {
            state,
            locale,
            on_load_more: move |_| coin_table.load_more(),
        }
    }
}

/// Renders a snapshot of the table state. The button is shown in every state.
#[component]
pub fn CoinTableView(
    state: CoinTableState,
    locale: NumberLocale,
    on_load_more: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        Card {
            if state.is_loading() {
                p { "Loading..." }
                progress {}
            } else {
                Overflow {
                    table {
                        "aria-label": "coin table",
                        thead {
                            tr {
                                for title in COLUMN_TITLES {
                                    th { "{title}" }
                                }
                            }
                        }
                        tbody {
                            for coin in state.coins() {
                                CoinRow {
                                    key: "{coin.id}",
                                    row: CoinRowView::new(coin, locale),
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "display: flex; justify-content: center; margin-top: 1rem;",
                Button {
                    on_click: move |evt| on_load_more.call(evt),
                    "Load More"
                }
            }
        }
    }
}
