//! The client-side Dioxus application: a page shell around the coin table.

use dioxus::prelude::*;

mod app_state;
pub mod coin_table_state;
mod components;
pub mod hooks;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use components::coin_table::CoinTable;
use components::pico::Container;

/// Page heading and document title.
const TITLE: &str = "CoinCap Landing Page";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    .app-header {
        padding: 1rem 0;
        text-align: center;
    }

    .app-header h1 {
        margin-bottom: 1rem;
    }

    /* keep the number columns from wrapping mid-figure */
    .overflow-auto td {
        white-space: nowrap;
    }
"#;

    rsx! {
        document::Title { "{TITLE}" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{page_css}"
        }
        AppBody {}
    }
}

/// Resolves settings once and provides them, with the market client, as context.
#[component]
fn AppBody() -> Element {
    use_context_provider(|| {
        let prefs = UserPrefs::from_env();
        dioxus_logger::tracing::debug!("prefs: {:#?}", prefs);
        AppState::new(prefs)
    });

    rsx! {
        Container {
            header {
                class: "app-header",
                h1 { "{TITLE}" }
            }
            CoinTable {}
        }
    }
}
