fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // settings are read again by the app; only the level is needed this early
    let level = api::prefs::user_prefs::log_level();
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting coincap-table (log level {})", level);

    dioxus::launch(ui::App);
}
