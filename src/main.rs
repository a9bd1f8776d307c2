use kanban_board::app::App;
use kanban_board::core::config::BoardConfig;
use kanban_board::core::logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let (config, config_error) = match BoardConfig::from_query(&query) {
        Ok(config) => (config, None),
        Err(err) => (BoardConfig::default(), Some(err)),
    };

    logging::init(config.log_level);
    if let Some(err) = config_error {
        tracing::warn!("ignoring page settings: {}", err);
    }
    tracing::info!(key = %config.storage_key, locale = ?config.locale, "starting kanban board");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
