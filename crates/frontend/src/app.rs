use crate::layout::global_context::{AppGlobalContext, AppState};
use crate::layout::header::Header;
use crate::shared::config::AppConfig;
use crate::shared::storage::LocalStorage;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    let state = AppState::load(&LocalStorage, env!("CARGO_PKG_VERSION"));
    log::debug!(
        "Starting {} v{} (dark mode: {})",
        config.brand_name,
        state.current_version,
        state.is_dark_mode
    );

    // Provide the global store and runtime config to the whole app via context.
    provide_context(AppGlobalContext::new(state));
    provide_context(config);

    view! {
        <Router>
            <Header />
        </Router>
    }
}
