use contracts::system::app::AppAction;
use leptos::prelude::*;

use super::{toggle_glyph, toggle_theme, DocumentStylesheets};
use crate::layout::global_context::{use_app_context, Dispatcher};
use crate::shared::config::AppConfig;
use crate::shared::storage::LocalStorage;

/// Dark/light switch. Checked (moon) while the dashboard is dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let on_toggle = move |_| {
        let is_dark_mode = ctx.state.with_untracked(|s| s.is_dark_mode);
        toggle_theme(
            is_dark_mode,
            &config,
            &DocumentStylesheets,
            &LocalStorage,
            move || ctx.dispatch(AppAction::ToggleDarkMode),
        );
    };

    let is_checked = move || ctx.is_dark_mode();

    view! {
        <button
            type="button"
            role="switch"
            class="theme-toggle"
            class:theme-toggle--checked=is_checked
            aria-checked=move || if is_checked() { "true" } else { "false" }
            title="Toggle dark mode"
            on:click=on_toggle
        >
            <span class="theme-toggle__glyph">{move || toggle_glyph(is_checked())}</span>
        </button>
    }
}
