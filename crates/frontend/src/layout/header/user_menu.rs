//! Avatar dropdown with the signed-in user, their organization and sign-out.

use crate::layout::global_context::use_app_context;
use crate::layout::header::current_organization::CurrentOrganization;
use crate::layout::header::signed_in_as::SignedInAs;
use crate::shared::icons::icon;
use crate::shared::storage::LocalStorage;
use crate::system::auth::context::do_logout;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::Divider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

impl DropdownState {
    pub fn toggled(self) -> Self {
        match self {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == DropdownState::Open
    }
}

/// First character of the display name; empty for an empty name.
pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Keys that activate a focused button-like element.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[component]
pub fn UserMenu() -> impl IntoView {
    let ctx = use_app_context();
    let dropdown = RwSignal::new(DropdownState::default());

    let toggle = move || dropdown.update(|state| *state = state.toggled());

    // A click that reaches the window while open came from outside the menu.
    let handle = window_event_listener(ev::click, move |_| {
        if dropdown.get_untracked().is_open() {
            toggle();
        }
    });
    on_cleanup(move || handle.remove());

    let is_open = move || dropdown.get().is_open();

    view! {
        <div class="user-menu">
            <div
                class="user-menu__trigger"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    toggle();
                }
            >
                <span class="user-menu__avatar">
                    {move || ctx.state.with(|s| avatar_initial(&s.user.name))}
                </span>
                <span class="user-menu__caret">
                    {move || if is_open() { icon("caret-up") } else { icon("caret-down") }}
                </span>
            </div>

            <Show when=is_open>
                <div
                    class="user-menu__panel"
                    on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <SignedInAs />
                    <Divider />
                    <CurrentOrganization on_toggle=Callback::new(move |_| toggle()) />
                    <Divider />
                    <LogoutLink on_done=Callback::new(move |_| dropdown.set(DropdownState::Closed)) />
                </div>
            </Show>
        </div>
    }
}

/// Sign-out control; `on_done` runs after the session is cleared.
#[component]
fn LogoutLink(on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let logout = move || {
        let navigator = |path: &str| navigate(path, Default::default());
        do_logout(&LocalStorage, &ctx, &navigator);
        on_done.run(());
    };
    let logout_on_key = logout.clone();

    view! {
        <div class="user-menu__logout">
            {icon("log-out")}
            <div
                tabindex="0"
                role="button"
                class="user-menu__logout-link"
                on:click=move |_| logout()
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        logout_on_key();
                    }
                }
            >
                "Logout"
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_starts_closed() {
        assert_eq!(DropdownState::default(), DropdownState::Closed);
        assert!(!DropdownState::default().is_open());
    }

    #[test]
    fn test_dropdown_flips_once_per_event() {
        let mut state = DropdownState::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.toggled();
            seen.push(state.is_open());
        }
        assert_eq!(seen, vec![true, false, true, false]);
    }

    #[test]
    fn test_panel_shown_only_while_open() {
        let dropdown = RwSignal::new(DropdownState::default());
        let is_open = move || dropdown.get_untracked().is_open();
        assert!(!is_open());

        dropdown.update(|state| *state = state.toggled());
        assert!(is_open());

        // sign-out forces the menu shut regardless of prior state
        dropdown.set(DropdownState::Closed);
        assert!(!is_open());
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("Alice"), "A");
        assert_eq!(avatar_initial("élodie"), "é");
        assert_eq!(avatar_initial(""), "");
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }
}
