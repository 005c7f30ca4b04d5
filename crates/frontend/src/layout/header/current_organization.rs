use crate::layout::global_context::use_app_context;
use crate::shared::constants::routes;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance};

/// Organization the user is working in, with a shortcut to its settings.
///
/// `on_toggle` fires after navigating so the enclosing dropdown can close.
#[component]
pub fn CurrentOrganization(on_toggle: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let open_settings = move |_: ev::MouseEvent| {
        navigate(routes::ORG_SETTINGS, Default::default());
        on_toggle.run(());
    };

    view! {
        <div class="current-organization">
            <span class="current-organization__caption">"CURRENT ORGANIZATION"</span>
            <div class="current-organization__body">
                <span class="current-organization__name">
                    {move || ctx.state.with(|s| s.user.org_name.clone())}
                </span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    class="current-organization__settings"
                    on_click=open_settings
                >
                    {icon("settings")}
                    "Settings"
                </Button>
            </div>
        </div>
    }
}
