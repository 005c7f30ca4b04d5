use crate::layout::global_context::use_app_context;
use crate::layout::header::user_menu::UserMenu;
use crate::shared::config::AppConfig;
use crate::shared::constants::routes;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Space;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let title = config.brand_name.clone();
    let alt = config.brand_name.clone();
    let logo_src = move || config.logo_url(&ctx.current_version());

    view! {
        <header data-zone="header" class="app-header">
            <div class="app-header__content">
                <A href=routes::APPLICATION>
                    <span class="app-header__brand">
                        <img src=logo_src alt=alt />
                        <h4 class="app-header__title">{title}</h4>
                    </span>
                </A>
                <Space>
                    <ThemeToggle />
                    <UserMenu />
                </Space>
            </div>
        </header>
    }
}
