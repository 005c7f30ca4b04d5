use crate::layout::global_context::use_app_context;
use crate::layout::header::user_menu::avatar_initial;
use leptos::prelude::*;

#[component]
pub fn SignedInAs() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="signed-in-as">
            <span class="signed-in-as__caption">"SIGNED IN AS"</span>
            <div class="signed-in-as__body">
                <span class="user-menu__avatar user-menu__avatar--large">
                    {move || ctx.state.with(|s| avatar_initial(&s.user.name))}
                </span>
                <div class="signed-in-as__details">
                    <span class="signed-in-as__name">{move || ctx.state.with(|s| s.user.name.clone())}</span>
                    <span class="signed-in-as__email">{move || ctx.state.with(|s| s.user.email.clone())}</span>
                </div>
            </div>
        </div>
    }
}
