use contracts::system::app::AppAction;
use contracts::system::auth::{Organization, Role};
use leptos::prelude::*;

use crate::shared::constants::local_storage;
use crate::shared::storage::KeyValueStorage;
use crate::shared::theme::stored_theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub access_jwt: String,
    pub refresh_jwt: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub profile_picture_url: String,
    pub org_id: String,
    pub org_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub is_dark_mode: bool,
    pub is_logged_in: bool,
    pub user: User,
    pub role: Option<Role>,
    pub org: Option<Vec<Organization>>,
    pub current_version: String,
}

impl AppState {
    /// Initial state, seeded from what the previous session persisted.
    pub fn load<S: KeyValueStorage>(storage: &S, current_version: &str) -> Self {
        Self {
            is_dark_mode: stored_theme(storage).is_dark(),
            is_logged_in: storage.get(local_storage::IS_LOGGED_IN).as_deref() == Some("true"),
            user: User {
                access_jwt: storage.get(local_storage::AUTH_TOKEN).unwrap_or_default(),
                refresh_jwt: storage
                    .get(local_storage::REFRESH_AUTH_TOKEN)
                    .unwrap_or_default(),
                ..User::default()
            },
            role: None,
            org: None,
            current_version: current_version.to_string(),
        }
    }

    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::LoggedIn(payload) => self.is_logged_in = payload.is_logged_in,
            AppAction::UpdateUserOrgRole(payload) => {
                self.org = payload.org;
                self.role = payload.role;
            }
            AppAction::UpdateUser(profile) => {
                self.role = Some(profile.role);
                self.user.email = profile.email;
                self.user.name = profile.name;
                self.user.org_id = profile.org_id;
                self.user.org_name = profile.org_name;
                self.user.profile_picture_url = profile.profile_picture_url;
                self.user.user_id = profile.user_id;
            }
            AppAction::UpdateUserAccessRefreshAccessToken(tokens) => {
                self.user.access_jwt = tokens.access_jwt;
                self.user.refresh_jwt = tokens.refresh_jwt;
            }
            AppAction::ToggleDarkMode => self.is_dark_mode = !self.is_dark_mode,
        }
    }
}

/// Anything that accepts store actions.
pub trait Dispatcher {
    fn dispatch(&self, action: AppAction);
}

/// Global UI store, provided once at the root through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub state: RwSignal<AppState>,
}

impl AppGlobalContext {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.with(|s| s.is_dark_mode)
    }

    pub fn current_version(&self) -> String {
        self.state.with(|s| s.current_version.clone())
    }
}

impl Dispatcher for AppGlobalContext {
    fn dispatch(&self, action: AppAction) {
        log::debug!("dispatch {}", action.kind());
        self.state.update(|state| state.apply(action));
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
