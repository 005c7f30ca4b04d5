//! Actions accepted by the global UI store and the theme mode they carry.
//!
//! On the wire every action is a `{type, payload}` record.

use serde::{Deserialize, Serialize};

use crate::system::auth::{LoggedIn, OrgRole, SessionTokens, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum AppAction {
    #[serde(rename = "LOGGED_IN")]
    LoggedIn(LoggedIn),
    #[serde(rename = "UPDATE_USER_ORG_ROLE")]
    UpdateUserOrgRole(OrgRole),
    #[serde(rename = "UPDATE_USER")]
    UpdateUser(UserProfile),
    #[serde(rename = "UPDATE_USER_ACCESS_REFRESH_ACCESS_TOKEN")]
    UpdateUserAccessRefreshAccessToken(SessionTokens),
    #[serde(rename = "SWITCH_DARK_MODE")]
    ToggleDarkMode,
}

impl AppAction {
    /// The `type` tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppAction::LoggedIn(_) => "LOGGED_IN",
            AppAction::UpdateUserOrgRole(_) => "UPDATE_USER_ORG_ROLE",
            AppAction::UpdateUser(_) => "UPDATE_USER",
            AppAction::UpdateUserAccessRefreshAccessToken(_) => {
                "UPDATE_USER_ACCESS_REFRESH_ACCESS_TOKEN"
            }
            AppAction::ToggleDarkMode => "SWITCH_DARK_MODE",
        }
    }
}

/// Colour scheme of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppMode {
    #[default]
    #[serde(rename = "darkMode")]
    DarkMode,
    #[serde(rename = "lightMode")]
    LightMode,
}

impl AppMode {
    /// Name used both as the persisted value and as the stylesheet link id.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppMode::DarkMode => "darkMode",
            AppMode::LightMode => "lightMode",
        }
    }

    /// Unknown values fall back to dark.
    pub fn from_str(s: &str) -> Self {
        match s {
            "lightMode" => AppMode::LightMode,
            _ => AppMode::DarkMode,
        }
    }

    pub fn from_dark_flag(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            AppMode::DarkMode
        } else {
            AppMode::LightMode
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, AppMode::DarkMode)
    }

    pub fn opposite(&self) -> Self {
        match self {
            AppMode::DarkMode => AppMode::LightMode,
            AppMode::LightMode => AppMode::DarkMode,
        }
    }
}
