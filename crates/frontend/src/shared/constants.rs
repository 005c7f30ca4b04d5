//! Fixed names shared with the rest of the dashboard: client-side routes and
//! browser storage keys.

pub mod routes {
    pub const APPLICATION: &str = "/application";
    pub const LOGIN: &str = "/login";
    pub const ORG_SETTINGS: &str = "/settings/org-settings";
}

pub mod local_storage {
    pub const AUTH_TOKEN: &str = "AUTH_TOKEN";
    pub const IS_LOGGED_IN: &str = "IS_LOGGED_IN";
    pub const REFRESH_AUTH_TOKEN: &str = "REFRESH_AUTH_TOKEN";
    pub const THEME: &str = "THEME";
}

/// Id of the stylesheet link shipped by the host page.
pub const APP_MODE_LINK_ID: &str = "appMode";
