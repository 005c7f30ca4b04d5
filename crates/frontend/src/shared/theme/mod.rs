//! Dark/light theme switching.
//!
//! Each mode has its own stylesheet. Switching appends the target mode's
//! `<link>` and only drops the old one, and commits the new mode to the store,
//! once the new sheet has loaded, so the page is never left unstyled.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use contracts::system::app::AppMode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::shared::config::AppConfig;
use crate::shared::constants::{local_storage, APP_MODE_LINK_ID};
use crate::shared::storage::KeyValueStorage;

/// Attributes of a theme `<link rel="stylesheet">` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetLink {
    pub id: String,
    pub href: String,
}

/// Document head manipulation needed for a theme switch.
pub trait StylesheetHost {
    /// Append `link`; `on_load` runs once the browser has loaded the sheet.
    fn append_link(&self, link: &StylesheetLink, on_load: Box<dyn FnOnce()>);
    /// Remove the element with `id`, if present.
    fn remove_by_id(&self, id: &str);
}

/// The live `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentStylesheets;

impl StylesheetHost for DocumentStylesheets {
    fn append_link(&self, link: &StylesheetLink, on_load: Box<dyn FnOnce()>) {
        let document = match window().and_then(|w| w.document()) {
            Some(doc) => doc,
            None => return,
        };

        let head = match document.head() {
            Some(h) => h,
            None => {
                log::warn!("document has no <head>, stylesheet {} not added", link.href);
                return;
            }
        };

        let element = match document.create_element("link") {
            Ok(el) => el.unchecked_into::<web_sys::HtmlLinkElement>(),
            Err(e) => {
                log::warn!("Failed to create <link>: {:?}", e);
                return;
            }
        };
        element.set_rel("stylesheet");
        element.set_type("text/css");
        element.set_href(&link.href);
        element.set_media("all");
        element.set_id(&link.id);

        let callback = Closure::once_into_js(on_load);
        element.set_onload(Some(callback.unchecked_ref()));

        if let Err(e) = head.append_child(&element) {
            log::warn!("Failed to append stylesheet {}: {:?}", link.href, e);
        }
    }

    fn remove_by_id(&self, id: &str) {
        if let Some(elem) = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        {
            elem.remove();
        }
    }
}

/// Stylesheet href for `mode`.
pub fn stylesheet_href(config: &AppConfig, mode: AppMode) -> &str {
    match mode {
        AppMode::DarkMode => &config.dark_stylesheet,
        AppMode::LightMode => &config.light_stylesheet,
    }
}

/// Persisted theme; dark when nothing is stored.
pub fn stored_theme<S: KeyValueStorage>(storage: &S) -> AppMode {
    storage
        .get(local_storage::THEME)
        .map(|s| AppMode::from_str(&s))
        .unwrap_or_default()
}

pub fn persist_theme<S: KeyValueStorage>(storage: &S, mode: AppMode) {
    storage.set(local_storage::THEME, mode.as_str());
}

/// Switch away from the current mode.
///
/// The target mode is persisted and its stylesheet appended right away. The
/// previous stylesheet is removed and `commit` runs only when the new sheet
/// fires `load`; if it never does, nothing is committed. Returns the target.
pub fn toggle_theme<H, S, F>(
    is_dark_mode: bool,
    config: &AppConfig,
    host: &H,
    storage: &S,
    commit: F,
) -> AppMode
where
    H: StylesheetHost + Clone + 'static,
    S: KeyValueStorage,
    F: FnOnce() + 'static,
{
    let previous = AppMode::from_dark_flag(is_dark_mode);
    let target = previous.opposite();
    log::info!("Switching theme {} -> {}", previous.as_str(), target.as_str());

    persist_theme(storage, target);

    let link = StylesheetLink {
        id: target.as_str().to_string(),
        href: stylesheet_href(config, target).to_string(),
    };

    let loaded_host = host.clone();
    host.append_link(
        &link,
        Box::new(move || {
            loaded_host.remove_by_id(APP_MODE_LINK_ID);
            loaded_host.remove_by_id(previous.as_str());
            commit();
        }),
    );

    target
}

/// Glyph shown inside the toggle.
pub fn toggle_glyph(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        "🌜"
    } else {
        "🌞"
    }
}
