//! In-memory stand-ins for the browser seams. Every fake writes to a shared
//! [`Journal`] so tests can assert on the cross-seam ordering of effects.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use contracts::system::app::AppAction;

use crate::layout::global_context::Dispatcher;
use crate::shared::storage::KeyValueStorage;
use crate::shared::theme::{StylesheetHost, StylesheetLink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StorageSet(String, String),
    StorageRemove(String),
    LinkAppended(String),
    LinkRemoved(String),
    Dispatch(AppAction),
    Navigate(String),
    Commit,
}

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
}

pub struct MemoryStorage {
    journal: Journal,
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            items: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_items(journal: Journal, items: &[(&str, &str)]) -> Self {
        let storage = Self::new(journal);
        for (key, value) in items {
            storage
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.journal
            .push(Event::StorageSet(key.to_string(), value.to_string()));
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.journal.push(Event::StorageRemove(key.to_string()));
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Default)]
struct SheetsInner {
    appended: Vec<StylesheetLink>,
    removed: Vec<String>,
    pending: Vec<Option<Box<dyn FnOnce()>>>,
}

#[derive(Clone)]
pub struct RecordingStylesheets {
    journal: Journal,
    inner: Rc<RefCell<SheetsInner>>,
}

impl RecordingStylesheets {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            inner: Rc::default(),
        }
    }

    pub fn appended(&self) -> Vec<StylesheetLink> {
        self.inner.borrow().appended.clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.inner.borrow().removed.clone()
    }

    /// Simulate the browser firing `load` on the `index`-th appended link.
    pub fn fire_load(&self, index: usize) {
        let callback = self.inner.borrow_mut().pending[index].take();
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl StylesheetHost for RecordingStylesheets {
    fn append_link(&self, link: &StylesheetLink, on_load: Box<dyn FnOnce()>) {
        self.journal.push(Event::LinkAppended(link.id.clone()));
        let mut inner = self.inner.borrow_mut();
        inner.appended.push(link.clone());
        inner.pending.push(Some(on_load));
    }

    fn remove_by_id(&self, id: &str) {
        self.journal.push(Event::LinkRemoved(id.to_string()));
        self.inner.borrow_mut().removed.push(id.to_string());
    }
}

pub struct RecordingDispatcher(pub Journal);

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, action: AppAction) {
        self.0.push(Event::Dispatch(action));
    }
}

/// A navigator closure that records into `journal`.
pub fn recording_navigator(journal: Journal) -> impl Fn(&str) {
    move |path: &str| journal.push(Event::Navigate(path.to_string()))
}
