use std::cell::{ Cell, RefCell };
use std::collections::HashMap;
use std::rc::Rc;

use crate::theme::{ SettingsStore, SystemPreference, ThemeApplier };

/// In-memory settings store. Clones share the same map, so a test can keep a
/// handle while the coordinator owns its copy.
#[derive(Clone, Default)]
pub struct MockStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl SettingsStore for MockStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

type ChangeListener = Box<dyn FnMut(bool)>;

#[derive(Default)]
struct PreferenceInner {
    dark: Cell<bool>,
    headless: Cell<bool>,
    listener: RefCell<Option<ChangeListener>>,
    subscribe_calls: Cell<usize>,
}

/// Scriptable OS preference. `emit_change` plays the part of the host firing
/// a preference change notification at the registered listener.
#[derive(Clone, Default)]
pub struct MockPreference {
    inner: Rc<PreferenceInner>,
}

impl MockPreference {
    pub fn new(dark: bool) -> Self {
        let preference = Self::default();
        preference.inner.dark.set(dark);
        preference
    }

    /// A host without a display context: reads report light and
    /// subscriptions never start.
    pub fn headless() -> Self {
        let preference = Self::default();
        preference.inner.headless.set(true);
        preference
    }

    pub fn set_dark(&self, dark: bool) {
        self.inner.dark.set(dark);
    }

    pub fn emit_change(&self, dark: bool) {
        self.inner.dark.set(dark);
        let mut listener = self.inner.listener.borrow_mut();
        if let Some(callback) = listener.as_mut() {
            callback(dark);
        }
    }

    pub fn active_subscriptions(&self) -> usize {
        if self.inner.listener.borrow().is_some() { 1 } else { 0 }
    }

    pub fn subscribe_calls(&self) -> usize {
        self.inner.subscribe_calls.get()
    }
}

pub struct MockSubscription;

impl SystemPreference for MockPreference {
    type Subscription = MockSubscription;

    fn currently_dark(&self) -> bool {
        if self.inner.headless.get() {
            return false;
        }
        self.inner.dark.get()
    }

    fn subscribe(&mut self, on_change: ChangeListener) -> Option<MockSubscription> {
        if self.inner.headless.get() {
            return None;
        }
        assert!(self.inner.listener.borrow().is_none(), "duplicate subscription registered");
        self.inner.subscribe_calls.set(self.inner.subscribe_calls.get() + 1);
        *self.inner.listener.borrow_mut() = Some(on_change);
        Some(MockSubscription)
    }

    fn unsubscribe(&mut self, _subscription: MockSubscription) {
        *self.inner.listener.borrow_mut() = None;
    }
}

/// Records every applied theme instead of touching a DOM.
#[derive(Clone, Default)]
pub struct MockApplier {
    applied: Rc<RefCell<Vec<bool>>>,
}

impl MockApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<bool> {
        self.applied.borrow().clone()
    }

    pub fn last_applied(&self) -> Option<bool> {
        self.applied.borrow().last().copied()
    }

    pub fn call_count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl ThemeApplier for MockApplier {
    fn apply_dark(&mut self) {
        self.applied.borrow_mut().push(true);
    }

    fn apply_light(&mut self) {
        self.applied.borrow_mut().push(false);
    }
}
