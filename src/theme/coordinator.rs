use std::cell::RefCell;
use std::rc::Rc;

use crate::configs::THEME_STORAGE_KEY;
use super::applier::ThemeApplier;
use super::settings::ThemeSettings;
use super::storage::SettingsStore;
use super::system::SystemPreference;

/// Whether the active theme is pinned by the user or tracking the OS.
///
/// A persisted record exists exactly while the mode is `UserDefined`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    UserDefined,
    FollowSystem,
}

/// Single source of truth for which theme is active and why.
///
/// Everything runs on the UI thread. The change subscription shares the
/// settings and the applier with the coordinator through `Rc<RefCell<..>>`;
/// the host serializes notifications, so no locking is involved.
pub struct ThemeCoordinator<S, P, A>
    where S: SettingsStore, P: SystemPreference, A: ThemeApplier + 'static
{
    store: S,
    preference: P,
    applier: Rc<RefCell<A>>,
    settings: Rc<RefCell<ThemeSettings>>,
    mode: ThemeMode,
    subscription: Option<P::Subscription>,
}

impl<S, P, A> ThemeCoordinator<S, P, A>
    where S: SettingsStore, P: SystemPreference, A: ThemeApplier + 'static
{
    pub fn new(store: S, preference: P, applier: A) -> Self {
        Self {
            store,
            preference,
            applier: Rc::new(RefCell::new(applier)),
            settings: Rc::new(RefCell::new(ThemeSettings::default())),
            mode: ThemeMode::FollowSystem,
            subscription: None,
        }
    }

    /// Resolves the startup theme. A persisted record wins; without one the
    /// OS preference seeds the settings and live tracking starts. Nothing is
    /// rendered until [`Self::apply`] is called.
    pub fn initialize(&mut self) {
        let persisted = self.store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| ThemeSettings::from_json(&raw));

        match persisted {
            Some(saved) => {
                *self.settings.borrow_mut() = saved;
                self.mode = ThemeMode::UserDefined;
                log::info!("Restored user theme override: dark={}", saved.dark_mode);
            }
            None => {
                let dark = self.preference.currently_dark();
                self.settings.borrow_mut().dark_mode = dark;
                self.mode = ThemeMode::FollowSystem;
                self.start_following();
                log::info!("No saved theme, following system preference: dark={}", dark);
            }
        }
    }

    /// Renders the current in-memory settings. Safe to call repeatedly.
    pub fn apply(&self) {
        let dark = self.settings.borrow().dark_mode;
        render(&self.applier, dark);
    }

    /// Pins the theme to an explicit user choice and persists it, so the
    /// same theme survives a reload. OS changes are ignored from here on.
    pub fn set_user_defined_mode(&mut self, dark: bool) {
        render(&self.applier, dark);
        self.stop_following();
        self.settings.borrow_mut().dark_mode = dark;
        self.mode = ThemeMode::UserDefined;
        let encoded = self.settings.borrow().to_json();
        self.store.set(THEME_STORAGE_KEY, &encoded);
    }

    pub fn set_dark_mode(&mut self) {
        self.set_user_defined_mode(true);
    }

    pub fn set_light_mode(&mut self) {
        self.set_user_defined_mode(false);
    }

    /// Drops any user override and goes back to tracking the OS preference.
    /// Re-subscribing is idempotent; an already-armed subscription stays.
    pub fn set_system_mode(&mut self) {
        let dark = self.preference.currently_dark();
        self.settings.borrow_mut().dark_mode = dark;
        render(&self.applier, dark);
        self.mode = ThemeMode::FollowSystem;
        self.start_following();
        self.store.remove(THEME_STORAGE_KEY);
    }

    /// Reads the OS preference without touching any state.
    pub fn is_system_dark(&self) -> bool {
        self.preference.currently_dark()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.settings.borrow().dark_mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stops OS tracking without changing the current theme. Must be called
    /// when the owner goes away, so the live subscription is not leaked.
    pub fn teardown(&mut self) {
        self.stop_following();
    }

    fn start_following(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let settings = Rc::clone(&self.settings);
        let applier = Rc::clone(&self.applier);
        self.subscription = self.preference.subscribe(
            Box::new(move |dark| {
                settings.borrow_mut().dark_mode = dark;
                render(&applier, dark);
            })
        );

        if self.subscription.is_none() {
            log::warn!("System theme notifications unavailable, staying on current theme");
        }
    }

    fn stop_following(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.preference.unsubscribe(subscription);
        }
    }
}

fn render<A: ThemeApplier>(applier: &Rc<RefCell<A>>, dark: bool) {
    let mut applier = applier.borrow_mut();
    if dark {
        applier.apply_dark();
    } else {
        applier.apply_light();
    }
}
