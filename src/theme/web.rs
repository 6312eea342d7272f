#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;

    use dioxus::prelude::*;

    use crate::theme::applier::DomApplier;
    use crate::theme::coordinator::{ ThemeCoordinator, ThemeMode };
    use crate::theme::storage::LocalStorageStore;
    use crate::theme::system::MediaQueryPreference;

    const DARK_THEME_CSS: Asset = asset!("/assets/kendoui-dark.css");
    const LIGHT_THEME_CSS: Asset = asset!("/assets/kendoui-light.css");

    type BrowserCoordinator = ThemeCoordinator<LocalStorageStore, MediaQueryPreference, DomApplier>;

    thread_local! {
        static COORDINATOR: RefCell<Option<BrowserCoordinator>> = RefCell::new(None);
    }

    /// Builds the page-wide coordinator, resolves the startup theme and
    /// renders it. Called once from the app root after mount.
    pub fn init() {
        COORDINATOR.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_some() {
                log::warn!("Theme coordinator already initialized");
                return;
            }

            let applier = DomApplier::new(DARK_THEME_CSS.to_string(), LIGHT_THEME_CSS.to_string());
            let mut coordinator = ThemeCoordinator::new(
                LocalStorageStore::new(),
                MediaQueryPreference::new(),
                applier
            );
            coordinator.initialize();
            coordinator.apply();
            *slot = Some(coordinator);
        });
    }

    fn with_coordinator<R>(f: impl FnOnce(&mut BrowserCoordinator) -> R, fallback: R) -> R {
        COORDINATOR.with(|slot| {
            match slot.borrow_mut().as_mut() {
                Some(coordinator) => f(coordinator),
                None => {
                    log::warn!("Theme coordinator used before init");
                    fallback
                }
            }
        })
    }

    pub fn apply() {
        with_coordinator(|coordinator| coordinator.apply(), ());
    }

    pub fn set_dark_mode() {
        with_coordinator(|coordinator| coordinator.set_dark_mode(), ());
    }

    pub fn set_light_mode() {
        with_coordinator(|coordinator| coordinator.set_light_mode(), ());
    }

    pub fn set_system_mode() {
        with_coordinator(|coordinator| coordinator.set_system_mode(), ());
    }

    pub fn is_system_dark() -> bool {
        with_coordinator(|coordinator| coordinator.is_system_dark(), false)
    }

    pub fn is_dark() -> bool {
        with_coordinator(|coordinator| coordinator.is_dark_mode(), false)
    }

    pub fn follows_system() -> bool {
        with_coordinator(|coordinator| coordinator.mode() == ThemeMode::FollowSystem, true)
    }

    pub fn teardown() {
        with_coordinator(|coordinator| coordinator.teardown(), ());
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::*;

// Desktop/mobile builds render through their native toolkit, so the browser
// theme plumbing compiles away to no-ops there.
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    pub fn init() {}

    pub fn apply() {}

    pub fn set_dark_mode() {}

    pub fn set_light_mode() {}

    pub fn set_system_mode() {}

    pub fn is_system_dark() -> bool {
        false
    }

    pub fn is_dark() -> bool {
        false
    }

    pub fn follows_system() -> bool {
        true
    }

    pub fn teardown() {}
}

#[cfg(not(target_arch = "wasm32"))]
pub use headless::*;
