/// Live view of the OS/browser dark-mode preference.
pub trait SystemPreference {
    /// Handle representing an active change subscription.
    type Subscription;

    /// Reads the preference right now. A host without a display context
    /// reports light (`false`) rather than failing.
    fn currently_dark(&self) -> bool;

    /// Starts listening for preference changes. Returns `None` when the
    /// host cannot deliver notifications (headless context).
    fn subscribe(&mut self, on_change: Box<dyn FnMut(bool)>) -> Option<Self::Subscription>;

    /// Stops a subscription. No callback fires after this returns.
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}

#[cfg(target_arch = "wasm32")]
mod media_query {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{ MediaQueryList, MediaQueryListEvent };

    use crate::configs::PREFERS_DARK_QUERY;
    use super::SystemPreference;

    /// Preference observer backed by `window.matchMedia`.
    pub struct MediaQueryPreference;

    /// Holds the media query list together with the registered closure, so
    /// the listener lives exactly as long as the subscription and teardown
    /// never depends on garbage collection.
    pub struct MediaQuerySubscription {
        list: MediaQueryList,
        callback: Closure<dyn FnMut(MediaQueryListEvent)>,
    }

    impl MediaQueryPreference {
        pub fn new() -> Self {
            Self
        }

        fn query() -> Option<MediaQueryList> {
            web_sys::window().and_then(|window| window.match_media(PREFERS_DARK_QUERY).ok().flatten())
        }
    }

    impl SystemPreference for MediaQueryPreference {
        type Subscription = MediaQuerySubscription;

        fn currently_dark(&self) -> bool {
            Self::query().map(|list| list.matches()).unwrap_or(false)
        }

        fn subscribe(&mut self, mut on_change: Box<dyn FnMut(bool)>) -> Option<MediaQuerySubscription> {
            let list = Self::query()?;
            let callback = Closure::wrap(
                Box::new(move |event: MediaQueryListEvent| {
                    on_change(event.matches());
                }) as Box<dyn FnMut(MediaQueryListEvent)>
            );

            if
                list
                    .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                    .is_err()
            {
                log::warn!("Failed to attach color scheme change listener");
                return None;
            }

            Some(MediaQuerySubscription { list, callback })
        }

        fn unsubscribe(&mut self, subscription: MediaQuerySubscription) {
            let MediaQuerySubscription { list, callback } = subscription;
            if
                list
                    .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                    .is_err()
            {
                log::warn!("Failed to detach color scheme change listener");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use media_query::{ MediaQueryPreference, MediaQuerySubscription };
