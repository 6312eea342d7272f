/// The only component that touches rendering state.
pub trait ThemeApplier {
    fn apply_dark(&mut self);
    fn apply_light(&mut self);
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlLinkElement;

    use crate::configs::DARK_MARKER_CLASS;
    use crate::error::ThemeError;
    use super::ThemeApplier;

    /// Applies a theme by toggling the marker class on the document root and
    /// repointing a single stylesheet link at the matching theme stylesheet.
    ///
    /// The link element is created lazily on first use, appended to `<head>`
    /// and reused for the lifetime of the page. Failures are logged and
    /// swallowed; theming is best-effort.
    pub struct DomApplier {
        dark_href: String,
        light_href: String,
        stylesheet: Option<HtmlLinkElement>,
    }

    impl DomApplier {
        pub fn new(dark_href: String, light_href: String) -> Self {
            Self {
                dark_href,
                light_href,
                stylesheet: None,
            }
        }

        fn apply(&mut self, dark: bool) {
            if let Err(e) = self.set_marker_class(dark) {
                log::warn!("Theme marker update failed: {}", e);
            }
            if let Err(e) = self.point_stylesheet(dark) {
                log::warn!("Theme stylesheet update failed: {}", e);
            }
        }

        fn set_marker_class(&self, dark: bool) -> Result<(), ThemeError> {
            let root = web_sys
                ::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
                .ok_or_else(|| ThemeError::Dom("no document root".to_string()))?;

            let classes = root.class_list();
            if dark {
                classes.add_1(DARK_MARKER_CLASS)?;
            } else {
                classes.remove_1(DARK_MARKER_CLASS)?;
            }
            Ok(())
        }

        fn point_stylesheet(&mut self, dark: bool) -> Result<(), ThemeError> {
            let link = match &self.stylesheet {
                Some(link) => link.clone(),
                None => {
                    let link = Self::create_stylesheet_link()?;
                    self.stylesheet = Some(link.clone());
                    link
                }
            };

            let href = if dark { &self.dark_href } else { &self.light_href };
            link.set_href(href);
            Ok(())
        }

        fn create_stylesheet_link() -> Result<HtmlLinkElement, ThemeError> {
            let document = web_sys
                ::window()
                .and_then(|window| window.document())
                .ok_or_else(|| ThemeError::Dom("no document".to_string()))?;

            let link: HtmlLinkElement = document
                .create_element("link")?
                .dyn_into()
                .map_err(|_| ThemeError::Dom("link element cast failed".to_string()))?;
            link.set_rel("stylesheet");

            let head = document.head().ok_or_else(|| ThemeError::Dom("no document head".to_string()))?;
            head.append_child(&link)?;
            Ok(link)
        }
    }

    impl ThemeApplier for DomApplier {
        fn apply_dark(&mut self) {
            self.apply(true);
        }

        fn apply_light(&mut self) {
            self.apply(false);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomApplier;
