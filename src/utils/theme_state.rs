// View-model mirror of the coordinator state, kept in a signal so components
// can style themselves off the active mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeState {
    pub is_dark: bool,
    pub follows_system: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            is_dark: false,
            follows_system: true,
        }
    }
}

impl ThemeState {
    pub fn current() -> Self {
        Self {
            is_dark: crate::theme::web::is_dark(),
            follows_system: crate::theme::web::follows_system(),
        }
    }

    pub fn user_defined(dark: bool) -> Self {
        Self {
            is_dark: dark,
            follows_system: false,
        }
    }
}
