// Theming constants shared by the coordinator and its browser adapters.

/// Storage key holding the serialized user override. Absence of the key
/// means the application follows the OS preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Marker class toggled on the document root so style rules can key off it.
pub const DARK_MARKER_CLASS: &str = "dark";

/// Media query probing the OS-level color scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
