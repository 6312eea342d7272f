pub mod theme;

// Re-export commonly used items
pub use theme::{ DARK_MARKER_CLASS, PREFERS_DARK_QUERY, THEME_STORAGE_KEY };
