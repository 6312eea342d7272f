mod views;
mod utils;
pub mod theme;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::views::*;
pub use crate::configs::{ DARK_MARKER_CLASS, PREFERS_DARK_QUERY, THEME_STORAGE_KEY };
pub use crate::error::ThemeError;
