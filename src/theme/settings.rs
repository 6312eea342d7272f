use serde::{ Deserialize, Serialize };

/// The persisted theme record. A stored copy exists only while the user has
/// explicitly picked a mode; without one the application tracks the OS.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub dark_mode: bool,
}

impl ThemeSettings {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Decodes a persisted record. Anything that does not parse as a complete
    /// record, including one missing the `darkMode` field, counts as absent.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
