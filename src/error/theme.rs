use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum ThemeError {
    Dom(String),
    Storage(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ThemeError::Dom(format!("{:?}", value))
    }
}
