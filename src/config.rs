use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::message::Locale;

/// Options accepted by the `Game` constructor, e.g. `{ locale: "en" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub locale: Locale,
}

impl GameConfig {
    /// `undefined` and `null` select the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, GameConfig::default());
        assert_eq!(config.locale, Locale::Ja);
    }

    #[test]
    fn locale_parses_from_lowercase_name() {
        let config: GameConfig = serde_json::from_str(r#"{ "locale": "en" }"#).unwrap();

        assert_eq!(config.locale, Locale::En);
        assert!(serde_json::from_str::<GameConfig>(r#"{ "locale": "fr" }"#).is_err());
    }
}
