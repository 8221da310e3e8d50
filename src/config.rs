//! Page-level settings, embedded by the host page as
//! `<script type="application/json" id="configurator-config">`.

use log::{Level, LevelFilter};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ConfiguratorError;

pub const CONFIG_ELEMENT_ID: &str = "configurator-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quote form page; receives `PRODUCTS` and `TOTAL` (and answers, if asked).
    pub form_action: String,
    /// Cart total (EUR) that unlocks the incentive message.
    pub incentive_threshold: Decimal,
    /// Ask project type / timeline / scope before handing off the quote.
    pub qualification_flow: bool,
    pub persist_cart: bool,
    pub storage_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            form_action: "/design/form".to_string(),
            incentive_threshold: Decimal::from(5000),
            qualification_flow: false,
            persist_cart: true,
            storage_key: "tn_cart".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfiguratorError> {
        let cfg: AppConfig = serde_json::from_str(raw)?;
        if cfg.form_action.trim().is_empty() {
            return Err(ConfiguratorError::Config("form_action is empty".into()));
        }
        Ok(cfg)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read the embedded config. A page without one gets the defaults.
    pub fn load() -> Result<Self, ConfiguratorError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Console level for `wasm_logger`; `off` still lets errors through.
    pub fn console_level(&self) -> Level {
        self.level_filter().to_level().unwrap_or(Level::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = AppConfig::from_json(r#"{"qualification_flow": true, "incentive_threshold": "7500"}"#)
            .unwrap();
        assert!(cfg.qualification_flow);
        assert_eq!(cfg.incentive_threshold, Decimal::from(7500));
        assert_eq!(cfg.form_action, "/design/form");
        assert!(cfg.persist_cart);
    }

    #[test]
    fn rejects_malformed_and_empty_action() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(ConfiguratorError::Config(_))
        ));
        assert!(AppConfig::from_json(r#"{"form_action": " "}"#).is_err());
    }

    #[test]
    fn log_level_parsing() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
        cfg.log_level = "debug".into();
        assert_eq!(cfg.level_filter(), LevelFilter::Debug);
        cfg.log_level = "loud".into();
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
        assert_eq!(cfg.console_level(), Level::Info);
        cfg.log_level = "off".into();
        assert_eq!(cfg.console_level(), Level::Error);
    }
}
