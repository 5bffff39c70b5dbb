use gloo::storage::{LocalStorage, Storage};
use log::warn;
use serde::{Deserialize, Serialize};
use shared::SpinConfig;
use web_sys::{window, UrlSearchParams};

pub const SETTINGS_KEY: &str = "wheel_settings";
pub const DEFAULT_WHEEL_SIZE: f64 = 420.0;

/// Widget settings persisted in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub spin: SpinConfig,
    pub sound: bool,
    pub wheel_size: f64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            spin: SpinConfig::default(),
            sound: true,
            wheel_size: DEFAULT_WHEEL_SIZE,
        }
    }
}

impl WidgetSettings {
    pub fn load() -> Self {
        LocalStorage::get(SETTINGS_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(err) = LocalStorage::set(SETTINGS_KEY, self) {
            warn!("Failed to save wheel settings: {}", err);
        }
    }
}

/// Page URL without query or fragment, used as the base of share links.
pub fn get_share_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(origin), Ok(path)) = (location.origin(), location.pathname()) {
            return format!("{}{}", origin, path);
        }
    }

    // Default for local development
    "http://127.0.0.1:8080/".to_string()
}

pub fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Milliseconds on the same clock as animation frame timestamps.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
