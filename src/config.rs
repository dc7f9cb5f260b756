//! Page configuration
//!
//! Tunables for the page controller. The host page may override any of them
//! with a JSON `data-club-config` attribute on `<body>`; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// LocalStorage keys used by the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub language: String,
    pub members: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "club-loulou-theme".to_string(),
            language: "club-loulou-language".to_string(),
            members: "club-loulou-members".to_string(),
        }
    }
}

/// Page controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_keys: StorageKeys,

    // === Member counter ===
    /// Count shown when nothing was persisted yet
    pub default_member_count: u64,
    /// Counter animation length (ms)
    pub counter_animation_ms: f64,

    // === Registration ===
    /// Simulated server round trip (ms)
    pub submit_delay_ms: u32,

    // === Effects ===
    pub theme_spin_ms: u32,
    pub shake_ms: u32,
    pub confetti_count: usize,
    pub confetti_stagger_ms: u32,
    pub confetti_lifetime_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_keys: StorageKeys::default(),

            default_member_count: DEFAULT_MEMBER_COUNT,
            counter_animation_ms: COUNTER_ANIMATION_MS,

            submit_delay_ms: SUBMIT_DELAY_MS,

            theme_spin_ms: THEME_SPIN_MS,
            shake_ms: SHAKE_MS,
            confetti_count: CONFETTI_COUNT,
            confetti_stagger_ms: CONFETTI_STAGGER_MS,
            confetti_lifetime_ms: CONFETTI_LIFETIME_MS,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override, falling back to defaults when it is malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => {
                log::info!("Loaded page config override");
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed page config: {}", e);
                Self::default()
            }
        }
    }

    /// Read the `data-club-config` attribute from `<body>` (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-club-config"));

        match json {
            Some(json) => Self::from_json(&json),
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"submit_delay_ms": 10, "storage_keys": {"theme": "t"}}"#);
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.storage_keys.theme, "t");
        assert_eq!(config.storage_keys.members, "club-loulou-members");
        assert_eq!(config.confetti_count, CONFETTI_COUNT);
    }

    #[test]
    fn test_oversized_confetti_stagger_registers_cleanly() {
        use crate::controller::{Environment, PageController};
        use crate::storage::MemoryStore;
        use crate::view::HeadlessView;
        use crate::RegistrationForm;

        let config = PageConfig::from_json(r#"{"confetti_stagger_ms": 100000000}"#);
        assert_eq!(config.confetti_stagger_ms, 100_000_000);

        let mut page = PageController::new(config, MemoryStore::new(), HeadlessView::landing_page(), 5);
        page.init(&Environment::default(), 0.0);
        let form = RegistrationForm::new("Louis", "Martin", "louis@example.com", "1988");
        let pending = page.begin_registration(form).unwrap();
        page.finish_registration(pending, Ok(()), 0.0);

        let burst = &page.view().confetti_bursts[0];
        assert_eq!(burst.len(), CONFETTI_COUNT);
        assert_eq!(burst.last().map(|p| p.spawn_delay_ms), Some(u32::MAX));
    }

    #[test]
    fn test_malformed_override_falls_back() {
        let config = PageConfig::from_json("{not json");
        assert_eq!(config, PageConfig::default());
    }
}
