//! User settings
//!
//! Persisted in LocalStorage as JSON. Missing fields fall back to defaults so
//! older saved blobs keep loading.

use serde::{Deserialize, Serialize};

use crate::placement::PlacementConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Placement algorithm parameters
    pub placement: PlacementConfig,

    /// Re-submit the last count when the page loads
    pub restore_last_count: bool,
    /// Last count that produced a layout
    pub last_count: Option<u32>,

    /// Show the pointer coordinate readout
    pub show_pointer_readout: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placement: PlacementConfig::default(),
            restore_last_count: true,
            last_count: None,
            show_pointer_readout: true,
        }
    }
}

impl Settings {
    /// Count to submit at startup, if any
    pub fn startup_count(&self) -> Option<u32> {
        if self.restore_last_count {
            self.last_count
        } else {
            None
        }
    }

    /// Remember a successfully rendered count. Returns true if it changed.
    pub fn record_count(&mut self, count: u32) -> bool {
        let changed = self.last_count != Some(count);
        self.last_count = Some(count);
        changed
    }

    /// Parse settings JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) if settings.placement.validate().is_ok() => settings,
            Ok(_) => {
                log::warn!("Stored placement config invalid, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not parse settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "circle_field_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let (Some(storage), Some(json)) = (storage, self.to_json()) {
            let _ = storage.set_item(Self::STORAGE_KEY, &json);
            log::debug!("Settings saved");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No {} store on native, using defaults", Self::STORAGE_KEY);
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.record_count(25);
        settings.placement = PlacementConfig::with_radius(12.0);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{"last_count": 7}"#);
        assert_eq!(settings.last_count, Some(7));
        assert!(settings.restore_last_count);
        assert_eq!(settings.placement, PlacementConfig::default());
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
        assert_eq!(
            Settings::from_json(r#"{"placement": {"radius": -3.0}}"#),
            Settings::default()
        );
    }

    #[test]
    fn test_startup_count() {
        let mut settings = Settings::default();
        assert_eq!(settings.startup_count(), None);
        assert!(settings.record_count(9));
        assert!(!settings.record_count(9));
        assert_eq!(settings.startup_count(), Some(9));
        settings.restore_last_count = false;
        assert_eq!(settings.startup_count(), None);
    }
}
