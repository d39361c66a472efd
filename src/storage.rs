use crate::process::{ProcessEngine, ProductId, DEFAULT_SPEED};
use serde::{Deserialize, Serialize};

pub(crate) const STORAGE_KEY: &str = "sublimate_settings";

/// Settings persisted between visits. The current phase is deliberately not
/// stored; every visit starts at the beginning of the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default = "default_product")]
    pub product: String,
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_product() -> String {
    ProductId::default().key().to_string()
}

fn default_speed() -> f64 {
    DEFAULT_SPEED
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            product: default_product(),
            speed: default_speed(),
        }
    }
}

impl StoredSettings {
    /// Stored product, falling back to the first catalog entry for unknown keys.
    pub fn product_id(&self) -> ProductId {
        self.product.parse().unwrap_or_else(|e| {
            log::warn!("Sublimate: {} (using default product)", e);
            ProductId::default()
        })
    }

    /// Engine seeded from these settings. Out-of-range speed is clamped by the engine.
    pub fn to_engine(&self) -> ProcessEngine {
        ProcessEngine::new(self.speed, self.product_id())
    }

    pub fn from_engine(engine: &ProcessEngine) -> Self {
        Self {
            product: engine.product_id().key().to_string(),
            speed: engine.speed(),
        }
    }
}

/// Attempts to get the browser's localStorage.
///
/// Returns `None` outside a browser, when storage is disabled (private
/// browsing) or when access raises a SecurityError.
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Parse stored JSON, falling back to defaults on any problem.
pub fn parse_settings(json: &str) -> StoredSettings {
    serde_json::from_str(json).unwrap_or_else(|e| {
        log::warn!("Sublimate: Failed to parse stored settings (using defaults): {}", e);
        StoredSettings::default()
    })
}

/// Load user settings from localStorage.
///
/// Always returns usable settings: missing storage, missing key and corrupt
/// JSON all fall back to defaults.
pub fn load_settings() -> StoredSettings {
    let Some(storage) = get_storage() else {
        // Expected in private browsing, so no warning
        return StoredSettings::default();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => {
            let settings = parse_settings(&json);
            log::debug!("Loaded settings: {:?}", settings);
            settings
        }
        Ok(None) => StoredSettings::default(),
        Err(_) => {
            log::warn!("Sublimate: Could not read from localStorage (using defaults)");
            StoredSettings::default()
        }
    }
}

/// Save user settings to localStorage. Failures are logged and otherwise ignored.
pub fn save_settings(settings: &StoredSettings) {
    let Some(storage) = get_storage() else {
        return;
    };

    let json = match serde_json::to_string(settings) {
        Ok(j) => j,
        Err(e) => {
            log::warn!("Sublimate: Failed to serialize settings: {}", e);
            return;
        }
    };

    if storage.set_item(STORAGE_KEY, &json).is_err() {
        log::warn!(
            "Sublimate: Could not save settings to localStorage. \
             You may be in private browsing mode or storage quota exceeded."
        );
    }
}

/// Remove stored settings (used by the error screen's reset button).
pub fn clear_settings() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Phase, MAX_SPEED};

    #[test]
    fn test_defaults() {
        let settings = StoredSettings::default();
        assert_eq!(settings.product, "fruit");
        assert_eq!(settings.speed, 1.0);
        assert_eq!(settings.to_engine(), ProcessEngine::default());
    }

    #[test]
    fn test_parse_valid_json() {
        let settings = parse_settings(r#"{"product":"meat","speed":2.5}"#);
        assert_eq!(settings.product_id(), ProductId::Meat);
        assert_eq!(settings.to_engine().speed(), 2.5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = parse_settings(r#"{"speed":1.5}"#);
        assert_eq!(settings.product_id(), ProductId::Fruit);
        assert_eq!(settings.speed, 1.5);
    }

    #[test]
    fn test_corrupt_json_falls_back() {
        assert_eq!(parse_settings("not json"), StoredSettings::default());
        assert_eq!(parse_settings(r#"{"speed":"fast"}"#), StoredSettings::default());
    }

    #[test]
    fn test_unknown_product_falls_back() {
        let settings = StoredSettings {
            product: "cheese".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.product_id(), ProductId::Fruit);
    }

    #[test]
    fn test_out_of_range_speed_is_clamped_on_load() {
        let settings = StoredSettings {
            speed: 99.0,
            ..Default::default()
        };
        assert_eq!(settings.to_engine().speed(), MAX_SPEED);
    }

    #[test]
    fn test_engine_roundtrip_drops_phase() {
        let mut engine = ProcessEngine::new(2.0, ProductId::Vegetables);
        engine.jump_to(Phase::Complete);
        let restored = StoredSettings::from_engine(&engine).to_engine();
        assert_eq!(restored.product_id(), ProductId::Vegetables);
        assert_eq!(restored.speed(), 2.0);
        assert_eq!(restored.phase(), Phase::Initial);
    }
}
