//! Presentation settings
//!
//! Colors, fonts and layout of the drawn frame. Nothing here changes how the
//! game plays. Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Colors and fonts (any CSS color / font string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub player: String,
    pub opponent: String,
    pub ball: String,
    pub net: String,
    pub score_font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            player: "#00e676".to_string(),
            opponent: "#ff1744".to_string(),
            ball: "#ffd600".to_string(),
            net: "#555".to_string(),
            score_font: "bold 36px Arial".to_string(),
        }
    }
}

/// Dashed center line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetStyle {
    /// Distance between the tops of consecutive dashes
    pub spacing: f32,
    pub dash_length: f32,
    pub dash_width: f32,
}

impl NetStyle {
    /// Smallest spacing that still draws a net
    pub const MIN_SPACING: f32 = 1.0;

    /// Finite sizes with spacing of at least `MIN_SPACING`
    pub fn is_valid(&self) -> bool {
        self.spacing.is_finite()
            && self.spacing >= Self::MIN_SPACING
            && self.dash_length.is_finite()
            && self.dash_width.is_finite()
    }
}

impl Default for NetStyle {
    fn default() -> Self {
        Self {
            spacing: 30.0,
            dash_length: 20.0,
            dash_width: 4.0,
        }
    }
}

/// Score text placement relative to the field's horizontal center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreLayout {
    pub player_offset: f32,
    pub opponent_offset: f32,
    pub baseline: f32,
}

impl Default for ScoreLayout {
    fn default() -> Self {
        Self {
            player_offset: -80.0,
            opponent_offset: 60.0,
            baseline: 50.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub net: NetStyle,
    pub score: ScoreLayout,
    /// Console log level name ("error" .. "trace")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            net: NetStyle::default(),
            score: ScoreLayout::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults and an
    /// unusable net style is replaced by the default one
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        if !settings.net.is_valid() {
            log::warn!("Ignoring invalid net style {:?}", settings.net);
            settings.net = NetStyle::default();
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Configured log level, `Info` if the name is unknown
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
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

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Could not serialize settings: {e}"),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
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
    use crate::error::Error;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r##"{"theme": {"ball": "#fff"}, "log_level": "debug"}"##)
                .unwrap();

        assert_eq!(settings.theme.ball, "#fff");
        assert_eq!(settings.theme.player, "#00e676");
        assert_eq!(settings.net, NetStyle::default());
        assert_eq!(settings.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let result = Settings::from_json("{ not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let settings = Settings {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.log_level(), log::Level::Info);
    }

    #[test]
    fn test_tiny_net_spacing_replaced_on_load() {
        let settings = Settings::from_json(r#"{"net": {"spacing": 0.000001}}"#).unwrap();
        assert_eq!(settings.net, NetStyle::default());

        let settings = Settings::from_json(r#"{"net": {"spacing": -30.0}}"#).unwrap();
        assert_eq!(settings.net, NetStyle::default());
    }

    #[test]
    fn test_valid_net_spacing_kept() {
        let settings = Settings::from_json(r#"{"net": {"spacing": 1.0}}"#).unwrap();
        assert_eq!(settings.net.spacing, 1.0);
        assert_eq!(settings.net.dash_length, 20.0);
    }

    #[test]
    fn test_json_survives_storage() {
        let mut settings = Settings::default();
        settings.net.spacing = 24.0;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
