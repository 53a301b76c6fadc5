use serde::{Deserialize, Serialize};

use crate::{state::CubeState, Color};

/// Display hex value for each sticker color. The defaults are the palette
/// the web shell ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeColors {
    pub white: String,
    pub yellow: String,
    pub red: String,
    pub orange: String,
    pub green: String,
    pub blue: String,
}

impl CubeColors {
    /// Hex value for `color`, e.g. `"#ffffff"`.
    #[must_use]
    pub fn hex(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Yellow => &self.yellow,
            Color::Red => &self.red,
            Color::Orange => &self.orange,
            Color::Green => &self.green,
            Color::Blue => &self.blue,
        }
    }
}

impl Default for CubeColors {
    fn default() -> Self {
        CubeColors {
            white: "#ffffff".to_owned(),
            yellow: "#fcd34d".to_owned(),
            red: "#ef4444".to_owned(),
            orange: "#f97316".to_owned(),
            green: "#10b981".to_owned(),
            blue: "#3b82f6".to_owned(),
        }
    }
}

/// The scene constants the core consumes. Camera and lighting settings are
/// the renderer's own business and are not modeled here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub cube_size: f32,
    pub gap: f32,
    /// Visual length of one rotation, in milliseconds.
    pub animation_duration_ms: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            cube_size: 1.0,
            gap: 0.05,
            animation_duration_ms: 500,
        }
    }
}

/// Everything the shell persists for a session.
///
/// Loaded once at startup and passed into the components that need it;
/// nothing reads storage ambiently. A missing or unreadable document falls
/// back to [`SessionConfig::default`], the canonical solved cube with the
/// stock palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cube_colors: CubeColors,
    pub default_state: CubeState,
    pub scene: SceneConfig,
}

impl SessionConfig {
    /// Parse a TOML document. Unknown keys are ignored, so a shell that
    /// owns a richer file still loads here.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionConfig;
    use crate::{Color, Face};

    #[test]
    fn defaults_are_the_stock_session() {
        let config = SessionConfig::default();

        assert!(config.default_state.is_solved());
        assert_eq!(config.cube_colors.hex(Color::White), "#ffffff");
        assert_eq!(config.cube_colors.hex(Color::Blue), "#3b82f6");
        assert_eq!(config.scene.animation_duration_ms, 500);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config = SessionConfig::from_toml(
            r##"
            [cube_colors]
            white = "#fafafa"

            [scene]
            gap = 0.1
            "##,
        )
        .unwrap();

        assert_eq!(config.cube_colors.hex(Color::White), "#fafafa");
        assert_eq!(config.cube_colors.hex(Color::Red), "#ef4444");
        assert!((config.scene.gap - 0.1).abs() < f32::EPSILON);
        assert!(config.default_state.is_solved());
    }

    #[test]
    fn stored_states_round_trip() {
        let mut config = SessionConfig::default();
        config
            .default_state
            .set_tile(Face::U, 0, Color::Green)
            .unwrap();

        let text = toml::to_string(&config).unwrap();
        let reloaded = SessionConfig::from_toml(&text).unwrap();

        assert_eq!(reloaded.default_state, config.default_state);
    }
}
