use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Cell, Player};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
}

/// How boards and results are printed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty: String,
    pub player_one: String,
    pub player_two: String,
    pub player_one_label: String,
    pub player_two_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: ".".into(),
            player_one: "X".into(),
            player_two: "O".into(),
            player_one_label: "Player 1".into(),
            player_two_label: "Player 2".into(),
        }
    }
}

impl DisplayConfig {
    pub fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::One => &self.player_one,
            Cell::Two => &self.player_two,
        }
    }

    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one_label,
            Player::Two => &self.player_two_label,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        let glyphs = [
            ("display.empty", &display.empty),
            ("display.player_one", &display.player_one),
            ("display.player_two", &display.player_two),
        ];
        for (key, glyph) in glyphs {
            if glyph.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be blank")));
            }
        }

        if display.empty == display.player_one
            || display.empty == display.player_two
            || display.player_one == display.player_two
        {
            return Err(ConfigError::Validation(
                "display glyphs must be distinct".into(),
            ));
        }

        if display.player_one_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.player_one_label must not be blank".into(),
            ));
        }
        if display.player_two_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.player_two_label must not be blank".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values. The binary logs it when
    /// no config file exists, as a template to copy.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
player_one = "R"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.player_one, "R");
        assert_eq!(config.display.player_two, "O");
        assert_eq!(config.display.player_one_label, "Player 1");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_validation_rejects_blank_glyph() {
        let mut config = AppConfig::default();
        config.display.empty = " ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_shared_glyphs() {
        let mut config = AppConfig::default();
        config.display.player_two = "X".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_label() {
        let mut config = AppConfig::default();
        config.display.player_two_label = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
player_two_label = "Yellow"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.display.label(Player::Two), "Yellow");
        assert_eq!(config.display.label(Player::One), "Player 1");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[display]\nempty = \"\"\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[display\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_lists_display_keys() {
        let toml_str = AppConfig::default_toml().unwrap();
        assert!(toml_str.contains("[display]"));
        assert!(toml_str.contains("player_one_label = \"Player 1\""));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
