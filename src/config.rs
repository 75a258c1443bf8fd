use std::path::Path;

use log::warn;

use crate::animation::AnimationConfig;
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};
use crate::session::PlayConfig;

/// Top-level application configuration, loadable from TOML.
///
/// Board size and win length are fixed by the game and are not configurable.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub animation: AnimationConfig,
    pub play: PlayConfig,
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let anim = &self.animation;
        if anim.tick_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.tick_interval_ms must be > 0".into(),
            ));
        }
        if anim.fall_step <= 0 {
            return Err(ConfigError::Validation(
                "animation.fall_step must be > 0".into(),
            ));
        }
        if anim.cell_size <= 0 {
            return Err(ConfigError::Validation(
                "animation.cell_size must be > 0".into(),
            ));
        }
        // Pixel positions across the whole board must fit in an i32.
        if anim.cell_size.checked_mul(COLS.max(ROWS) as i32).is_none() {
            return Err(ConfigError::Validation(
                "animation.cell_size is too large".into(),
            ));
        }
        if anim.piece_radius <= 0 {
            return Err(ConfigError::Validation(
                "animation.piece_radius must be > 0".into(),
            ));
        }
        if anim.piece_radius.saturating_mul(2) > anim.cell_size {
            return Err(ConfigError::Validation(
                "animation.piece_radius must fit inside a cell".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
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
[animation]
fall_step = 12
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.animation.fall_step, 12);
        assert_eq!(config.animation.cell_size, 70);
        assert!(!config.play.wait_for_settle);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.animation.tick_interval_ms, default.animation.tick_interval_ms);
        assert_eq!(config.animation.piece_radius, default.animation.piece_radius);
    }

    #[test]
    fn test_validation_rejects_zero_step() {
        let mut config = AppConfig::default();
        config.animation.fall_step = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let mut config = AppConfig::default();
        config.animation.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_cell_size() {
        let mut config = AppConfig::default();
        config.animation.cell_size = -70;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_cell_size() {
        let mut config = AppConfig::default();
        config.animation.cell_size = 1_000_000_000;
        config.animation.piece_radius = 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.animation.cell_size = 300_000_000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_oversized_piece() {
        let mut config = AppConfig::default();
        config.animation.piece_radius = 36;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.animation.fall_step, 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[play]
wait_for_settle = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.play.wait_for_settle);
        // Others are defaults
        assert_eq!(config.animation.cell_size, 70);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "[animation]\nfall_step = -3\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "[animation\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
