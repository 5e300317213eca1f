use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// Colors a player's pieces can be drawn in.
///
/// Spelled lowercase in the config file, e.g. `player_one = "yellow"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
    White,
}

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// How each player's pieces are drawn.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_one: PieceColor,
    pub player_two: PieceColor,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_one: PieceColor::Yellow,
            player_two: PieceColor::Blue,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            display: DisplayConfig::default(),
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
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.display.player_one == self.display.player_two {
            return Err(ConfigError::Validation(
                "display.player_one and display.player_two must differ".into(),
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
        assert_eq!(config.board.rows, DEFAULT_ROWS);
        assert_eq!(config.board.cols, DEFAULT_COLS);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows, 8);
        // Other fields should be defaults
        assert_eq!(config.board.cols, DEFAULT_COLS);
        assert_eq!(config.display.player_one, PieceColor::Yellow);
        assert_eq!(config.display.player_two, PieceColor::Blue);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board.rows, default.board.rows);
        assert_eq!(config.board.cols, default.board.cols);
        assert_eq!(config.display.player_one, default.display.player_one);
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cols() {
        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_matching_colors() {
        let mut config = AppConfig::default();
        config.display.player_one = PieceColor::Red;
        config.display.player_two = PieceColor::Red;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let toml_str = r#"
[display]
player_one = "purple"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.rows, DEFAULT_ROWS);
        assert_eq!(config.board.cols, DEFAULT_COLS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 9

[display]
player_one = "red"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 9);
        assert_eq!(config.display.player_one, PieceColor::Red);
        // Others are defaults
        assert_eq!(config.board.cols, DEFAULT_COLS);
        assert_eq!(config.display.player_two, PieceColor::Blue);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 0
"#
        )
        .unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
