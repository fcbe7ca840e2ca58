//! Configuration system
//!
//! Widget styling and fonts, loadable from TOML or RON files.

pub use serde::{Serialize, Deserialize};

use crate::color::{ColorRgba, NamedColor};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            Ok(Self::Toml)
        } else if path.ends_with(".ron") {
            Ok(Self::Ron)
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }
}

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration from a string
    fn from_str_as(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Serialize configuration to a string
    fn to_string_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_as(&contents, format)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = self.to_string_as(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Font request passed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font file name known to the host
    pub name: String,
    /// Pixel size
    pub size: u32,
    /// Weight (400 = regular)
    pub weight: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: "Segoeui.ttf".to_string(),
            size: 12,
            weight: 200,
        }
    }
}

/// Checkbox colors and spacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxStyle {
    /// Box fill
    pub background: ColorRgba,
    /// Fill of the inner square when checked
    pub check: ColorRgba,
    /// Outline color
    pub border: ColorRgba,
    /// Fill while the cursor hovers the box
    pub hover: ColorRgba,
    /// Label color
    pub text: ColorRgba,
    /// Gap between the box edge and the inner square
    pub inset: f64,
    /// Gap between the box and the label
    pub padding_left: f64,
    /// Label offset from the box top
    pub padding_top: f64,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self {
            background: ColorRgba::new([30.0, 30.0, 30.0, 255.0]),
            check: ColorRgba::from(NamedColor::LightPurple),
            border: ColorRgba::new([80.0, 80.0, 80.0, 255.0]),
            hover: ColorRgba::new([45.0, 45.0, 45.0, 255.0]),
            text: ColorRgba::new([255.0, 255.0, 255.0, 255.0]),
            inset: 4.0,
            padding_left: 5.0,
            padding_top: 4.0,
        }
    }
}

/// Top-level toolkit configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Label font
    pub font: FontConfig,
    /// Checkbox appearance
    pub checkbox: CheckboxStyle,
}

impl Config for ToolkitConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path("ui.toml").unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("ui.ron").unwrap(), ConfigFormat::Ron);
        assert!(matches!(
            ConfigFormat::from_path("ui.json"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ToolkitConfig::from_str_as(
            r#"
            [font]
            size = 14

            [checkbox]
            check = [255.0, 0.0, 0.0, 255.0]
            inset = 2.0
            "#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.font.size, 14);
        assert_eq!(config.font.name, "Segoeui.ttf");
        assert_eq!(config.checkbox.check.to_array(), [255.0, 0.0, 0.0, 255.0]);
        assert_eq!(config.checkbox.inset, 2.0);
        assert_eq!(config.checkbox.padding_left, 5.0);
    }

    #[test]
    fn test_string_round_trip() {
        let mut config = ToolkitConfig::default();
        config.font.weight = 700;
        config.checkbox.padding_top = 6.0;

        for format in [ConfigFormat::Toml, ConfigFormat::Ron] {
            let text = config.to_string_as(format).unwrap();
            assert_eq!(ToolkitConfig::from_str_as(&text, format).unwrap(), config);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("frame_ui_config_{}.ron", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let config = ToolkitConfig::default();
        config.save_to_file(&path).unwrap();
        let loaded = ToolkitConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bad_input_is_parse_error() {
        let err = ToolkitConfig::from_str_as("font = 3", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
