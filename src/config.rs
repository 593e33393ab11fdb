//! YAML configuration.
//!
//! Precedence: CLI > file > defaults. The default file lives at
//! `<config dir>/tally-viz/config.yaml`.
//!
//! ```yaml
//! version: 1
//! render:
//!   width: 1200
//!   height: 300
//!   color: "#1a2b3c"
//!   background: ~        # transparent
//! lengths:
//!   min: 0.5
//!   max: 3.0
//! first_position: 1
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::normalize::{Normalizer, MAX_TICK_LENGTH, MIN_TICK_LENGTH};
use crate::pipeline::{Illustration, Source};
use crate::plots::TickChart;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Empty border around the illustration, in pixels.
    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Stroke width in pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,

    /// Stroke color as `#rrggbb` or `#rrggbbaa`.
    #[serde(default = "default_color")]
    pub color: String,

    /// Background color; `~` for transparent.
    #[serde(default = "default_background")]
    pub background: Option<String>,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    200
}
fn default_margin() -> u32 {
    20
}
fn default_stroke_width() -> f32 {
    2.0
}
fn default_color() -> String {
    "#000000".to_string()
}
#[allow(clippy::unnecessary_wraps)]
fn default_background() -> Option<String> {
    Some("#ffffff".to_string())
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            stroke_width: default_stroke_width(),
            color: default_color(),
            background: default_background(),
        }
    }
}

/// Normalization bounds for magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthsConfig {
    /// Shortest tick.
    #[serde(default = "default_min_length")]
    pub min: f32,

    /// Longest tick.
    #[serde(default = "default_max_length")]
    pub max: f32,
}

fn default_min_length() -> f32 {
    MIN_TICK_LENGTH
}
fn default_max_length() -> f32 {
    MAX_TICK_LENGTH
}

impl Default for LengthsConfig {
    fn default() -> Self {
        Self { min: default_min_length(), max: default_max_length() }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output appearance.
    #[serde(default)]
    pub render: RenderConfig,

    /// Normalization bounds.
    #[serde(default)]
    pub lengths: LengthsConfig,

    /// Position of the first tick when positions are implicit.
    #[serde(default)]
    pub first_position: f32,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            render: RenderConfig::default(),
            lengths: LengthsConfig::default(),
            first_position: 0.0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration file location, if the platform has one.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tally-viz").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file cannot be read, or a
    /// parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serializes to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::InvalidInput(e.to_string()))
    }

    /// Normalizer targeting the configured length bounds.
    ///
    /// # Errors
    ///
    /// Returns an error unless `min < max`.
    pub fn normalizer(&self) -> Result<Normalizer> {
        Normalizer::new(self.lengths.min, self.lengths.max)
    }

    /// Unbuilt chart carrying the configured appearance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for a malformed color.
    pub fn chart_style(&self) -> Result<TickChart> {
        let render = &self.render;
        let background = render.background.as_deref().map(Rgba::from_hex).transpose()?;

        Ok(TickChart::new()
            .dimensions(render.width, render.height)
            .margin(render.margin)
            .stroke_width(render.stroke_width)
            .color(Rgba::from_hex(&render.color)?)
            .background(background))
    }

    /// Illustration of `source` with the configured bounds and first position.
    ///
    /// # Errors
    ///
    /// See [`Config::normalizer`].
    pub fn illustration(&self, source: Source) -> Result<Illustration> {
        Ok(Illustration::new(source)
            .normalizer(self.normalizer()?)
            .first_position(self.first_position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.render.width, 800);
        assert_eq!(config.render.height, 200);
        assert_eq!(config.lengths.min, MIN_TICK_LENGTH);
        assert_eq!(config.lengths.max, MAX_TICK_LENGTH);
        assert_eq!(config.first_position, 0.0);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
version: 1
render:
  width: 1200
  height: 300
  margin: 10
  stroke_width: 3
  color: "#1a2b3c"
  background: ~
lengths:
  min: 1.0
  max: 4.0
first_position: 1
"##;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.render.width, 1200);
        assert_eq!(config.render.margin, 10);
        assert_eq!(config.render.stroke_width, 3.0);
        assert_eq!(config.render.background, None);
        assert_eq!(config.lengths.max, 4.0);
        assert_eq!(config.first_position, 1.0);
    }

    #[test]
    fn test_config_partial_section_keeps_defaults() {
        let config = Config::parse("render:\n  width: 640\n").unwrap();

        assert_eq!(config.render.width, 640);
        assert_eq!(config.render.height, 200);
        assert_eq!(config.render.background.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r"
version: 1
render:
  width: not_a_number
";

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_chart_style() {
        let mut config = Config::new();
        config.render.color = "#ff0000".to_string();
        config.render.background = None;

        let chart = config.chart_style().unwrap().lengths(&[1.0]).build().unwrap();
        let fb = chart.to_framebuffer().unwrap();

        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert!(fb.count_pixels(Rgba::RED) > 0);
    }

    #[test]
    fn test_config_bad_color() {
        let mut config = Config::new();
        config.render.color = "red".to_string();
        assert!(matches!(config.chart_style(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_config_normalizer_bounds() {
        let mut config = Config::new();
        config.lengths.min = 2.0;
        config.lengths.max = 1.0;
        assert!(config.normalizer().is_err());

        config.lengths.max = 5.0;
        assert_eq!(config.normalizer().unwrap().bounds(), (2.0, 5.0));
    }

    #[test]
    fn test_config_illustration() {
        let config = Config::parse("lengths:\n  min: 1.0\n  max: 2.0\nfirst_position: 1\n").unwrap();
        let ill = config.illustration(Source::Magnitudes(vec![5.0, 10.0])).unwrap();

        assert_eq!(ill.lengths().unwrap(), vec![1.0, 2.0]);
        assert_eq!(ill.chart().unwrap().tick_positions(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let mut config = Config::new();
        config.render.width = 1024;
        let parsed = Config::parse(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_load_missing() {
        assert!(matches!(Config::load("/nonexistent/tally.yaml"), Err(Error::ConfigNotFound(_))));
        assert_eq!(Config::load_or_default("/nonexistent/tally.yaml"), Config::default());
    }

    #[test]
    fn test_config_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "first_position: 1\n").unwrap();

        assert_eq!(Config::load(&path).unwrap().first_position, 1.0);
    }
}
