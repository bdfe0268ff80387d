use crate::viewer::ViewerConfig;
use schemabench_ingest::DEFAULT_RESULTS_PATH;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ConfigErrors {
    #[error("Failed to read config file")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid colour '{0}', expected #rrggbb")]
    InvalidColour(String),
    #[error("Palette must contain at least one colour")]
    EmptyPalette,
    #[error("Figure size must be non-zero")]
    EmptyFigure,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    // CSV produced by the benchmark generator
    #[serde(default = "default_results_path")]
    pub results: PathBuf,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    // canvas sizes in pixels, (width, height)
    #[serde(default = "default_scatter_size")]
    pub scatter_size: (u32, u32),
    #[serde(default = "default_bar_size")]
    pub bar_size: (u32, u32),
    #[serde(default = "default_point_size")]
    pub point_size: u32,
    #[serde(default = "default_line_width")]
    pub line_width: u32,
}

/// 24 bit colour as written in the palette, `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour(pub u8, pub u8, pub u8);

/// Colours handed out to series in order, wrapping around once exhausted
#[derive(Debug, Clone, PartialEq)]
pub struct Palette(Vec<Colour>);

impl PlotConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigErrors> {
        let content = fs::read_to_string(path).map_err(|e| {
            error!(error = ?e, "Failed to read config file {path:?}");
            e
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.preflight_checks()?;

        Ok(config)
    }

    /// validate everything that can't be expressed in the serde schema
    pub fn preflight_checks(&self) -> Result<(), ConfigErrors> {
        self.style.palette()?;

        let (scatter, bar) = (self.style.scatter_size, self.style.bar_size);
        if scatter.0 == 0 || scatter.1 == 0 || bar.0 == 0 || bar.1 == 0 {
            error!("style.scatter_size and style.bar_size must be at least 1x1 pixels");
            return Err(ConfigErrors::EmptyFigure);
        }

        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            results: default_results_path(),
            viewer: ViewerConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl StyleConfig {
    pub fn palette(&self) -> Result<Palette, ConfigErrors> {
        if self.palette.is_empty() {
            error!("style.palette is empty");
            return Err(ConfigErrors::EmptyPalette);
        }

        self.palette
            .iter()
            .map(|value| value.parse())
            .collect::<Result<Vec<Colour>, _>>()
            .map(Palette)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            scatter_size: default_scatter_size(),
            bar_size: default_bar_size(),
            point_size: default_point_size(),
            line_width: default_line_width(),
        }
    }
}

impl FromStr for Colour {
    type Err = ConfigErrors;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigErrors::InvalidColour(value.to_owned());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;

        // from_str_radix alone would accept a sign
        if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());

        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Palette {
    pub fn colour(&self, index: usize) -> Colour {
        self.0[index % self.0.len()]
    }
}

fn default_results_path() -> PathBuf {
    PathBuf::from(DEFAULT_RESULTS_PATH)
}

fn default_palette() -> Vec<String> {
    vec![
        "#0054e6".to_owned(),
        "#d81159".to_owned(),
        "#000000".to_owned(),
    ]
}

// 5.5in high at an aspect of 1.5, 100 dpi
fn default_scatter_size() -> (u32, u32) {
    (825, 550)
}

fn default_bar_size() -> (u32, u32) {
    (800, 600)
}

fn default_point_size() -> u32 {
    4
}

fn default_line_width() -> u32 {
    1
}
