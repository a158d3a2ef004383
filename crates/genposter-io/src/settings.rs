use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use genposter_core::{PosterParams, Rgb};
use genposter_renderer::DEFAULT_DPI;

use crate::error::ExportError;

/// Stored poster controls, in the units a user edits them in.
///
/// Missing fields fall back to the defaults below, so a settings file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterSettings {
    pub style: String,
    pub seed: Option<u64>,
    pub layers: usize,
    pub wobble_min: f64,
    pub wobble_max: f64,
    pub palette_size: usize,
    /// Background as `#rrggbb`.
    pub background: String,
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
    pub dpi: f64,
}

impl Default for PosterSettings {
    fn default() -> Self {
        Self {
            style: "Vivid".to_string(),
            seed: Some(42),
            layers: 8,
            wobble_min: 0.05,
            wobble_max: 0.20,
            palette_size: 6,
            background: "#fbfbf8".to_string(),
            width: 7.0,
            height: 10.0,
            dpi: DEFAULT_DPI,
        }
    }
}

impl PosterSettings {
    pub fn to_params(&self) -> Result<PosterParams, ExportError> {
        Ok(PosterParams {
            style: self.style.clone(),
            seed: self.seed,
            n_layers: self.layers,
            wobble_min: self.wobble_min,
            wobble_max: self.wobble_max,
            background: parse_hex_color(&self.background)?,
            palette_size: self.palette_size,
            canvas_width: self.width,
            canvas_height: self.height,
            ..PosterParams::default()
        })
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded poster settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Parse `#rrggbb` (leading `#` optional) into a normalized color.
pub fn parse_hex_color(hex: &str) -> Result<Rgb, ExportError> {
    let invalid = || ExportError::InvalidColor(hex.to_string());
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::from_u8(channel(0)?, channel(2)?, channel(4)?))
}

pub fn to_hex_color(color: &Rgb) -> String {
    let [r, g, b] = color.to_u8_array();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
