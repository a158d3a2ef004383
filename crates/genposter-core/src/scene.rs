use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::layer::Layer;
use crate::palette::Palette;

/// Visible coordinate window of the poster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    pub const UNIT: Extent = Extent {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    };

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::UNIT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Overlay text anchored in extent-relative coordinates (`0..1` on both axes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Point size.
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Rgb,
}

/// A complete poster render, ready to rasterize. Layers paint in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub background: Rgb,
    /// Physical width in inches.
    pub canvas_width: f64,
    /// Physical height in inches.
    pub canvas_height: f64,
    pub extent: Extent,
    pub palette: Palette,
    pub layers: Vec<Layer>,
    pub title: TextAnnotation,
    pub subtitle: TextAnnotation,
}

impl Scene {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn annotations(&self) -> [&TextAnnotation; 2] {
        [&self.title, &self.subtitle]
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
