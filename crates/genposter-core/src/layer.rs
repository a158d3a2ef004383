use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::color::Rgb;

/// Range each layer's opacity is drawn from.
pub const LAYER_ALPHA: RangeInclusive<f64> = 0.25..=0.6;

/// One translucent blob in the poster stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub blob: Blob,
    pub color: Rgb,
    pub alpha: f64,
}

impl Layer {
    pub fn new(blob: Blob, color: Rgb, alpha: f64) -> Self {
        Self { blob, color, alpha }
    }

    /// Fill color as `[r, g, b, a]` for GPU-style consumers.
    pub fn rgba(&self) -> [f32; 4] {
        self.color.to_f32_array(self.alpha)
    }
}
