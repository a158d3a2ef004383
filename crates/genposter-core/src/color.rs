use ::palette::FromColor;
use serde::{Deserialize, Serialize};

type SrgbF64 = ::palette::Srgb<f64>;
type HsvF64 = ::palette::Hsv<::palette::encoding::Srgb, f64>;

/// An RGB color with each channel normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Build from 8-bit channels (`0..=255`).
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Quantize to 8-bit channels, clamping out-of-range values.
    pub fn to_u8_array(&self) -> [u8; 3] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    pub fn to_f32_array(&self, alpha: f64) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, alpha as f32]
    }

    pub fn to_hsv(&self) -> Hsv {
        let hsv = HsvF64::from_color(SrgbF64::new(self.r, self.g, self.b));
        Hsv {
            h: hsv.hue.into_positive_degrees() / 360.0,
            s: hsv.saturation,
            v: hsv.value,
        }
    }
}

fn to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A hue/saturation/value triple, each component in `[0, 1]`.
///
/// Hue is a fraction of a full turn, so `0.0` and `1.0` are both red.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(&self) -> Rgb {
        let rgb = SrgbF64::from_color(HsvF64::new(self.h * 360.0, self.s, self.v));
        Rgb::new(rgb.red, rgb.green, rgb.blue)
    }
}
