use std::ops::RangeInclusive;

use rand::Rng;

use crate::color::{Hsv, Rgb};

/// Saturation band that keeps palette colors vivid.
pub const VIVID_SATURATION: RangeInclusive<f64> = 0.8..=1.0;
/// Value band that keeps palette colors vivid.
pub const VIVID_VALUE: RangeInclusive<f64> = 0.8..=1.0;

/// Ordered colors shared read-only by every layer of one render.
pub type Palette = Vec<Rgb>;

/// Draw `k` vivid colors.
///
/// Per entry the stream is consumed as hue, saturation, value in that order.
/// Duplicates are possible and not filtered.
pub fn vivid_palette<R: Rng>(rng: &mut R, k: usize) -> Palette {
    (0..k).map(|_| vivid_hsv(rng).to_rgb()).collect()
}

fn vivid_hsv<R: Rng>(rng: &mut R) -> Hsv {
    let h = rng.random::<f64>();
    let s = rng.random_range(VIVID_SATURATION);
    let v = rng.random_range(VIVID_VALUE);
    Hsv::new(h, s, v)
}
