use std::ops::RangeInclusive;

use rand::distr::{Distribution, Uniform};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::blob::{Blob, DEFAULT_BLOB_POINTS};
use crate::color::Rgb;
use crate::error::PosterError;
use crate::geometry::Point;
use crate::layer::{Layer, LAYER_ALPHA};
use crate::palette::{vivid_palette, Palette};
use crate::scene::{Extent, FontWeight, Scene, TextAnnotation};

/// Range each blob's base radius is drawn from.
pub const BLOB_RADIUS: RangeInclusive<f64> = 0.15..=0.45;

pub const TITLE: &str = "Generative Poster";

/// Everything one poster render depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterParams {
    /// Free-form label shown in the subtitle.
    pub style: String,
    /// `None` draws from OS entropy, so every render differs.
    pub seed: Option<u64>,
    pub n_layers: usize,
    pub wobble_min: f64,
    pub wobble_max: f64,
    pub background: Rgb,
    pub palette_size: usize,
    /// Canvas width in inches.
    pub canvas_width: f64,
    /// Canvas height in inches.
    pub canvas_height: f64,
    pub blob_points: usize,
}

impl Default for PosterParams {
    fn default() -> Self {
        Self {
            style: "Vivid".to_string(),
            seed: None,
            n_layers: 8,
            wobble_min: 0.05,
            wobble_max: 0.2,
            background: Rgb::new(0.98, 0.98, 0.97),
            palette_size: 6,
            canvas_width: 7.0,
            canvas_height: 10.0,
            blob_points: DEFAULT_BLOB_POINTS,
        }
    }
}

impl PosterParams {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_layers(mut self, n_layers: usize) -> Self {
        self.n_layers = n_layers;
        self
    }

    pub fn with_wobble(mut self, min: f64, max: f64) -> Self {
        self.wobble_min = min;
        self.wobble_max = max;
        self
    }

    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Label the subtitle uses for the seed.
    pub fn seed_label(&self) -> String {
        match self.seed {
            Some(seed) => seed.to_string(),
            None => "none".to_string(),
        }
    }
}

/// Build one poster scene.
///
/// A seeded call is reproducible bit for bit, across calls and processes.
/// Without a seed the stream comes from OS entropy and every call differs.
pub fn generate_poster(params: &PosterParams) -> Result<Scene, PosterError> {
    let mut rng = match params.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_rng(&mut rand::rng()),
    };
    compose(params, &mut rng)
}

/// Build a scene from a caller-owned random stream.
///
/// Draw order: the whole palette first, then per layer the center x and y,
/// radius, wobble, blob vertices, palette pick and alpha.
pub fn compose<R: Rng>(params: &PosterParams, rng: &mut R) -> Result<Scene, PosterError> {
    log::debug!(
        "Composing poster: style={}, seed={}, layers={}, palette={}",
        params.style,
        params.seed_label(),
        params.n_layers,
        params.palette_size
    );

    let palette = vivid_palette(rng, params.palette_size);

    let layers = (0..params.n_layers)
        .map(|_| place_layer(rng, params, &palette))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Scene {
        background: params.background,
        canvas_width: params.canvas_width,
        canvas_height: params.canvas_height,
        extent: Extent::UNIT,
        palette,
        layers,
        title: TextAnnotation {
            text: TITLE.to_string(),
            x: 0.05,
            y: 0.95,
            font_size: 18.0,
            weight: FontWeight::Bold,
            color: Rgb::grey(0.1),
        },
        subtitle: TextAnnotation {
            text: format!("Style: {}, Seed={}", params.style, params.seed_label()),
            x: 0.05,
            y: 0.91,
            font_size: 11.0,
            weight: FontWeight::Normal,
            color: Rgb::grey(0.2),
        },
    })
}

fn place_layer<R: Rng>(
    rng: &mut R,
    params: &PosterParams,
    palette: &Palette,
) -> Result<Layer, PosterError> {
    let center = Point::new(rng.random(), rng.random());
    let radius = rng.random_range(BLOB_RADIUS);
    let wobble = wobble_range(params.wobble_min, params.wobble_max)?.sample(rng);
    let blob = Blob::generate(rng, center, radius, params.blob_points, wobble);
    let color = *palette.choose(rng).ok_or(PosterError::EmptySelection)?;
    let alpha = rng.random_range(LAYER_ALPHA);
    Ok(Layer::new(blob, color, alpha))
}

fn wobble_range(low: f64, high: f64) -> Result<Uniform<f64>, PosterError> {
    Uniform::new_inclusive(low, high).map_err(|_| PosterError::InvalidRange { low, high })
}
