//! # GenPoster Core
//!
//! Procedural poster model: irregular blob outlines, vivid HSV palettes, and
//! the seeded composer that layers translucent blobs into a [`Scene`].
//!
//! Everything here is pure in-memory construction. Randomness is threaded
//! through explicitly as a `&mut impl Rng`, so a render owns its own stream
//! and never touches process-wide state.

pub mod geometry;
pub mod color;
pub mod blob;
pub mod palette;
pub mod layer;
pub mod scene;
pub mod composer;
pub mod error;

pub use blob::{blob, Blob};
pub use color::{Hsv, Rgb};
pub use composer::{generate_poster, PosterParams};
pub use error::PosterError;
pub use geometry::{BBox, Point};
pub use layer::Layer;
pub use palette::{vivid_palette, Palette};
pub use scene::{Extent, FontWeight, Scene, TextAnnotation};
