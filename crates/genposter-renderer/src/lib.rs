//! # GenPoster Renderer
//!
//! Turns a [`Scene`](genposter_core::Scene) into pixels.
//! Handles the unit-square to pixel mapping, JSON-serializable render frames
//! for a display surface, and a plotters bitmap rasterizer that composites
//! the blob layers in painter's order and draws the title and subtitle.

pub mod viewport;
pub mod render_data;
pub mod raster;
pub mod error;

pub use error::RenderError;
pub use raster::{rasterize, Canvas};
pub use render_data::{RenderFrame, RenderLayer, RenderText};
pub use viewport::{Viewport, DEFAULT_DPI};
