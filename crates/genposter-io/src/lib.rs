//! # GenPoster I/O
//!
//! PNG export of rasterized posters, the download filename convention, and
//! the JSON settings file that stores the control-panel parameters.

pub mod png;
pub mod settings;
pub mod error;

pub use error::ExportError;
pub use png::{download_filename, encode_png, export_scene, render_scene, write_png, PngWriter};
pub use settings::{parse_hex_color, to_hex_color, PosterSettings};
