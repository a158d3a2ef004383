use std::io;

use thiserror::Error;

use genposter_renderer::RenderError;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Settings format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
