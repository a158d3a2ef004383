use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid canvas size {width} x {height}: both sides must be positive")]
    InvalidCanvasSize { width: f64, height: f64 },

    #[error("Invalid DPI {0}: must be positive and finite")]
    InvalidDpi(f64),

    #[error("Drawing failed: {0}")]
    Drawing(String),
}
