use thiserror::Error;

/// Failures surfaced by [`generate_poster`](crate::generate_poster).
///
/// Degenerate blob input (`r <= 0`, fewer than three points) is not an error:
/// it yields a structurally valid, visually collapsed outline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PosterError {
    #[error("Invalid wobble range: low {low} must not exceed high {high}")]
    InvalidRange { low: f64, high: f64 },

    #[error("Cannot choose a layer color from an empty palette")]
    EmptySelection,
}
