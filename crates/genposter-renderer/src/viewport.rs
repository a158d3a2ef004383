use serde::{Deserialize, Serialize};

use genposter_core::{Extent, Point, Scene};

use crate::error::RenderError;

/// Export resolution used when the caller does not pick one.
pub const DEFAULT_DPI: f64 = 200.0;

/// Maps the poster's visible extent onto a pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Poster-space window shown on the canvas.
    pub extent: Extent,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Pixels per inch.
    pub dpi: f64,
}

impl Viewport {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            extent: Extent::UNIT,
            canvas_width,
            canvas_height,
            dpi: DEFAULT_DPI,
        }
    }

    /// Size the canvas from the scene's physical dimensions at `dpi`.
    pub fn for_scene(scene: &Scene, dpi: f64) -> Result<Self, RenderError> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(RenderError::InvalidDpi(dpi));
        }
        let width = (scene.canvas_width * dpi).round();
        let height = (scene.canvas_height * dpi).round();
        if !(width >= 1.0 && height >= 1.0 && width <= u32::MAX as f64 && height <= u32::MAX as f64) {
            return Err(RenderError::InvalidCanvasSize {
                width: scene.canvas_width,
                height: scene.canvas_height,
            });
        }
        Ok(Self {
            extent: scene.extent,
            canvas_width: width as u32,
            canvas_height: height as u32,
            dpi,
        })
    }

    /// Convert poster X coordinate to screen coordinate.
    pub fn layout_to_screen_x(&self, x: f64) -> f64 {
        (x - self.extent.x_min) / self.extent.width() * self.canvas_width as f64
    }

    /// Convert poster Y coordinate to screen coordinate (screen Y grows downward).
    pub fn layout_to_screen_y(&self, y: f64) -> f64 {
        (self.extent.y_max - y) / self.extent.height() * self.canvas_height as f64
    }

    pub fn to_screen(&self, p: &Point) -> Point {
        Point::new(self.layout_to_screen_x(p.x), self.layout_to_screen_y(p.y))
    }

    /// Screen position of an annotation anchor given as a fraction of the
    /// canvas, with `(0, 0)` at the bottom left.
    pub fn annotation_to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(
            x * self.canvas_width as f64,
            (1.0 - y) * self.canvas_height as f64,
        )
    }

    /// Pixel size of a font given in points.
    pub fn font_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genposter_core::{generate_poster, PosterParams};

    #[test]
    fn test_for_scene_size() {
        let scene = generate_poster(&PosterParams::default().with_seed(Some(1)).with_layers(0)).unwrap();
        let vp = Viewport::for_scene(&scene, 200.0).unwrap();
        assert_eq!(vp.canvas_width, 1400);
        assert_eq!(vp.canvas_height, 2000);
    }

    #[test]
    fn test_invalid_dpi() {
        let scene = generate_poster(&PosterParams::default().with_layers(0)).unwrap();
        assert_eq!(Viewport::for_scene(&scene, 0.0), Err(RenderError::InvalidDpi(0.0)));
        assert!(Viewport::for_scene(&scene, f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_canvas() {
        let mut params = PosterParams::default().with_layers(0);
        params.canvas_width = 0.0;
        let scene = generate_poster(&params).unwrap();
        assert!(matches!(
            Viewport::for_scene(&scene, 100.0),
            Err(RenderError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn test_unit_square_mapping() {
        let vp = Viewport::new(200, 100);
        let origin = vp.to_screen(&Point::new(0.0, 0.0));
        assert_eq!((origin.x, origin.y), (0.0, 100.0));
        let corner = vp.to_screen(&Point::new(1.0, 1.0));
        assert_eq!((corner.x, corner.y), (200.0, 0.0));
        let inner = vp.to_screen(&Point::new(0.25, 0.75));
        assert!((inner.x - 50.0).abs() < 1e-12);
        assert!((inner.y - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_annotation_anchor_ignores_extent() {
        let mut vp = Viewport::new(200, 100);
        vp.extent = Extent {
            x_min: -1.0,
            x_max: 3.0,
            y_min: -1.0,
            y_max: 3.0,
        };
        let anchor = vp.annotation_to_screen(0.05, 0.95);
        assert!((anchor.x - 10.0).abs() < 1e-9);
        assert!((anchor.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_font_pixels() {
        let vp = Viewport::new(10, 10);
        assert!((vp.font_pixels(18.0) - 50.0).abs() < 1e-9);
    }
}
