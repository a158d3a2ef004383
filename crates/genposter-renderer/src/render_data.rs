use serde::{Deserialize, Serialize};

use genposter_core::{BBox, FontWeight, Layer, Scene, TextAnnotation};

use crate::viewport::Viewport;

/// One blob layer in screen space, ready for a frontend canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderLayer {
    pub index: usize,
    pub color: [f32; 4], // RGBA
    /// Flat array of screen vertices: [x0, y0, x1, y1, ...]
    pub vertices: Vec<f64>,
    /// Screen-space bounds: [min_x, min_y, max_x, max_y]
    pub bbox: Option<[f64; 4]>,
}

/// A text overlay positioned in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_px: f64,
    pub bold: bool,
    pub color: [f32; 4],
}

/// Complete render frame handed to a display surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: u32,
    pub height: u32,
    pub background: [f32; 4],
    pub layers: Vec<RenderLayer>,
    pub annotations: Vec<RenderText>,
}

impl RenderFrame {
    pub fn from_scene(scene: &Scene, viewport: &Viewport) -> Self {
        Self {
            width: viewport.canvas_width,
            height: viewport.canvas_height,
            background: scene.background.to_f32_array(1.0),
            layers: scene
                .layers
                .iter()
                .enumerate()
                .map(|(index, layer)| render_layer(index, layer, viewport))
                .collect(),
            annotations: scene
                .annotations()
                .into_iter()
                .map(|a| render_text(a, viewport))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn render_layer(index: usize, layer: &Layer, viewport: &Viewport) -> RenderLayer {
    let screen: Vec<_> = layer.blob.vertices.iter().map(|p| viewport.to_screen(p)).collect();
    RenderLayer {
        index,
        color: layer.rgba(),
        vertices: screen.iter().flat_map(|p| [p.x, p.y]).collect(),
        bbox: BBox::from_points(&screen).map(|b| [b.min.x, b.min.y, b.max.x, b.max.y]),
    }
}

fn render_text(annotation: &TextAnnotation, viewport: &Viewport) -> RenderText {
    let anchor = viewport.annotation_to_screen(annotation.x, annotation.y);
    RenderText {
        text: annotation.text.clone(),
        x: anchor.x,
        y: anchor.y,
        font_px: viewport.font_pixels(annotation.font_size),
        bold: annotation.weight == FontWeight::Bold,
        color: annotation.color.to_f32_array(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genposter_core::{generate_poster, PosterParams};

    #[test]
    fn test_frame_mirrors_scene() {
        let scene = generate_poster(&PosterParams::default().with_seed(Some(42))).unwrap();
        let vp = Viewport::for_scene(&scene, 100.0).unwrap();
        let frame = RenderFrame::from_scene(&scene, &vp);

        assert_eq!(frame.width, 700);
        assert_eq!(frame.height, 1000);
        assert_eq!(frame.layers.len(), scene.layer_count());
        for (layer, rendered) in scene.layers.iter().zip(&frame.layers) {
            assert_eq!(rendered.vertices.len(), layer.blob.vertex_count() * 2);
            assert_eq!(rendered.color[3], layer.alpha as f32);
            assert!(rendered.bbox.is_some());
        }
        assert_eq!(frame.annotations.len(), 2);
        assert!(frame.annotations[0].bold);
        assert!(!frame.annotations[1].bold);
    }

    #[test]
    fn test_title_near_top_left() {
        let scene = generate_poster(&PosterParams::default().with_layers(0)).unwrap();
        let vp = Viewport::new(1000, 1000);
        let frame = RenderFrame::from_scene(&scene, &vp);
        let title = &frame.annotations[0];
        assert!((title.x - 50.0).abs() < 1e-9);
        assert!((title.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_serializes() {
        let scene = generate_poster(&PosterParams::default().with_seed(Some(3)).with_layers(1)).unwrap();
        let frame = RenderFrame::from_scene(&scene, &Viewport::new(64, 64));
        let json = frame.to_json().unwrap();
        assert!(json.contains("\"annotations\""));
        assert!(json.contains("Generative Poster"));
    }
}
