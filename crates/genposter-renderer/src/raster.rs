use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use genposter_core::{FontWeight, Layer, Rgb, Scene, TextAnnotation};

use crate::error::RenderError;
use crate::viewport::Viewport;

/// A packed RGB8 pixel buffer, row-major, the layout the PNG encoder takes.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let fill = background.to_u8_array();
        Self {
            width,
            height,
            pixels: fill.repeat(width as usize * height as usize),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb::from_u8(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    pub fn as_rgb8(&self) -> &[u8] {
        &self.pixels
    }
}

fn rgb_color(color: &Rgb) -> RGBColor {
    let [r, g, b] = color.to_u8_array();
    RGBColor(r, g, b)
}

/// Paint the background, every layer in order, then the title and subtitle.
pub fn rasterize(scene: &Scene, viewport: &Viewport) -> Result<Canvas, RenderError> {
    let (width, height) = (viewport.canvas_width, viewport.canvas_height);
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidCanvasSize {
            width: width as f64,
            height: height as f64,
        });
    }

    log::debug!(
        "Rasterizing {} layers onto {}x{} canvas",
        scene.layer_count(),
        width,
        height
    );

    let mut canvas = Canvas::new(width, height, scene.background);
    {
        let root = BitMapBackend::with_buffer(&mut canvas.pixels, (width, height)).into_drawing_area();
        root.fill(&rgb_color(&scene.background))
            .map_err(|e| RenderError::Drawing(format!("fill: {}", e)))?;

        for layer in &scene.layers {
            draw_layer(&root, layer, viewport)?;
        }
        for annotation in scene.annotations() {
            draw_annotation(&root, annotation, viewport)?;
        }

        root.present()
            .map_err(|e| RenderError::Drawing(format!("present: {}", e)))?;
    }
    Ok(canvas)
}

fn draw_layer(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    layer: &Layer,
    viewport: &Viewport,
) -> Result<(), RenderError> {
    if layer.blob.vertex_count() < 3 {
        return Ok(());
    }
    let points: Vec<(i32, i32)> = layer
        .blob
        .vertices
        .iter()
        .map(|p| {
            let s = viewport.to_screen(p);
            (s.x.round() as i32, s.y.round() as i32)
        })
        .collect();
    let style = rgb_color(&layer.color).mix(layer.alpha).filled();
    root.draw(&Polygon::new(points, style))
        .map_err(|e| RenderError::Drawing(format!("polygon: {}", e)))
}

fn draw_annotation(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    annotation: &TextAnnotation,
    viewport: &Viewport,
) -> Result<(), RenderError> {
    let font_style = match annotation.weight {
        FontWeight::Bold => FontStyle::Bold,
        FontWeight::Normal => FontStyle::Normal,
    };
    let color = rgb_color(&annotation.color);
    // Anchor is the bottom-left corner of the text.
    let style = (FontFamily::SansSerif, viewport.font_pixels(annotation.font_size))
        .into_font()
        .style(font_style)
        .color(&color)
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    let anchor = viewport.annotation_to_screen(annotation.x, annotation.y);
    root.draw_text(
        &annotation.text,
        &style,
        (anchor.x.round() as i32, anchor.y.round() as i32),
    )
    .map_err(|e| RenderError::Drawing(format!("text: {}", e)))
}
