use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use genposter_core::Scene;
use genposter_renderer::{rasterize, Canvas, Viewport};

use crate::error::ExportError;

/// Streams a rasterized canvas out as an RGB8 PNG.
pub struct PngWriter<W: Write> {
    writer: W,
}

impl<W: Write> PngWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, canvas: &Canvas) -> Result<(), ExportError> {
        let encoder = PngEncoder::new(&mut self.writer);
        encoder.write_image(
            canvas.as_rgb8(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
        )?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Encode a canvas to in-memory PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    let mut writer = PngWriter::new(Vec::new());
    writer.write(canvas)?;
    Ok(writer.into_inner())
}

/// Rasterize a scene at `dpi` into an RGB8 canvas.
pub fn render_scene(scene: &Scene, dpi: f64) -> Result<Canvas, ExportError> {
    let viewport = Viewport::for_scene(scene, dpi)?;
    let canvas = rasterize(scene, &viewport)?;
    log::info!("Rendered {}x{} poster", canvas.width(), canvas.height());
    Ok(canvas)
}

/// Rasterize a scene at `dpi` and encode it as PNG bytes.
pub fn export_scene(scene: &Scene, dpi: f64) -> Result<Vec<u8>, ExportError> {
    let bytes = encode_png(&render_scene(scene, dpi)?)?;
    log::debug!("Encoded poster ({} bytes)", bytes.len());
    Ok(bytes)
}

pub fn write_png(path: &Path, canvas: &Canvas) -> Result<(), ExportError> {
    let file = File::create(path)?;
    PngWriter::new(BufWriter::new(file)).write(canvas)?;
    log::info!("Wrote poster to {}", path.display());
    Ok(())
}

/// Download name for a poster: `poster_<style>_seed<seed>.png`, with
/// `random` in place of the seed for unseeded renders.
pub fn download_filename(style: &str, seed: Option<u64>) -> String {
    let style = style.trim().to_lowercase().replace(char::is_whitespace, "-");
    match seed {
        Some(seed) => format!("poster_{}_seed{}.png", style, seed),
        None => format!("poster_{}_seedrandom.png", style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genposter_core::{generate_poster, PosterParams, Rgb};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature_and_size() {
        let scene = generate_poster(&PosterParams::default().with_seed(Some(42))).unwrap();
        let bytes = export_scene(&scene, 20.0).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 140);
        assert_eq!(decoded.height(), 200);
    }

    #[test]
    fn test_background_survives_encoding() {
        let canvas = Canvas::new(4, 4, Rgb::from_u8(0xfb, 0xfb, 0xf8));
        let bytes = encode_png(&canvas).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.get_pixel(3, 3).0, [0xfb, 0xfb, 0xf8]);
    }

    #[test]
    fn test_export_rejects_bad_dpi() {
        let scene = generate_poster(&PosterParams::default().with_layers(0)).unwrap();
        assert!(matches!(export_scene(&scene, -1.0), Err(ExportError::Render(_))));
    }

    #[test]
    fn test_render_scene_matches_viewport() {
        let scene = generate_poster(&PosterParams::default().with_seed(Some(5)).with_layers(3)).unwrap();
        let canvas = render_scene(&scene, 30.0).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (210, 300));
        assert!(matches!(render_scene(&scene, 0.0), Err(ExportError::Render(_))));
    }

    #[test]
    fn test_write_rendered_scene_to_disk() {
        let scene = generate_poster(&PosterParams::default().with_seed(Some(9)).with_layers(2)).unwrap();
        let canvas = render_scene(&scene, 20.0).unwrap();
        let path = std::env::temp_dir().join(format!("genposter_write_{}.png", std::process::id()));
        write_png(&path, &canvas).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!((decoded.width(), decoded.height()), (140, 200));
        assert_eq!(decoded.as_raw().as_slice(), canvas.as_rgb8());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename("Vivid", Some(42)), "poster_vivid_seed42.png");
        assert_eq!(download_filename("Vivid", None), "poster_vivid_seedrandom.png");
        assert_eq!(download_filename("Soft Pastel", Some(7)), "poster_soft-pastel_seed7.png");
    }
}
