//! GenPoster command-line front end.
//!
//! Collects poster parameters from a settings file and flags, renders one
//! poster, and writes it as a PNG named after its seed.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use genposter_core::generate_poster;
use genposter_io::{download_filename, render_scene, write_png, PosterSettings};
use genposter_renderer::{RenderFrame, Viewport};

#[derive(Parser, Debug)]
#[command(about, version)]
struct Cli {
    /// JSON settings file; flags override its values.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Fix the seed so the poster is reproducible.
    #[arg(short = 's', long, conflicts_with = "random")]
    seed: Option<u64>,

    /// Render without a seed (a fresh poster every run).
    #[arg(long)]
    random: bool,

    #[arg(long)]
    style: Option<String>,

    /// Number of blob layers.
    #[arg(short = 'l', long)]
    layers: Option<usize>,

    #[arg(long)]
    wobble_min: Option<f64>,

    #[arg(long)]
    wobble_max: Option<f64>,

    #[arg(short = 'p', long)]
    palette_size: Option<usize>,

    /// Background color as #rrggbb.
    #[arg(short = 'b', long)]
    background: Option<String>,

    /// Width in inches.
    #[arg(long)]
    width: Option<f64>,

    /// Height in inches.
    #[arg(long)]
    height: Option<f64>,

    #[arg(long)]
    dpi: Option<f64>,

    /// Output PNG path. Defaults to poster_<style>_seed<seed>.png.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Also write the screen-space render frame as JSON.
    #[arg(long)]
    frame_json: Option<PathBuf>,

    /// Write the effective settings back out as JSON.
    #[arg(long)]
    save_config: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<PosterSettings> {
        let mut settings = match &self.config {
            Some(path) => PosterSettings::load(path)
                .with_context(|| format!("reading settings from {}", path.display()))?,
            None => PosterSettings::default(),
        };

        if self.random {
            settings.seed = None;
        } else if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(style) = &self.style {
            settings.style = style.clone();
        }
        if let Some(layers) = self.layers {
            settings.layers = layers;
        }
        if let Some(min) = self.wobble_min {
            settings.wobble_min = min;
        }
        if let Some(max) = self.wobble_max {
            settings.wobble_max = max;
        }
        if let Some(size) = self.palette_size {
            settings.palette_size = size;
        }
        if let Some(bg) = &self.background {
            settings.background = bg.clone();
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(dpi) = self.dpi {
            settings.dpi = dpi;
        }
        Ok(settings)
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings()?;
    let params = settings.to_params().context("invalid settings")?;

    let scene = generate_poster(&params).context("poster generation failed")?;
    log::info!(
        "Generated {} layers from a {}-color palette",
        scene.layer_count(),
        scene.palette.len()
    );

    let canvas = render_scene(&scene, settings.dpi).context("rendering failed")?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(download_filename(&settings.style, settings.seed)));
    write_png(&output, &canvas).with_context(|| format!("writing {}", output.display()))?;
    println!("{}", output.display());

    if let Some(path) = &cli.frame_json {
        let viewport = Viewport::for_scene(&scene, settings.dpi)?;
        let json = RenderFrame::from_scene(&scene, &viewport).to_json()?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    if let Some(path) = &cli.save_config {
        settings
            .save(path)
            .with_context(|| format!("writing settings to {}", path.display()))?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
