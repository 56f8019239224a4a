#![warn(clippy::all)]

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use pixlife::{clock_seed, seed_from_phrase, App, Liveness, Settings, Topology};

/// Conway's Game of Life on a scaled pixel canvas.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 1920, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Window height in pixels
    #[arg(long, default_value_t = 1080, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    /// On-screen side length of one cell, in pixels
    #[arg(long = "px", default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pixel_size: u32,
    /// Start fullscreen
    #[arg(long = "fs", default_value_t = false)]
    fullscreen: bool,
    /// Pause between steps, in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,
    /// Initial population divisor: a cell starts alive with probability 1/DENSITY
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    density: u32,
    /// Seed phrase; the same phrase reproduces the same simulation
    #[arg(long)]
    seed: Option<String>,
    /// Stitch the field borders together (toroidal topology)
    #[arg(long)]
    wrap: bool,
    /// Fade surviving cells toward black instead of keeping them white
    #[arg(long)]
    fade: bool,
    /// Count only full-intensity cells as alive
    #[arg(long)]
    strict_alive: bool,
}

impl Cli {
    fn into_settings(self) -> Settings {
        Settings {
            window_width: self.width,
            window_height: self.height,
            pixel_size: self.pixel_size,
            fullscreen: self.fullscreen,
            step_interval: Duration::from_millis(self.interval_ms),
            rand_mod: self.density,
            seed: match &self.seed {
                Some(phrase) => seed_from_phrase(phrase),
                None => clock_seed(),
            },
            topology: if self.wrap {
                Topology::Torus
            } else {
                Topology::Bounded
            },
            liveness: if self.strict_alive {
                Liveness::Saturated
            } else {
                Liveness::Lit
            },
            fade: self.fade,
        }
    }
}

fn main() -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let settings = Cli::parse().into_settings();
    log::info!("starting with {:?}", settings);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(
                settings.window_width as f32,
                settings.window_height as f32,
            ))
            .with_fullscreen(settings.fullscreen),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, settings)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to open the window: {err}"))
}
