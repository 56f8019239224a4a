use super::Config;
use crate::{clock_seed, LifeField, Settings, StepLimiter};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
    ViewportCommand,
};
use std::time::Instant;

pub struct App {
    pub(super) field: LifeField,
    pub(super) settings: Settings,
    pub(super) is_paused: bool,
    pub(super) do_one_step: bool, // Do one step while paused.
    pub(super) last_step_duration: f64, // Duration of the last field update in seconds.
    pub(super) texture: TextureHandle, // Texture handle of the field.
    pub(super) step_limiter: StepLimiter, // Paces steps by the configured interval.
}

impl App {
    pub fn new(ctx: &Context, settings: Settings) -> Self {
        let (width, height) = settings.canvas_size();
        let mut field = LifeField::blank(
            width,
            height,
            settings.topology,
            settings.liveness,
            settings.fade,
        );
        field.randomize(settings.seed, settings.rand_mod);
        log::info!("{}x{} field seeded with {}", width, height, settings.seed);

        Self {
            field,
            is_paused: false,
            do_one_step: false,
            last_step_duration: 0.,
            texture: ctx.load_texture(
                "life field",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            step_limiter: StepLimiter::new(settings.step_interval),
            settings,
        }
    }

    /// Throws the current population away and reseeds from the clock. The
    /// fresh seed is logged so the run stays reproducible.
    pub fn reseed(&mut self) {
        let seed = clock_seed();
        log::info!("reseeding field with {}", seed);
        self.field.randomize(seed, self.settings.rand_mod);
        self.do_one_step = false;
    }

    fn update_field(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        self.field.step();
        self.last_step_duration = timer.elapsed().as_secs_f64();

        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        let mut close = false;
        ctx.input(|input| {
            if input.key_pressed(Key::E) {
                self.is_paused = !self.is_paused;
            }
            if input.key_pressed(Key::Space) && self.is_paused {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::Escape) {
                close = true;
            }
        });
        if close {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::CANVAS_FILL),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_input(ctx);

                self.draw(ui);

                self.update_field();
            });

        self.step_limiter.delay();
    }
}
