use super::{App, Config};
use crate::Topology;
use eframe::egui::{
    load::SizedTexture, Button, Color32, ColorImage, Image, RichText, Stroke, TextureOptions, Ui,
    Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.is_paused { "Play" } else { "Pause" };
            if ui.add(Self::new_button(text)).clicked() {
                self.is_paused = !self.is_paused;
            }

            ui.add_enabled(self.is_paused, |ui: &mut Ui| {
                let response = ui.add(Self::new_button("Next step"));
                if response.clicked() {
                    self.do_one_step = true;
                }
                response
            });

            if ui.add(Self::new_button("Reseed")).clicked() {
                self.reseed();
            }

            ui.label(Self::new_text(&format!(
                "Generation: {}",
                self.field.generation()
            )));

            ui.label(Self::new_text(&format!(
                "{:.1} steps/s",
                self.step_limiter.steps_per_sec()
            )));

            ui.label(Self::new_text(&format!(
                "Last step: {:.2} ms",
                self.last_step_duration * 1e3
            )));

            let topology = match self.settings.topology {
                Topology::Torus => "torus",
                Topology::Bounded => "bounded",
            };
            let fade = if self.settings.fade { ", fade" } else { "" };
            ui.label(Self::new_text(&format!(
                "[{}{}, 1/{} seeded]",
                topology, fade, self.settings.rand_mod
            )));
        });
    }

    fn draw_life_field(&mut self, ui: &mut Ui) {
        let (width, height) = self.field.size();
        let pixels = self
            .field
            .cells()
            .iter()
            .map(|cell| Color32::from_rgb(cell.r, cell.g, cell.b))
            .collect();
        let ci = ColorImage {
            size: [width, height],
            pixels,
        };
        // One texel per cell, magnified without smoothing so cells stay
        // square blocks.
        self.texture.set(ci, TextureOptions::NEAREST);

        let scale = self.settings.pixel_size as f32;
        let size = Vec2::new(width as f32 * scale, height as f32 * scale);
        let source = SizedTexture::new(self.texture.id(), size);
        ui.add(Image::from_texture(source));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            self.draw_controls(ui);
            self.draw_life_field(ui);
        });
    }
}
