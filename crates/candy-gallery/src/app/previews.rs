use eframe::egui::{self, vec2};
use imcandy::{candy, palette};

use crate::widgets::{Swatch, gradient_strip};

impl super::App {
    pub fn ui_previews(&mut self, ui: &mut egui::Ui) {
        let step = self.frame_step();
        let progress = &mut self.progress;

        let border = candy::rainbow(&mut progress.rainbow, step);
        self.accent = border;
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(2.0, border))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(border, "Rainbow border");
                ui.label(format!("progress {:.3} / 6", progress.rainbow));
            });

        ui.add_space(12.0);

        let swatch_size = vec2(120.0, 64.0);
        let portable = progress.portable.next_color(step);
        let sunset = candy::gradient2(
            palette::CRIMSON,
            palette::SKY_BLUE,
            &mut progress.gradient2,
            step,
        );
        let candy_shop = candy::gradient3(
            palette::HOT_PINK,
            palette::MANGO,
            palette::TEAL,
            &mut progress.gradient3,
            step,
        );

        ui.horizontal_wrapped(|ui| {
            ui.add(Swatch::new(swatch_size, portable).caption("Portable"));
            ui.add(Swatch::new(swatch_size, sunset).caption("Crimson / Sky"));
            ui.add(Swatch::new(swatch_size, candy_shop).caption("Pink / Mango / Teal"));
        });

        ui.add_space(12.0);
        ui.label("Neon key points");
        gradient_strip(ui, &self.strip, Self::STRIP_END, 96, 32.0);

        ui.add_space(12.0);
        ui.label("Palette");
        ui.horizontal_wrapped(|ui| {
            for (name, color) in palette::ALL {
                ui.add(
                    Swatch::new(vec2(28.0, 28.0), color).corner_radius(egui::CornerRadius::same(14)),
                )
                .on_hover_text(name);
            }
        });
    }
}
