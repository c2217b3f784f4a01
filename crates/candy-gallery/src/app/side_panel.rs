use eframe::egui;
use imcandy::ThemePreset;

use crate::widgets::CandyToggle;

impl super::App {
    pub fn ui_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading("Theme");

        ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
            for preset in ThemePreset::ALL {
                if ui
                    .selectable_value(&mut self.state.theme, preset, preset.name())
                    .clicked()
                {
                    preset.apply_to_ctx(ui.ctx());
                    log::info!("switched to {} theme", preset.name());
                }
            }
        });

        ui.separator();
        ui.heading("Animation");

        ui.add(
            egui::Slider::new(&mut self.state.step, 0.001..=0.05)
                .logarithmic(true)
                .text("step"),
        );

        ui.horizontal(|ui| {
            ui.add(CandyToggle::new(&mut self.state.paused).accent(self.accent));
            ui.label("Paused");
        });

        ui.horizontal(|ui| {
            if ui
                .add(CandyToggle::new(&mut self.state.cosine_strip).accent(self.accent))
                .changed()
            {
                self.sync_strip_interpolation();
            }
            ui.label("Cosine strip");
        });

        if ui.button("Reset progress").clicked() {
            self.reset_progress();
        }
    }
}
