mod previews;
mod side_panel;

use eframe::egui;
use imcandy::{
    LinearColorGradient, Rgb, ThemePreset,
    candy::{DEFAULT_STEP, PortableRainbow},
    gradient::{cosine_interpolation, linear_interpolation},
    palette,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct State {
    pub theme: ThemePreset,
    pub step: f64,
    pub paused: bool,
    pub cosine_strip: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            theme: ThemePreset::default(),
            step: DEFAULT_STEP,
            paused: false,
            cosine_strip: false,
        }
    }
}

/// Progress of every animated preview, owned here and handed to the producers each frame
#[derive(Default)]
struct Progress {
    rainbow: f64,
    gradient2: f64,
    gradient3: f64,
    portable: PortableRainbow,
}

pub struct App {
    state: State,
    progress: Progress,
    strip: LinearColorGradient,
    /// Last rainbow border color, tints the side panel toggles
    accent: egui::Color32,
}

impl App {
    pub const STRIP_END: f64 = 3.0;

    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state: State = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            State::default()
        };

        state.theme.apply_to_ctx(&cc.egui_ctx);
        log::info!("starting with {} theme", state.theme.name());

        let mut this = Self {
            state,
            progress: Progress::default(),
            strip: Self::strip_gradient(),
            accent: egui::Color32::RED,
        };
        this.sync_strip_interpolation();
        this
    }

    fn strip_gradient() -> LinearColorGradient {
        [
            palette::CPN_DEEP,
            palette::CPN_PURPLE,
            palette::CPN_VIOLET,
            palette::CPN_BLUE,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, color)| (i as f64, Rgb::from(color)))
        .collect()
    }

    fn sync_strip_interpolation(&mut self) {
        self.strip.set_interpolation(if self.state.cosine_strip {
            cosine_interpolation
        } else {
            linear_interpolation
        });
    }

    /// Step handed to the producers this frame, zero while paused.
    fn frame_step(&self) -> f64 {
        if self.state.paused {
            0.0
        } else {
            self.state.step
        }
    }

    fn reset_progress(&mut self) {
        self.progress = Progress::default();
        log::info!("animation progress reset");
    }
}

impl eframe::App for App {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("side_panel")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| self.ui_side_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.ui_previews(ui));

        if !self.state.paused {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_passes_through_palette_colors() {
        let strip = App::strip_gradient();
        assert_eq!(strip.len(), 4);
        assert_eq!(strip.sample(1.0).to_color32(), palette::CPN_PURPLE);
        assert_eq!(strip.sample(App::STRIP_END).to_color32(), palette::CPN_BLUE);
    }

    #[test]
    fn default_state_animates_at_default_step() {
        let state = State::default();
        assert_eq!(state.step, DEFAULT_STEP);
        assert!(!state.paused);
        assert_eq!(state.theme, ThemePreset::Blender);
    }
}
