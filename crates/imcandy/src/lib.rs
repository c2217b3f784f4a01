//! Decorative add-ons for egui: keyframed gradients, animated candy colors
//! and a couple of theme presets.
//!
//! The producers in [`candy`] are meant to be called once per frame:
//!
//! ```no_run
//! # use imcandy::egui;
//! # fn ui(ui: &mut egui::Ui, ratio: &mut f64) {
//! let border = imcandy::candy::rainbow(ratio, imcandy::candy::DEFAULT_STEP);
//! egui::Frame::new()
//!     .stroke(egui::Stroke::new(2.0, border))
//!     .show(ui, |ui| ui.label("candy"));
//! # }
//! ```

pub use eframe::egui;

pub mod candy;
pub mod color;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod theme;

pub use color::Rgb;
pub use error::{CandyError, Result};
pub use gradient::{LinearColorGradient, LinearGradient};
pub use theme::ThemePreset;
