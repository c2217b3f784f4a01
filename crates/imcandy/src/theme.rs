//! Theme presets, applied by overwriting an [`egui::Style`] in place.
//!
//! There is no rollback: last write wins, keep a copy of the old style if you
//! want it back.

use eframe::egui::{self, Color32, CornerRadius, Margin, Vec2, style::WidgetVisuals, vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    NonInteractive,
    Inactive,
    Hovered,
    Active,
    Open,
}

impl WidgetState {
    fn visuals_mut(self, visuals: &mut egui::Visuals) -> &mut WidgetVisuals {
        let widgets = &mut visuals.widgets;
        match self {
            Self::NonInteractive => &mut widgets.noninteractive,
            Self::Inactive => &mut widgets.inactive,
            Self::Hovered => &mut widgets.hovered,
            Self::Active => &mut widgets.active,
            Self::Open => &mut widgets.open,
        }
    }
}

/// A named color of [`egui::Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSlot {
    Text,
    WindowFill,
    PanelFill,
    WindowStroke,
    FaintBg,
    ExtremeBg,
    CodeBg,
    Hyperlink,
    SelectionBg,
    SelectionStroke,
    WarnText,
    ErrorText,
    WidgetBg(WidgetState),
    WidgetStroke(WidgetState),
    WidgetText(WidgetState),
}

impl StyleSlot {
    pub fn write(self, style: &mut egui::Style, color: Color32) {
        let visuals = &mut style.visuals;
        match self {
            Self::Text => visuals.override_text_color = Some(color),
            Self::WindowFill => visuals.window_fill = color,
            Self::PanelFill => visuals.panel_fill = color,
            Self::WindowStroke => visuals.window_stroke.color = color,
            Self::FaintBg => visuals.faint_bg_color = color,
            Self::ExtremeBg => visuals.extreme_bg_color = color,
            Self::CodeBg => visuals.code_bg_color = color,
            Self::Hyperlink => visuals.hyperlink_color = color,
            Self::SelectionBg => visuals.selection.bg_fill = color,
            Self::SelectionStroke => visuals.selection.stroke.color = color,
            Self::WarnText => visuals.warn_fg_color = color,
            Self::ErrorText => visuals.error_fg_color = color,
            Self::WidgetBg(state) => {
                let widget = state.visuals_mut(visuals);
                widget.bg_fill = color;
                widget.weak_bg_fill = color;
            }
            Self::WidgetStroke(state) => state.visuals_mut(visuals).bg_stroke.color = color,
            Self::WidgetText(state) => state.visuals_mut(visuals).fg_stroke.color = color,
        }
    }
}

/// Numeric style parameters, `None` leaves the current value alone.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    pub window_padding: Option<[i8; 2]>,
    pub item_spacing: Option<Vec2>,
    pub window_rounding: Option<u8>,
    pub widget_rounding: Option<u8>,
    /// Border of framed widgets at rest, hovered and pressed widgets keep theirs
    pub widget_border_width: Option<f32>,
    pub grab_min_size: Option<f32>,
}

impl StyleMetrics {
    pub fn apply(&self, style: &mut egui::Style) {
        if let Some([x, y]) = self.window_padding {
            style.spacing.window_margin = Margin::symmetric(x, y);
        }
        if let Some(item_spacing) = self.item_spacing {
            style.spacing.item_spacing = item_spacing;
        }
        if let Some(rounding) = self.window_rounding {
            style.visuals.window_corner_radius = CornerRadius::same(rounding);
        }
        if let Some(size) = self.grab_min_size {
            style.spacing.scroll.handle_min_length = size;
        }
        if let Some(width) = self.widget_border_width {
            style.visuals.widgets.inactive.bg_stroke.width = width;
        }

        let widgets = &mut style.visuals.widgets;
        let framed = [
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
            &mut widgets.open,
        ];
        if let Some(rounding) = self.widget_rounding {
            for widget in framed {
                widget.corner_radius = CornerRadius::same(rounding);
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ThemePreset {
    /// Blender 3.0 dark, improvised
    #[default]
    Blender,
    /// Cyberpunk Neon (github.com/Roboron3042/Cyberpunk-Neon), improvised
    Cyberpunk,
}

/// Color from `0.0..=1.0` channels, as theme tables are usually written.
fn unit_rgba(r: f32, g: f32, b: f32, a: f32) -> Color32 {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
}

fn unit_rgb(r: f32, g: f32, b: f32) -> Color32 {
    unit_rgba(r, g, b, 1.0)
}

fn unit_gray(v: f32) -> Color32 {
    unit_rgb(v, v, v)
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [Self::Blender, Self::Cyberpunk];

    pub fn name(self) -> &'static str {
        match self {
            Self::Blender => "Blender",
            Self::Cyberpunk => "Cyberpunk",
        }
    }

    /// The fixed slot table of this preset.
    pub fn colors(self) -> Vec<(StyleSlot, Color32)> {
        use StyleSlot::*;
        use WidgetState::*;

        match self {
            Self::Blender => {
                let accent = unit_rgb(0.28, 0.45, 0.70);
                vec![
                    (Text, unit_gray(0.84)),
                    (WindowFill, unit_gray(0.22)),
                    (PanelFill, unit_gray(0.22)),
                    (FaintBg, unit_gray(0.19)),
                    (ExtremeBg, unit_gray(0.16)),
                    (CodeBg, unit_gray(0.09)),
                    (WindowStroke, unit_gray(0.17)),
                    (WidgetBg(NonInteractive), unit_gray(0.22)),
                    (WidgetStroke(NonInteractive), unit_gray(0.18)),
                    (WidgetBg(Inactive), unit_gray(0.33)),
                    (WidgetBg(Hovered), unit_gray(0.40)),
                    (WidgetStroke(Hovered), accent),
                    (WidgetBg(Active), accent),
                    (WidgetStroke(Active), accent),
                    (WidgetBg(Open), unit_gray(0.27)),
                    (SelectionBg, accent),
                    (SelectionStroke, unit_gray(0.84)),
                    (Hyperlink, accent),
                ]
            }
            Self::Cyberpunk => vec![
                (Text, unit_rgb(0.00, 0.82, 1.00)),
                (WidgetText(NonInteractive), unit_rgb(0.00, 0.36, 0.63)),
                (WindowFill, unit_rgb(0.00, 0.04, 0.12)),
                (PanelFill, unit_rgb(0.00, 0.04, 0.12)),
                (FaintBg, unit_rgb(0.03, 0.04, 0.22)),
                (ExtremeBg, unit_rgba(0.00, 0.75, 1.00, 0.20)),
                (CodeBg, unit_rgb(0.12, 0.06, 0.27)),
                (WindowStroke, unit_rgb(0.61, 0.00, 1.00)),
                (WidgetStroke(NonInteractive), unit_rgba(0.74, 0.00, 1.00, 0.50)),
                (WidgetBg(Inactive), unit_rgba(0.00, 0.98, 1.00, 0.52)),
                (WidgetBg(Hovered), unit_rgba(0.94, 0.00, 1.00, 0.80)),
                (WidgetStroke(Hovered), unit_rgba(0.34, 0.00, 1.00, 0.78)),
                (WidgetBg(Active), unit_rgb(0.01, 0.00, 1.00)),
                (WidgetStroke(Active), unit_rgb(0.00, 1.00, 0.85)),
                (WidgetBg(Open), unit_rgb(0.62, 0.00, 0.80)),
                (SelectionBg, unit_rgb(0.61, 0.00, 1.00)),
                (SelectionStroke, unit_rgb(0.95, 0.19, 0.92)),
                (Hyperlink, unit_rgb(0.00, 1.00, 0.95)),
            ],
        }
    }

    pub fn metrics(self) -> StyleMetrics {
        match self {
            Self::Blender => StyleMetrics {
                window_padding: Some([12, 8]),
                item_spacing: Some(vec2(7.0, 3.0)),
                window_rounding: Some(8),
                widget_rounding: Some(4),
                widget_border_width: Some(0.0),
                grab_min_size: Some(20.0),
            },
            Self::Cyberpunk => StyleMetrics {
                window_rounding: Some(0),
                widget_rounding: Some(0),
                widget_border_width: Some(0.0),
                ..Default::default()
            },
        }
    }

    /// Resets the colors to egui's dark visuals, then writes the preset.
    pub fn apply(self, style: &mut egui::Style) {
        style.visuals = egui::Visuals::dark();
        for (slot, color) in self.colors() {
            slot.write(style, color);
        }
        self.metrics().apply(style);

        log::debug!("applied {} theme", self.name());
    }

    /// Switches `ctx` to dark mode and applies the preset to its style.
    pub fn apply_to_ctx(self, ctx: &egui::Context) {
        ctx.set_theme(egui::Theme::Dark);
        ctx.style_mut(|style| self.apply(style));
    }
}
