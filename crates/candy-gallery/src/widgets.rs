//! Contains widgets used by the gallery

use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Sense, Vec2, Widget, WidgetText,
};
use imcandy::{LinearColorGradient, gradient::Lerp};

/// Black or white, whichever reads better on `background`.
pub fn contrast_text_color(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;

    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

pub fn hex_string(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// A filled rectangle showing one color, with an optional caption
pub struct Swatch {
    color: Color32,
    size: Vec2,
    corner_radius: CornerRadius,
    caption: Option<WidgetText>,
}

impl Swatch {
    pub fn new(size: Vec2, color: Color32) -> Self {
        Self {
            color,
            size,
            corner_radius: CornerRadius::same(4),
            caption: None,
        }
    }

    #[inline]
    pub fn corner_radius(mut self, corner_radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = corner_radius.into();
        self
    }

    #[inline]
    pub fn caption(mut self, caption: impl Into<WidgetText>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl Widget for Swatch {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::hover());

        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, self.corner_radius, self.color);

            if let Some(caption) = &self.caption {
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    caption.text(),
                    FontId::proportional(14.0),
                    contrast_text_color(self.color),
                );
            }
        }

        response.on_hover_text(hex_string(self.color))
    }
}

/// Paints `gradient` over `[0, end]` as `segments` vertical bars.
pub fn gradient_strip(
    ui: &mut egui::Ui,
    gradient: &LinearColorGradient,
    end: f64,
    segments: usize,
    height: f32,
) -> egui::Response {
    let desired_size = egui::vec2(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

    if ui.is_rect_visible(rect) && segments > 0 && !gradient.is_empty() {
        let segment_width = rect.width() / segments as f32;
        for i in 0..segments {
            let point = end * i as f64 / segments as f64;
            let min = rect.left_top() + egui::vec2(segment_width * i as f32, 0.0);
            // overlap by one pixel so no seams show between bars
            let bar = egui::Rect::from_min_size(min, egui::vec2(segment_width + 1.0, height));
            ui.painter()
                .rect_filled(bar, CornerRadius::ZERO, gradient.sample(point).to_color32());
        }
    }

    response
}

/// Track color of a [`CandyToggle`], `how_on` runs from 0 (off) to 1 (on)
pub fn track_fill(off: Color32, accent: Color32, how_on: f32) -> Color32 {
    off.lerp(&accent, how_on.clamp(0.0, 1.0) as f64)
}

/// On/off switch whose track fades into an accent color, usually the current candy color
pub struct CandyToggle<'a> {
    on: &'a mut bool,
    accent: Option<Color32>,
}

impl<'a> CandyToggle<'a> {
    pub fn new(on: &'a mut bool) -> Self {
        Self { on, accent: None }
    }

    #[inline]
    pub fn accent(mut self, accent: impl Into<Color32>) -> Self {
        self.accent = Some(accent.into());
        self
    }
}

impl Widget for CandyToggle<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click());
        if response.clicked() {
            *self.on = !*self.on;
            response.mark_changed();
        }
        let on = *self.on;
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), on, "")
        });

        if ui.is_rect_visible(rect) {
            let how_on = ui.ctx().animate_bool_responsive(response.id, on);
            let visuals = ui.style().interact_selectable(&response, on);
            let accent = self
                .accent
                .unwrap_or(ui.visuals().selection.bg_fill);

            let rect = rect.expand(visuals.expansion);
            let radius = 0.5 * rect.height();
            ui.painter().rect(
                rect,
                radius,
                track_fill(visuals.bg_fill, accent, how_on),
                visuals.bg_stroke,
                egui::StrokeKind::Inside,
            );

            let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
            ui.painter().circle(
                egui::pos2(knob_x, rect.center().y),
                0.75 * radius,
                visuals.bg_fill,
                visuals.fg_stroke,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imcandy::palette;

    #[test]
    fn text_contrast() {
        assert_eq!(contrast_text_color(palette::COSMIC_LATTE), Color32::BLACK);
        assert_eq!(contrast_text_color(palette::DRACULA), Color32::WHITE);
        assert_eq!(contrast_text_color(palette::MANGO), Color32::BLACK);
    }

    #[test]
    fn track_fades_into_accent() {
        let off = Color32::from_rgb(60, 60, 60);
        assert_eq!(track_fill(off, palette::HOT_PINK, 0.0), off);
        assert_eq!(track_fill(off, palette::HOT_PINK, 1.0), palette::HOT_PINK);
        assert_eq!(track_fill(off, palette::HOT_PINK, 7.0), palette::HOT_PINK);
        assert_eq!(
            track_fill(Color32::BLACK, Color32::WHITE, 0.5),
            Color32::from_rgb(127, 127, 127)
        );
    }

    #[test]
    fn hex() {
        assert_eq!(hex_string(palette::CRIMSON), "#d31027");
    }
}
