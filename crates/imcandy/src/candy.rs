//! Animated colors, to be called once per frame.
//!
//! Every producer samples at the current progress, then moves it forward by
//! `step` and resets it to zero once it reaches the producer's period. The
//! progress lives with the caller, e.g. in the app state:
//!
//! ```
//! let mut ratio = 0.0;
//! let border = imcandy::candy::rainbow(&mut ratio, 0.01);
//! assert_eq!(border, imcandy::egui::Color32::RED);
//! ```
//!
//! High step values cause unpleasant flashes.

use std::sync::LazyLock;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::{
    color::Rgb,
    gradient::{Lerp, LinearGradient},
};

pub const DEFAULT_STEP: f64 = 0.01;

const RAINBOW_PERIOD: f64 = 6.0;

static RAINBOW: LazyLock<LinearGradient<Rgb>> = LazyLock::new(|| {
    [
        (0.0, Rgb::new(255.0, 0.0, 0.0)),
        (1.0, Rgb::new(255.0, 255.0, 0.0)),
        (2.0, Rgb::new(0.0, 255.0, 0.0)),
        (3.0, Rgb::new(0.0, 255.0, 255.0)),
        (4.0, Rgb::new(0.0, 0.0, 255.0)),
        (5.0, Rgb::new(255.0, 0.0, 255.0)),
        (RAINBOW_PERIOD, Rgb::new(255.0, 0.0, 0.0)),
    ]
    .into_iter()
    .collect()
});

fn advance(ratio: &mut f64, step: f64, period: f64) {
    *ratio += step;
    if *ratio >= period {
        *ratio = 0.0;
    }
}

/// Samples `gradient` at `ratio`, then advances `ratio` by `step`, wrapping at `period`.
///
/// # Panics
///
/// Panics if `gradient` has no key points.
pub fn cycle<T: Lerp>(
    gradient: &LinearGradient<T>,
    ratio: &mut f64,
    step: f64,
    period: f64,
) -> T {
    let value = gradient.sample(*ratio);
    advance(ratio, step, period);
    value
}

/// Red, yellow, green, cyan, blue, magenta and back to red.
///
/// `ratio` runs over `[0, 6)`, `step` is scaled to match [`PortableRainbow`]'s speed.
pub fn rainbow(ratio: &mut f64, step: f64) -> Color32 {
    cycle(&*RAINBOW, ratio, step * 6.0, RAINBOW_PERIOD).to_color32()
}

/// `col1 -> col2 -> col1`, `ratio` runs over `[0, 2)`. Alpha is ignored.
pub fn gradient2(col1: Color32, col2: Color32, ratio: &mut f64, step: f64) -> Color32 {
    let (col1, col2) = (Rgb::from(col1), Rgb::from(col2));
    let gradient: LinearGradient<Rgb> = [(0.0, col1), (1.0, col2), (2.0, col1)]
        .into_iter()
        .collect();

    cycle(&gradient, ratio, step, 2.0).to_color32()
}

/// `col1 -> col2 -> col3 -> col1`, `ratio` runs over `[0, 3)`. Alpha is ignored.
pub fn gradient3(
    col1: Color32,
    col2: Color32,
    col3: Color32,
    ratio: &mut f64,
    step: f64,
) -> Color32 {
    let (col1, col2, col3) = (Rgb::from(col1), Rgb::from(col2), Rgb::from(col3));
    let gradient: LinearGradient<Rgb> = [(0.0, col1), (1.0, col2), (2.0, col3), (3.0, col1)]
        .into_iter()
        .collect();

    cycle(&gradient, ratio, step, 3.0).to_color32()
}

/// Rainbow that keeps its own progress over `[0, 1)` and ramps channels
/// directly instead of going through a gradient.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PortableRainbow {
    ratio: f64,
}

impl PortableRainbow {
    pub const PERIOD: f64 = 1.0;

    pub fn new() -> Self {
        Default::default()
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn reset(&mut self) {
        self.ratio = 0.0;
    }

    pub fn next_color(&mut self, step: f64) -> Color32 {
        let normalized = (self.ratio * 256.0 * 6.0) as i32;
        let region = normalized / 256;
        let x = normalized % 256;

        let (r, g, b) = match region {
            0 => (255, x, 0),
            1 => (255 - x, 255, 0),
            2 => (0, 255, x),
            3 => (0, 255 - x, 255),
            4 => (x, 0, 255),
            5 => (255, 0, 255 - x),
            _ => (0, 0, 0),
        };

        advance(&mut self.ratio, step, Self::PERIOD);

        let channel = |v: i32| v.clamp(0, 255) as u8;
        Color32::from_rgb(channel(r), channel(g), channel(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_channel_diff(a: Color32, b: Color32) -> u8 {
        a.to_array()
            .iter()
            .zip(b.to_array())
            .map(|(x, y)| x.abs_diff(y))
            .max()
            .unwrap_or_default()
    }

    #[test]
    fn rainbow_steps_then_wraps() {
        let mut ratio = 0.0;
        let expected = [
            (Color32::from_rgb(255, 0, 0), 1.5),
            (Color32::from_rgb(128, 255, 0), 3.0),
            (Color32::from_rgb(0, 255, 255), 4.5),
            (Color32::from_rgb(128, 0, 255), 0.0),
            (Color32::from_rgb(255, 0, 0), 1.5),
        ];

        for (color, next_ratio) in expected {
            assert_eq!(rainbow(&mut ratio, 0.25), color);
            assert_eq!(ratio, next_ratio);
        }
    }

    #[test]
    fn rainbow_is_continuous() {
        let mut ratio = 0.0;
        let mut prev = rainbow(&mut ratio, 0.001);
        let mut wrapped = false;

        for _ in 0..2000 {
            let before = ratio;
            let color = rainbow(&mut ratio, 0.001);
            wrapped |= ratio < before;
            assert!(max_channel_diff(prev, color) <= 2, "{prev:?} -> {color:?}");
            prev = color;
        }

        assert!(wrapped);
    }

    #[test]
    fn gradient2_goes_there_and_back() {
        let mut ratio = 0.0;
        let grey = Color32::from_rgb(128, 128, 128);
        let expected = [
            (Color32::BLACK, 0.5),
            (grey, 1.0),
            (Color32::WHITE, 1.5),
            (grey, 0.0),
            (Color32::BLACK, 0.5),
        ];

        for (color, next_ratio) in expected {
            assert_eq!(
                gradient2(Color32::BLACK, Color32::WHITE, &mut ratio, 0.5),
                color
            );
            assert_eq!(ratio, next_ratio);
        }
    }

    #[test]
    fn gradient3_visits_every_color() {
        let mut ratio = 0.0;
        let colors: Vec<_> = (0..4)
            .map(|_| {
                gradient3(
                    Color32::RED,
                    Color32::GREEN,
                    Color32::BLUE,
                    &mut ratio,
                    1.0,
                )
            })
            .collect();

        assert_eq!(
            colors,
            vec![Color32::RED, Color32::GREEN, Color32::BLUE, Color32::RED]
        );
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn output_is_opaque() {
        let translucent = Color32::from_rgba_unmultiplied(255, 0, 0, 10);
        let mut ratio = 0.3;
        assert_eq!(
            gradient2(translucent, Color32::TRANSPARENT, &mut ratio, DEFAULT_STEP).a(),
            255
        );
        assert_eq!(rainbow(&mut ratio, DEFAULT_STEP).a(), 255);
    }

    #[test]
    fn cycle_with_custom_gradient() {
        let gradient: LinearGradient<f64> = [(0.0, 0.0), (10.0, 100.0)].into_iter().collect();
        let mut ratio = 0.0;
        let values: Vec<_> = (0..4)
            .map(|_| cycle(&gradient, &mut ratio, 4.0, 10.0))
            .collect();

        assert_eq!(values, vec![0.0, 40.0, 80.0, 0.0]);
    }

    #[test]
    fn portable_rainbow_ramps_each_region() {
        let mut rainbow = PortableRainbow::new();
        let expected = [
            (255, 0, 0),
            (255, 192, 0),
            (127, 255, 0),
            (0, 255, 64),
            (0, 255, 255),
            (0, 63, 255),
            (128, 0, 255),
            (255, 0, 191),
        ];

        for (r, g, b) in expected {
            assert_eq!(rainbow.next_color(0.125), Color32::from_rgb(r, g, b));
        }

        assert_eq!(rainbow.ratio(), 0.0);
    }

    #[test]
    fn negative_step_freezes_rainbow() {
        let mut ratio = 0.0;
        for _ in 0..10 {
            assert_eq!(rainbow(&mut ratio, -0.01), Color32::RED);
        }
        assert!(ratio < -0.5);
    }

    #[test]
    fn portable_rainbow_negative_step_clamps_then_goes_black() {
        let mut rainbow = PortableRainbow::new();
        assert_eq!(rainbow.next_color(-0.125), Color32::RED);
        // x is negative here, green clamps to zero
        assert_eq!(rainbow.next_color(-0.125), Color32::RED);
        // region -1 is outside the wheel
        assert_eq!(rainbow.next_color(-0.125), Color32::BLACK);
        assert_eq!(rainbow.ratio(), -0.375);
    }

    #[test]
    fn portable_rainbow_reset() {
        let mut rainbow = PortableRainbow::new();
        rainbow.next_color(DEFAULT_STEP);
        assert_eq!(rainbow.ratio(), DEFAULT_STEP);
        rainbow.reset();
        assert_eq!(rainbow.next_color(DEFAULT_STEP), Color32::RED);
    }
}
