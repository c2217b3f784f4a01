//! Keyframed linear gradients over any [`Lerp`] value

use std::{
    collections::BTreeMap,
    f64::consts::PI,
    ops::Bound::{Excluded, Unbounded},
};

use eframe::egui::Color32;
use ordered_float::NotNan;

use crate::{
    color::Rgb,
    error::{CandyError, Result},
};

/// Remaps the ratio between two key points, both ends are `[0, 1]`
pub type Interpolation = fn(f64) -> f64;

pub fn linear_interpolation(x: f64) -> f64 {
    x
}

/// Eases in and out around both key points.
pub fn cosine_interpolation(x: f64) -> f64 {
    1.0 - ((x * PI).cos() + 1.0) / 2.0
}

/// Values that can be blended between a lower and an upper bound.
pub trait Lerp: Clone {
    /// Returns `upper * t + self * (1 - t)`.
    fn lerp(&self, upper: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, upper: &Self, t: f64) -> Self {
        upper * t + self * (1.0 - t)
    }
}

impl Lerp for f32 {
    fn lerp(&self, upper: &Self, t: f64) -> Self {
        let t = t as f32;
        upper * t + self * (1.0 - t)
    }
}

impl<const N: usize> Lerp for [f64; N] {
    fn lerp(&self, upper: &Self, t: f64) -> Self {
        std::array::from_fn(|i| self[i].lerp(&upper[i], t))
    }
}

impl Lerp for Color32 {
    fn lerp(&self, upper: &Self, t: f64) -> Self {
        fn u8_lerp(v1: u8, v2: u8, factor: f64) -> u8 {
            (v1 as f64 * (1.0 - factor) + v2 as f64 * factor) as u8
        }

        Color32::from_rgba_premultiplied(
            u8_lerp(self.r(), upper.r(), t),
            u8_lerp(self.g(), upper.g(), t),
            u8_lerp(self.b(), upper.b(), t),
            u8_lerp(self.a(), upper.a(), t),
        )
    }
}

/// Ordered key points with interpolated lookup in between.
///
/// Sampling below the first key point or above the last one returns that key
/// point's value unchanged.
#[derive(Clone, Debug)]
pub struct LinearGradient<T> {
    key_points: BTreeMap<NotNan<f64>, T>,
    interpolation: Interpolation,
}

pub type LinearColorGradient = LinearGradient<Rgb>;

impl<T> Default for LinearGradient<T> {
    fn default() -> Self {
        Self::with_interpolation(linear_interpolation)
    }
}

impl<T> LinearGradient<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_interpolation(interpolation: Interpolation) -> Self {
        Self {
            key_points: BTreeMap::new(),
            interpolation,
        }
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// Inserts or overwrites the value at `position`, returning the old one.
    pub fn insert(&mut self, position: f64, value: T) -> Result<Option<T>> {
        let position = NotNan::new(position).map_err(|_| CandyError::NanKeyPoint)?;
        Ok(self.key_points.insert(position, value))
    }

    /// The value at `position`, inserted as `T::default()` first if missing.
    pub fn key_point_mut(&mut self, position: f64) -> Result<&mut T>
    where
        T: Default,
    {
        let position = NotNan::new(position).map_err(|_| CandyError::NanKeyPoint)?;
        Ok(self.key_points.entry(position).or_default())
    }

    pub fn get(&self, position: f64) -> Result<&T> {
        NotNan::new(position)
            .ok()
            .and_then(|key| self.key_points.get(&key))
            .ok_or(CandyError::KeyPointNotFound(position))
    }

    pub fn remove(&mut self, position: f64) -> Option<T> {
        let position = NotNan::new(position).ok()?;
        self.key_points.remove(&position)
    }

    pub fn len(&self) -> usize {
        self.key_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_points.is_empty()
    }

    /// Key points in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> {
        self.key_points.iter().map(|(pos, value)| (pos.into_inner(), value))
    }
}

impl<T: Lerp> LinearGradient<T> {
    /// Evaluates the gradient at `point`.
    ///
    /// # Panics
    ///
    /// Panics if the gradient has no key points.
    pub fn sample(&self, point: f64) -> T {
        let (Some((_, first)), Some((_, last))) = (
            self.key_points.first_key_value(),
            self.key_points.last_key_value(),
        ) else {
            panic!("cannot sample a gradient without key points");
        };

        let Ok(key) = NotNan::new(point) else {
            return first.clone();
        };

        let Some((upper_pos, upper)) = self.key_points.range((Excluded(key), Unbounded)).next()
        else {
            return last.clone();
        };

        let Some((lower_pos, lower)) = self.key_points.range(..=key).next_back() else {
            return upper.clone();
        };

        let (lower_pos, upper_pos) = (lower_pos.into_inner(), upper_pos.into_inner());
        let ratio = (point - lower_pos) / (upper_pos - lower_pos);
        self.interpolate(lower, upper, ratio)
    }

    fn interpolate(&self, lower: &T, upper: &T, ratio: f64) -> T {
        lower.lerp(upper, (self.interpolation)(ratio))
    }
}

impl<T> FromIterator<(f64, T)> for LinearGradient<T> {
    /// NaN positions are skipped.
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Self {
        let mut gradient = Self::new();
        gradient.key_points.extend(
            iter.into_iter()
                .filter_map(|(pos, value)| NotNan::new(pos).ok().map(|pos| (pos, value))),
        );
        gradient
    }
}
