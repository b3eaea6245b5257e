//! Trail Field
//!
//! The shared RGB buffer that agents mark, plus the per-frame diffuse and fade transform.
//!
//! Storage is row-major with `y` growing downward, so pixel `(x, y)` lives at
//! `y * width + x`. Every channel is an 8-bit intensity; arithmetic happens in
//! `f32` and is rounded back only once per frame.

use bevy_ecs::prelude::*;

use crate::error::SimError;

/// Colour channels per pixel (red, green, blue)
pub const CHANNELS: usize = 3;

/// One pixel of the trail field
pub type Rgb = [u8; CHANNELS];

/// Unmarked pixel
pub const BLACK: Rgb = [0; CHANNELS];

/// Value an agent writes into its current pixel
pub const TRAIL_WHITE: Rgb = [255; CHANNELS];

/// Weight of each cell in the 3x3 box kernel
const KERNEL_WEIGHT: f32 = 1.0 / 9.0;

/// Field size in pixels. Agents keep a copy for their boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub fn new(width: usize, height: usize) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::EmptyField { width, height });
        }
        Ok(Self { width, height })
    }

    /// Total number of pixels
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

/// Fade and diffusion rates, validated once at construction.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TrailParams {
    fade_rate: f32,
    diffuse_rate: f32,
}

impl TrailParams {
    /// Intensity lost per second
    pub const DEFAULT_FADE_RATE: f32 = 30.0;
    /// Blend weight toward the blurred field
    pub const DEFAULT_DIFFUSE_RATE: f32 = 0.95;

    /// `fade_rate` must be finite and non-negative, `diffuse_rate` must lie in `[0, 1]`.
    /// Out-of-range values are rejected rather than clamped.
    pub fn new(fade_rate: f32, diffuse_rate: f32) -> Result<Self, SimError> {
        if !fade_rate.is_finite() || fade_rate < 0.0 {
            return Err(SimError::FadeRate(fade_rate));
        }
        if !(0.0..=1.0).contains(&diffuse_rate) {
            return Err(SimError::DiffuseRate(diffuse_rate));
        }
        Ok(Self {
            fade_rate,
            diffuse_rate,
        })
    }

    pub fn fade_rate(&self) -> f32 {
        self.fade_rate
    }

    pub fn diffuse_rate(&self) -> f32 {
        self.diffuse_rate
    }
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            fade_rate: Self::DEFAULT_FADE_RATE,
            diffuse_rate: Self::DEFAULT_DIFFUSE_RATE,
        }
    }
}

/// Linear interpolation from `from` (at `t = 0`) to `to` (at `t = 1`).
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Round half-to-even and saturate into the 8-bit range.
fn quantize(value: f32) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// The W x H x 3 trail buffer.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TrailField {
    bounds: Bounds,
    pixels: Vec<Rgb>,
}

impl TrailField {
    /// Allocate an all-black field.
    pub fn new(width: usize, height: usize) -> Result<Self, SimError> {
        Ok(Self::with_bounds(Bounds::new(width, height)?))
    }

    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            pixels: vec![BLACK; bounds.area()],
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> usize {
        self.bounds.width
    }

    pub fn height(&self) -> usize {
        self.bounds.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.bounds
            .contains(x, y)
            .then(|| y * self.bounds.width + x)
    }

    /// Pixel at `(x, y)`, or `None` outside the field
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite one pixel. Returns false (and writes nothing) outside the field.
    pub fn set(&mut self, x: usize, y: usize, rgb: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = rgb;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, rgb: Rgb) {
        self.pixels.fill(rgb);
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate rows from top (`y = 0`) to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.bounds.width)
    }

    pub fn is_black(&self) -> bool {
        self.pixels.iter().all(|p| *p == BLACK)
    }

    /// Blur every channel with a 3x3 box kernel, blend toward the blur by
    /// `diffuse_rate`, subtract `fade_rate * dt` and store the rounded result.
    ///
    /// Pixels outside the field count as zero, so edges darken faster than the
    /// interior. Channels are processed independently and never mixed.
    /// A negative `dt` is treated as zero; a very large one fades the field to black.
    pub fn diffuse_and_fade(&mut self, params: &TrailParams, dt: f32) {
        debug_assert!(dt.is_finite(), "frame delta must be finite, got {dt}");
        let fade = params.fade_rate * dt.max(0.0);

        let len = self.pixels.len();
        let mut original = vec![0.0f32; len];
        let mut row_sums = vec![0.0f32; len];
        let mut blurred = vec![0.0f32; len];

        for channel in 0..CHANNELS {
            for (value, pixel) in original.iter_mut().zip(&self.pixels) {
                *value = f32::from(pixel[channel]);
            }

            box_blur(&original, &mut row_sums, &mut blurred, self.bounds);

            for ((pixel, &before), &after) in
                self.pixels.iter_mut().zip(&original).zip(&blurred)
            {
                let mixed = lerp(before, after, params.diffuse_rate);
                pixel[channel] = quantize((mixed - fade).max(0.0));
            }
        }
    }
}

/// 3x3 mean filter with zero padding, done as a horizontal then a vertical pass.
fn box_blur(src: &[f32], row_sums: &mut [f32], dst: &mut [f32], bounds: Bounds) {
    let Bounds { width, height } = bounds;

    for (row, sums) in src.chunks_exact(width).zip(row_sums.chunks_exact_mut(width)) {
        for x in 0..width {
            let left = if x > 0 { row[x - 1] } else { 0.0 };
            let right = if x + 1 < width { row[x + 1] } else { 0.0 };
            sums[x] = left + row[x] + right;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let up = if y > 0 { row_sums[i - width] } else { 0.0 };
            let down = if y + 1 < height { row_sums[i + width] } else { 0.0 };
            dst[i] = (up + row_sums[i] + down) * KERNEL_WEIGHT;
        }
    }
}
