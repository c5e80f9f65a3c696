//! Two-pass texture synthesis: evaluate a pattern over the grid, then
//! rescale the raw field into 8-bit intensities.

use std::sync::Arc;

use rayon::prelude::*;

use super::buffer::Texture;
use super::config::{SynthError, TextureConfig};
use crate::noise::RandomTables;
use crate::pattern::{Pattern, PatternLibrary};

/// Intensity written to every pixel when the raw field has no usable range.
pub const FALLBACK_INTENSITY: u8 = 128;

/// Drives a pattern over a square grid and normalizes the result.
#[derive(Debug, Clone)]
pub struct TextureSynthesizer {
    config: TextureConfig,
    tables: Arc<RandomTables>,
    texture: Texture,
    raw_range: Option<(f64, f64)>,
}

impl TextureSynthesizer {
    /// Validates `config` and builds fresh random tables from its seed.
    pub fn new(config: TextureConfig) -> Result<Self, SynthError> {
        config.validate()?;
        let tables = Arc::new(RandomTables::new(config.seed));
        Self::with_tables(config, tables)
    }

    /// Creates a synthesizer that shares existing tables.
    ///
    /// `config.seed` is ignored; the tables are used as given.
    pub fn with_tables(config: TextureConfig, tables: Arc<RandomTables>) -> Result<Self, SynthError> {
        config.validate()?;
        let texture = Texture::new(config.image_size);
        Ok(Self {
            config,
            tables,
            texture,
            raw_range: None,
        })
    }

    pub fn config(&self) -> &TextureConfig {
        &self.config
    }

    /// The most recently synthesized texture (black before the first run).
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Global `(min, max)` of the raw field from the last run.
    pub fn raw_range(&self) -> Option<(f64, f64)> {
        self.raw_range
    }

    /// Synthesizes `pattern` (cloud when `None`) into the owned texture.
    pub fn make_texture(&mut self, pattern: Option<Pattern>) -> &Texture {
        let pattern = pattern.unwrap_or_default();
        let tables = Arc::clone(&self.tables);
        let library = PatternLibrary::new(&tables, self.config.fractal());

        tracing::debug!(
            pattern = pattern.kind.name(),
            basis = pattern.basis.name(),
            size = self.config.image_size,
            "synthesizing texture"
        );

        self.make_texture_with(|x, y| library.sample(pattern, x as f64, y as f64))
    }

    /// Synthesizes an arbitrary pattern function of pixel `(x, y)`.
    ///
    /// Rows are evaluated in parallel; normalization starts only after the
    /// minimum and maximum of the whole grid are known.
    pub fn make_texture_with<F>(&mut self, pattern: F) -> &Texture
    where
        F: Fn(u32, u32) -> f64 + Sync,
    {
        let size = self.config.image_size;
        let mut raw = vec![0.0f64; self.config.pixel_count()];

        raw.par_chunks_mut(size as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, value) in row.iter_mut().enumerate() {
                    *value = pattern(x as u32, y as u32);
                }
            });

        let (min, max) = normalize_field(&raw, self.texture.as_raw_mut());
        self.raw_range = Some((min, max));
        &self.texture
    }
}

/// Rescales `raw` into `out` using the global minimum and maximum of `raw`.
///
/// Each pixel becomes `floor((v - min) / (max - min) * 255)`. When
/// `max - min` is zero or not finite, every pixel is set to
/// [`FALLBACK_INTENSITY`]. Returns the `(min, max)` that was used.
pub fn normalize_field(raw: &[f64], out: &mut [u8]) -> (f64, f64) {
    debug_assert_eq!(raw.len(), out.len());

    let (min, max) = raw
        .par_iter()
        .fold(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        )
        .reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |a, b| (a.0.min(b.0), a.1.max(b.1)),
        );

    let range = max - min;
    if !(range.is_finite() && range > 0.0) {
        tracing::warn!(
            min,
            max,
            fallback = FALLBACK_INTENSITY,
            "degenerate value range, using fallback intensity"
        );
        out.par_iter_mut().for_each(|p| *p = FALLBACK_INTENSITY);
        return (min, max);
    }

    tracing::debug!(min, max, "normalizing raw field");
    out.par_iter_mut()
        .zip(raw.par_iter())
        .for_each(|(p, &v)| {
            *p = ((v - min) / range * 255.0).floor().clamp(0.0, 255.0) as u8;
        });

    (min, max)
}
