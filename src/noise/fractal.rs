//! Multi-octave fractal Brownian motion (fBm) noise summation.

use serde::{Deserialize, Serialize};

use super::evaluator::NoiseBasis;
use super::tables::RandomTables;

/// Configuration for multi-octave fractal noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalNoiseConfig {
    /// Number of noise octaves.
    pub octaves: u8,
    /// Frequency of the first octave, normally `1 / image_size`.
    pub frequency: f64,
    /// Frequency multiplier per octave (typically 2.0).
    pub lacunarity: f64,
    /// Amplitude decay per octave (typically 0.5).
    pub persistence: f64,
}

impl Default for FractalNoiseConfig {
    fn default() -> Self {
        Self::for_image_size(512)
    }
}

impl FractalNoiseConfig {
    /// Creates the standard 8-octave configuration for a square image.
    ///
    /// The first octave spans the whole image: `frequency = 1 / image_size`.
    pub fn for_image_size(image_size: u32) -> Self {
        Self {
            octaves: 8,
            frequency: 1.0 / image_size as f64,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }

    /// Sum of the octave amplitudes, i.e. the gain applied to the basis range.
    pub fn amplitude_sum(&self) -> f64 {
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amplitude;
            amplitude *= self.persistence;
        }
        total
    }
}

/// Samples fractal noise at `(x, y)` in pixel units.
///
/// Each octave evaluates `basis` at `(x * frequency, y * frequency)`, weights
/// it by the current amplitude (starting at 1.0), then doubles the frequency
/// (by `lacunarity`) and decays the amplitude by `persistence`.
///
/// The sum is not normalized: its range is the basis range scaled by
/// [`FractalNoiseConfig::amplitude_sum`].
pub fn sample_fractal_noise(
    tables: &RandomTables,
    basis: NoiseBasis,
    x: f64,
    y: f64,
    config: &FractalNoiseConfig,
) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = config.frequency;

    for _ in 0..config.octaves {
        total += basis.sample(tables, x * frequency, y * frequency) * amplitude;
        frequency *= config.lacunarity;
        amplitude *= config.persistence;
    }

    total
}
