//! Texture synthesis configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noise::FractalNoiseConfig;

/// Largest accepted texture edge in pixels.
pub const MAX_IMAGE_SIZE: u32 = 8192;

/// Largest accepted fBm octave count.
pub const MAX_OCTAVES: u8 = 16;

/// Errors raised when a synthesizer is configured with invalid parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthError {
    #[error("Invalid image size {0}: must be between 1 and 8192")]
    InvalidImageSize(u32),
    #[error("Invalid octave count {0}: must be between 1 and 16")]
    InvalidOctaves(u8),
    #[error("Invalid persistence {0}: must be a positive finite number")]
    InvalidPersistence(f64),
    #[error("Invalid lacunarity {0}: must be a positive finite number")]
    InvalidLacunarity(f64),
}

/// Parameters for a texture synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureConfig {
    /// Width and height of the square output texture in pixels.
    pub image_size: u32,
    /// Seed for the random lattice tables.
    pub seed: u64,
    /// Number of fBm octaves.
    pub octaves: u8,
    /// Frequency multiplier per octave.
    pub lacunarity: f64,
    /// Amplitude decay per octave.
    pub persistence: f64,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            image_size: 512,
            seed: 42,
            octaves: 8,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl TextureConfig {
    /// Creates the default configuration for the given size and seed.
    pub fn new(image_size: u32, seed: u64) -> Self {
        Self {
            image_size,
            seed,
            ..Default::default()
        }
    }

    /// Checks every parameter, returning the first invalid one.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.image_size == 0 || self.image_size > MAX_IMAGE_SIZE {
            return Err(SynthError::InvalidImageSize(self.image_size));
        }
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(SynthError::InvalidOctaves(self.octaves));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(SynthError::InvalidPersistence(self.persistence));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(SynthError::InvalidLacunarity(self.lacunarity));
        }
        Ok(())
    }

    /// fBm settings derived from this configuration; the base frequency is `1 / image_size`.
    pub fn fractal(&self) -> FractalNoiseConfig {
        FractalNoiseConfig {
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            persistence: self.persistence,
            ..FractalNoiseConfig::for_image_size(self.image_size)
        }
    }

    /// Number of pixels in the output texture.
    pub fn pixel_count(&self) -> usize {
        (self.image_size as usize) * (self.image_size as usize)
    }
}
