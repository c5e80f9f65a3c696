//! Procedural grayscale texture synthesis.
//!
//! Builds random gradient/value/permutation tables, evaluates value and
//! gradient (Perlin) noise over them, sums octaves with fractal Brownian
//! motion and turns cloud, wood, marble and value patterns into normalized
//! 8-bit textures.

pub mod noise;
pub mod pattern;
pub mod texture;
pub mod export;

pub use noise::{FractalNoiseConfig, NoiseBasis, RandomTables};
pub use pattern::{Pattern, PatternKind, PatternLibrary};
pub use texture::{SynthError, Texture, TextureConfig, TextureSynthesizer, FALLBACK_INTENSITY};
