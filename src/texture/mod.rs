//! Texture synthesis: pattern evaluation over a square grid and 8-bit normalization.

mod buffer;
mod config;
mod synth;

pub use buffer::Texture;
pub use config::{SynthError, TextureConfig, MAX_IMAGE_SIZE, MAX_OCTAVES};
pub use synth::{normalize_field, TextureSynthesizer, FALLBACK_INTENSITY};
