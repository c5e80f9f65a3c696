//! Noise generation: random lattice tables, value/gradient noise and fBm.

mod tables;
mod evaluator;
mod fractal;

pub use tables::{RandomTables, TableError, TABLE_SIZE};
pub use evaluator::{NoiseBasis, hashed_index, lerp, perlin_noise, smoothstep, value_noise};
pub use fractal::{FractalNoiseConfig, sample_fractal_noise};
