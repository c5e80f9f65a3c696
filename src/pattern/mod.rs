//! Texture patterns built on top of fractal noise.
//!
//! Every pattern maps a pixel coordinate to an unnormalized scalar; the
//! texture synthesizer rescales the resulting field into 8-bit intensities.

use serde::{Deserialize, Serialize};

use crate::noise::{FractalNoiseConfig, NoiseBasis, RandomTables, sample_fractal_noise};

/// The available texture patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Plain fBm over value noise.
    Value,
    /// Soft fBm clouds.
    #[default]
    Cloud,
    /// Concentric ring banding from a single noise octave.
    Wood,
    /// Sinusoidal veins warped by fBm.
    Marble,
}

impl PatternKind {
    /// Returns the name of the pattern.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Value => "value",
            PatternKind::Cloud => "cloud",
            PatternKind::Wood => "wood",
            PatternKind::Marble => "marble",
        }
    }

    /// Basis used when none is given explicitly.
    pub fn default_basis(&self) -> NoiseBasis {
        match self {
            PatternKind::Value => NoiseBasis::Value,
            PatternKind::Cloud | PatternKind::Wood | PatternKind::Marble => NoiseBasis::Gradient,
        }
    }

    /// Returns all patterns.
    pub fn all() -> [PatternKind; 4] {
        [
            PatternKind::Value,
            PatternKind::Cloud,
            PatternKind::Wood,
            PatternKind::Marble,
        ]
    }
}

/// A pattern together with the noise basis it is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub basis: NoiseBasis,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(PatternKind::default())
    }
}

impl Pattern {
    /// Creates a pattern using its default basis.
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            basis: kind.default_basis(),
        }
    }

    /// Replaces the noise basis.
    pub fn with_basis(self, basis: NoiseBasis) -> Self {
        Self { basis, ..self }
    }
}

/// Pattern functions evaluated against a shared set of random tables.
#[derive(Debug, Clone)]
pub struct PatternLibrary<'a> {
    tables: &'a RandomTables,
    fractal: FractalNoiseConfig,
}

impl<'a> PatternLibrary<'a> {
    /// Creates a library whose base frequency is the fractal config's first octave.
    pub fn new(tables: &'a RandomTables, fractal: FractalNoiseConfig) -> Self {
        Self { tables, fractal }
    }

    /// Creates a library with the standard fBm settings for `image_size`.
    pub fn for_image_size(tables: &'a RandomTables, image_size: u32) -> Self {
        Self::new(tables, FractalNoiseConfig::for_image_size(image_size))
    }

    /// Evaluates `pattern` at pixel `(x, y)`.
    pub fn sample(&self, pattern: Pattern, x: f64, y: f64) -> f64 {
        match pattern.kind {
            PatternKind::Value => self.value(x, y, pattern.basis),
            PatternKind::Cloud => self.cloud(x, y, pattern.basis),
            PatternKind::Wood => self.wood(x, y, pattern.basis),
            PatternKind::Marble => self.marble(x, y, pattern.basis),
        }
    }

    fn fbm(&self, x: f64, y: f64, basis: NoiseBasis) -> f64 {
        sample_fractal_noise(self.tables, basis, x, y, &self.fractal)
    }

    /// `fbm(4x, 4y)`, normally over value noise.
    pub fn value(&self, x: f64, y: f64, basis: NoiseBasis) -> f64 {
        self.fbm(4.0 * x, 4.0 * y, basis)
    }

    /// `fbm(4x, 4y)` over gradient noise by default.
    pub fn cloud(&self, x: f64, y: f64, basis: NoiseBasis) -> f64 {
        self.fbm(4.0 * x, 4.0 * y, basis)
    }

    /// Fractional part of ten times a single low-frequency noise sample.
    ///
    /// Uses `n - floor(n)` so the result stays in [0, 1) for negative `n` too.
    pub fn wood(&self, x: f64, y: f64, basis: NoiseBasis) -> f64 {
        let frequency = self.fractal.frequency;
        let n = basis.sample(self.tables, 4.0 * x * frequency, 4.0 * y * frequency) * 10.0;
        n - n.floor()
    }

    /// `(sin(16x·f + 4(n - 0.5)) + 1) / 2` with `n = fbm(8x, 8y)`, in [0, 1].
    pub fn marble(&self, x: f64, y: f64, basis: NoiseBasis) -> f64 {
        let frequency = self.fractal.frequency;
        let n = self.fbm(8.0 * x, 8.0 * y, basis);
        ((16.0 * x * frequency + 4.0 * (n - 0.5)).sin() + 1.0) * 0.5
    }
}
