//! Value and gradient (Perlin) noise over the random lattice.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::tables::{RandomTables, TABLE_SIZE};

/// Base noise function sampled by the fractal and pattern layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseBasis {
    /// Bilinearly interpolated lattice values, range [0, 255].
    Value,
    /// Smoothstep-interpolated gradient noise, biased into [0, 2].
    #[default]
    Gradient,
}

impl NoiseBasis {
    /// Returns the name of the basis.
    pub fn name(&self) -> &'static str {
        match self {
            NoiseBasis::Value => "value",
            NoiseBasis::Gradient => "gradient",
        }
    }

    /// Evaluates this basis at a continuous point.
    #[inline]
    pub fn sample(&self, tables: &RandomTables, x: f64, y: f64) -> f64 {
        match self {
            NoiseBasis::Value => value_noise(tables, x, y),
            NoiseBasis::Gradient => perlin_noise(tables, x, y),
        }
    }
}

/// Linear interpolation `a(1 - t) + bt`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Cubic ease curve `t²(3 - 2t)`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Folds a lattice point into a table index through the permutation table.
///
/// Both coordinates may be negative; the result is always in `0..256`.
#[inline]
pub fn hashed_index(tables: &RandomTables, x: i64, y: i64) -> usize {
    let size = TABLE_SIZE as i64;
    let row = tables.permutation_at(y.rem_euclid(size) as usize) as i64;
    ((x.rem_euclid(size) + row) % size) as usize
}

/// Lattice cell containing `(x, y)`: the lower corner and the offset inside the cell.
///
/// The corner is reduced into one table period before the integer cast, so
/// any finite coordinate maps to a lattice point in `0..256`.
#[inline]
fn cell(x: f64, y: f64) -> (i64, i64, f64, f64) {
    let period = TABLE_SIZE as f64;
    let fx = x.floor();
    let fy = y.floor();
    (
        fx.rem_euclid(period) as i64,
        fy.rem_euclid(period) as i64,
        x - fx,
        y - fy,
    )
}

/// Value noise: bilinear interpolation of the four surrounding lattice values.
///
/// The interpolation weights are not eased, so derivatives jump across
/// lattice lines.
pub fn value_noise(tables: &RandomTables, x: f64, y: f64) -> f64 {
    let (qx0, qy0, tx, ty) = cell(x, y);
    let (qx1, qy1) = (qx0 + 1, qy0 + 1);

    let corner = |qx: i64, qy: i64| tables.value_at(hashed_index(tables, qx, qy)) as f64;
    let v00 = corner(qx0, qy0);
    let v01 = corner(qx1, qy0);
    let v10 = corner(qx0, qy1);
    let v11 = corner(qx1, qy1);

    lerp(lerp(v00, v01, tx), lerp(v10, v11, tx), ty)
}

/// Gradient (Perlin) noise remapped by `0.5 * n + 1`, so the output lies in [0, 2].
///
/// Exact lattice points evaluate to 1.0.
pub fn perlin_noise(tables: &RandomTables, x: f64, y: f64) -> f64 {
    let (qx0, qy0, tx0, ty0) = cell(x, y);
    let (qx1, qy1) = (qx0 + 1, qy0 + 1);
    let tx1 = tx0 - 1.0;
    let ty1 = ty0 - 1.0;

    let corner = |qx: i64, qy: i64, offset: DVec2| {
        tables.gradient_at(hashed_index(tables, qx, qy)).dot(offset)
    };
    let v00 = corner(qx0, qy0, DVec2::new(tx0, ty0));
    let v01 = corner(qx1, qy0, DVec2::new(tx1, ty0));
    let v10 = corner(qx0, qy1, DVec2::new(tx0, ty1));
    let v11 = corner(qx1, qy1, DVec2::new(tx1, ty1));

    let wx = smoothstep(tx0);
    let v0 = v00 + wx * (v01 - v00);
    let v1 = v10 + wx * (v11 - v10);

    let wy = smoothstep(ty0);
    (v0 + wy * (v1 - v0)) * 0.5 + 1.0
}
