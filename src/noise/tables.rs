//! Random gradient, value and permutation tables shared by every noise evaluation.

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Number of entries in each lookup table.
pub const TABLE_SIZE: usize = 256;

const UNIT_TOLERANCE: f64 = 1e-9;

/// Errors raised when building tables from explicit data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Gradient {index} is not unit length (length = {length})")]
    NonUnitGradient { index: usize, length: f64 },
    #[error("Permutation table is not a bijection: value {0} appears more than once")]
    DuplicatePermutation(u8),
}

/// Immutable lookup tables seeding value and gradient noise.
///
/// Built once and only read afterwards, so a single instance can be shared
/// across threads (typically behind an `Arc`).
#[derive(Debug, Clone, PartialEq)]
pub struct RandomTables {
    gradients: [DVec2; TABLE_SIZE],
    values: [u8; TABLE_SIZE],
    permutation: [u8; TABLE_SIZE],
}

impl RandomTables {
    /// Builds tables from a ChaCha8 generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }

    /// Builds tables by drawing from `rng`.
    ///
    /// Draw order: gradients (rejection sampled in the unit disk), then values,
    /// then the permutation shuffle.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let mut gradients = [DVec2::ZERO; TABLE_SIZE];
        for gradient in gradients.iter_mut() {
            *gradient = sample_unit_disk(rng);
        }
        for gradient in gradients.iter_mut() {
            let length = gradient.length();
            debug_assert!(length > 0.0, "rejection sampling produced a zero-length gradient");
            *gradient /= length;
        }

        let mut values = [0u8; TABLE_SIZE];
        for value in values.iter_mut() {
            *value = rng.gen_range(0..=255);
        }

        let mut permutation = [0u8; TABLE_SIZE];
        for (i, slot) in permutation.iter_mut().enumerate() {
            *slot = i as u8;
        }
        // Fisher-Yates, last index down to the first
        for i in (0..TABLE_SIZE).rev() {
            let j = rng.gen_range(0..=i);
            permutation.swap(i, j);
        }

        tracing::debug!(table_size = TABLE_SIZE, "built random noise tables");

        Self {
            gradients,
            values,
            permutation,
        }
    }

    /// Builds tables from explicit contents, checking the table invariants.
    ///
    /// Every gradient must be unit length and `permutation` must contain each
    /// index in `0..256` exactly once.
    pub fn from_parts(
        gradients: [DVec2; TABLE_SIZE],
        values: [u8; TABLE_SIZE],
        permutation: [u8; TABLE_SIZE],
    ) -> Result<Self, TableError> {
        for (index, gradient) in gradients.iter().enumerate() {
            let length = gradient.length();
            if !((length - 1.0).abs() <= UNIT_TOLERANCE) {
                return Err(TableError::NonUnitGradient { index, length });
            }
        }

        let mut seen = [false; TABLE_SIZE];
        for &entry in &permutation {
            if seen[entry as usize] {
                return Err(TableError::DuplicatePermutation(entry));
            }
            seen[entry as usize] = true;
        }

        Ok(Self {
            gradients,
            values,
            permutation,
        })
    }

    /// Unit gradient vector at `index` (mod table size).
    #[inline]
    pub fn gradient_at(&self, index: usize) -> DVec2 {
        self.gradients[index % TABLE_SIZE]
    }

    /// Scalar lattice value at `index` (mod table size).
    #[inline]
    pub fn value_at(&self, index: usize) -> u8 {
        self.values[index % TABLE_SIZE]
    }

    /// Permutation entry at `index` (mod table size).
    #[inline]
    pub fn permutation_at(&self, index: usize) -> u8 {
        self.permutation[index % TABLE_SIZE]
    }
}

/// Draws a point uniformly from the interior of the unit disk.
fn sample_unit_disk<R: Rng>(rng: &mut R) -> DVec2 {
    loop {
        let x = rng.gen_range(-1.0..=1.0);
        let y = rng.gen_range(-1.0..=1.0);
        if x * x + y * y < 1.0 {
            return DVec2::new(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_gradients() -> [DVec2; TABLE_SIZE] {
        let mut gradients = [DVec2::ZERO; TABLE_SIZE];
        for (i, g) in gradients.iter_mut().enumerate() {
            let angle = i as f64 / TABLE_SIZE as f64 * std::f64::consts::TAU;
            *g = DVec2::new(angle.cos(), angle.sin());
        }
        gradients
    }

    fn identity_permutation() -> [u8; TABLE_SIZE] {
        let mut permutation = [0u8; TABLE_SIZE];
        for (i, p) in permutation.iter_mut().enumerate() {
            *p = i as u8;
        }
        permutation
    }

    fn permutation_of(tables: &RandomTables) -> Vec<u8> {
        (0..TABLE_SIZE).map(|i| tables.permutation_at(i)).collect()
    }

    /// Rebuilds the tables draw by draw from an identically seeded generator.
    fn replay_draws(seed: u64) -> RandomTables {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut gradients = [DVec2::ZERO; TABLE_SIZE];
        for gradient in gradients.iter_mut() {
            *gradient = loop {
                let x: f64 = rng.gen_range(-1.0..=1.0);
                let y: f64 = rng.gen_range(-1.0..=1.0);
                if x * x + y * y < 1.0 {
                    break DVec2::new(x, y);
                }
            };
        }
        for gradient in gradients.iter_mut() {
            *gradient /= gradient.length();
        }

        let mut values = [0u8; TABLE_SIZE];
        for value in values.iter_mut() {
            *value = rng.gen_range(0..=255);
        }

        let mut permutation = identity_permutation();
        for i in (0..TABLE_SIZE).rev() {
            let j = rng.gen_range(0..=i);
            permutation.swap(i, j);
        }

        RandomTables::from_parts(gradients, values, permutation).unwrap()
    }

    #[test]
    fn test_tables_follow_draw_order() {
        for seed in [0, 3, 77, 4096] {
            assert_eq!(RandomTables::new(seed), replay_draws(seed), "seed {}", seed);
        }
    }

    #[test]
    fn test_shuffle_can_leave_elements_in_place() {
        // A shuffle that never swaps a slot with itself produces no fixed points.
        let fixed_points: usize = (0..32)
            .map(|seed| {
                let tables = RandomTables::new(seed);
                (0..TABLE_SIZE)
                    .filter(|&i| tables.permutation_at(i) as usize == i)
                    .count()
            })
            .sum();
        assert!(fixed_points > 0, "32 shuffles produced no fixed point");
    }

    #[test]
    fn test_permutation_is_bijection() {
        for seed in [0, 1, 42, 12345, u64::MAX] {
            let tables = RandomTables::new(seed);
            let mut sorted = permutation_of(&tables);
            sorted.sort_unstable();
            let expected: Vec<u8> = (0..=255).collect();
            assert_eq!(sorted, expected, "seed {} produced a non-bijective permutation", seed);
        }
    }

    #[test]
    fn test_gradients_are_unit_length() {
        let tables = RandomTables::new(7);
        for i in 0..TABLE_SIZE {
            let g = tables.gradient_at(i);
            assert!(
                (g.length() - 1.0).abs() < 1e-9,
                "Gradient {} has length {}",
                i,
                g.length()
            );
        }
    }

    #[test]
    fn test_values_vary() {
        let tables = RandomTables::new(99);
        let first = tables.value_at(0);
        assert!(
            (0..TABLE_SIZE).any(|i| tables.value_at(i) != first),
            "256 uniform draws should not all be equal"
        );
    }

    #[test]
    fn test_same_seed_same_tables() {
        let a = RandomTables::new(2024);
        let b = RandomTables::new(2024);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = RandomTables::new(1);
        let b = RandomTables::new(2);
        assert_ne!(permutation_of(&a), permutation_of(&b));
    }

    #[test]
    fn test_accessors_wrap_index() {
        let tables = RandomTables::new(3);
        assert_eq!(tables.permutation_at(256), tables.permutation_at(0));
        assert_eq!(tables.value_at(257), tables.value_at(1));
        assert_eq!(tables.gradient_at(511), tables.gradient_at(255));
    }

    #[test]
    fn test_from_parts_accepts_valid_tables() {
        let mut values = [0u8; TABLE_SIZE];
        values[0] = 200;
        values[1] = 50;
        let tables =
            RandomTables::from_parts(unit_gradients(), values, identity_permutation()).unwrap();
        assert_eq!(tables.value_at(0), 200);
        assert_eq!(tables.permutation_at(17), 17);
    }

    #[test]
    fn test_from_parts_rejects_duplicate_permutation() {
        let mut permutation = identity_permutation();
        permutation[10] = 3;
        let result = RandomTables::from_parts(unit_gradients(), [0; TABLE_SIZE], permutation);
        assert_eq!(result.unwrap_err(), TableError::DuplicatePermutation(3));
    }

    #[test]
    fn test_from_parts_rejects_non_unit_gradient() {
        let mut gradients = unit_gradients();
        gradients[5] = DVec2::new(0.5, 0.5);
        let result = RandomTables::from_parts(gradients, [0; TABLE_SIZE], identity_permutation());
        assert!(matches!(
            result,
            Err(TableError::NonUnitGradient { index: 5, .. })
        ));
    }
}
