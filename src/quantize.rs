//! Nearest-level quantization of a real valued sample.

use num_traits::AsPrimitive;

use crate::error::{MonoditherError, Result};

/// Black and white, the only target every engine converges to.
pub const BINARY_LEVELS: [u8; 2] = [0, 255];

/// Outcome of quantizing one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantized<L> {
    /// closest level
    pub level: L,
    /// `sample - level`, what is left for error diffusion to carry
    pub residual: f64,
}

/// Ordered, non-empty set of allowed output levels.
///
/// Order matters: on equal distance the earlier level wins.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet<L> {
    levels: Vec<L>,
}

impl LevelSet<u8> {
    /// The `{0, 255}` set.
    pub fn binary() -> Self {
        Self {
            levels: BINARY_LEVELS.to_vec(),
        }
    }
}

impl<L> LevelSet<L>
where
    L: Copy + AsPrimitive<f64>,
{
    /// Fails with [MonoditherError::EmptyLevelSet] when `levels` is empty.
    pub fn new(levels: Vec<L>) -> Result<Self> {
        if levels.is_empty() {
            return Err(MonoditherError::EmptyLevelSet);
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[L] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Distance between neighbouring ordered-dither thresholds.
    ///
    /// > 255 / 2 = 127.5 for the binary set
    pub fn spread(&self) -> f64 {
        255.0 / self.levels.len() as f64
    }

    /// Closest level to `sample` and the signed residual.
    pub fn quantize(&self, sample: f64) -> Quantized<L> {
        let (level, distance) = nearest(sample, &self.levels);
        debug_assert!(distance.is_nan() || distance >= 0.0);
        Quantized {
            level,
            residual: sample - level.as_(),
        }
    }
}

/// Free form of [LevelSet::quantize] over a borrowed slice.
///
/// Fails with [MonoditherError::EmptyLevelSet] when `levels` is empty.
pub fn nearest_level<L>(sample: f64, levels: &[L]) -> Result<Quantized<L>>
where
    L: Copy + AsPrimitive<f64>,
{
    if levels.is_empty() {
        return Err(MonoditherError::EmptyLevelSet);
    }
    let (level, _) = nearest(sample, levels);
    Ok(Quantized {
        level,
        residual: sample - level.as_(),
    })
}

/// `levels` must be non-empty.
#[inline]
fn nearest<L>(sample: f64, levels: &[L]) -> (L, f64)
where
    L: Copy + AsPrimitive<f64>,
{
    let mut best = levels[0];
    let mut best_distance = (best.as_() - sample).abs();
    for &level in &levels[1..] {
        let distance = (level.as_() - sample).abs();
        // strict: ties keep the earlier level
        if distance < best_distance {
            best = level;
            best_distance = distance;
        }
    }
    (best, best_distance)
}
