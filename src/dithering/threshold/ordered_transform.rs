use std::fmt::Display;

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::{
    quantize::LevelSet,
    texture::{Shape, Shape2D, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
    utils::transform::precompute_tiled_rows,
};

/// Square bias matrix tiled over the image by coordinate modulo side size.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdMatrix {
    /// bias values, row-major
    values: &'static [f64],
    /// matrix order.
    ///
    /// > 2x2 is order 1, 4x4 is order 2, 8x8 is order 3
    order: usize,
    /// bits of side_size set to 1.
    ///
    /// > matrix side size == 2^order == sqrt(values.len())
    ///
    /// Used for faster % computations on power of 2s.
    ///
    /// > x % 2^k === x & (2^k - 1)
    side_mask: usize,
}

impl ThresholdMatrix {
    /// # Panics
    /// When `values` is not a `2^order x 2^order` grid.
    pub const fn new(order: usize, values: &'static [f64]) -> Self {
        let side_size = 1_usize << order;
        assert!(
            side_size * side_size == values.len(),
            "matrix order does not match matrix buffer length"
        );
        Self {
            values,
            order,
            side_mask: side_size - 1,
        }
    }

    pub const fn side_size(&self) -> usize {
        self.side_mask + 1
    }

    pub const fn order(&self) -> usize {
        self.order
    }

    pub const fn values(&self) -> &'static [f64] {
        self.values
    }

    /// Get the idx in the matrix corresponding to a pixel coordinate
    #[inline(always)]
    pub const fn bias_idx(&self, x: usize, y: usize) -> usize {
        ((y & self.side_mask) << self.order) + (x & self.side_mask)
    }

    /// Bias at pixel `(x, y)`, tiled.
    #[inline(always)]
    pub fn bias(&self, x: usize, y: usize) -> f64 {
        self.values[self.bias_idx(x, y)]
    }
}

/// Configuration for ordered transforms, shared for all
/// transform passes.
#[derive(Debug, Clone)]
pub struct OrderedConfig {
    matrix: ThresholdMatrix,
    levels: LevelSet<u8>,
}

impl OrderedConfig {
    pub fn new(matrix: ThresholdMatrix, levels: LevelSet<u8>) -> Self {
        Self { matrix, levels }
    }

    pub fn matrix(&self) -> &ThresholdMatrix {
        &self.matrix
    }

    pub fn levels(&self) -> &LevelSet<u8> {
        &self.levels
    }

    /// One tile-height of per-pixel offsets for rows `width` wide.
    ///
    /// > offset(x, y) = spread * M[y mod n][x mod n] - 0.5
    fn tiled_offsets(&self, width: usize) -> Vec<f64> {
        let spread = self.levels.spread();
        precompute_tiled_rows(self.matrix.side_size(), width, |x, y, _| {
            spread * self.matrix.bias(x, y) - 0.5
        })
    }
}

/// Strategy enum for selecting ordered transform implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedStrategy {
    /// Simple scalar implementation
    Scalar,
    /// Rows are independent, split them across the rayon pool.
    ScalarPar,
}

impl Display for OrderedStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderedStrategy::Scalar => write!(f, "scalar"),
            OrderedStrategy::ScalarPar => write!(f, "scalar-par"),
        }
    }
}

impl OrderedStrategy {
    /// Detect best-fit strategy
    pub fn auto(shape_hint: Shape2D) -> Self {
        let (width, height) = shape_hint;
        // estimated usable threads
        let par_hint = rayon::current_num_threads();

        if par_hint == 1 || width < 256 || width * height < 65536 {
            return Self::Scalar;
        }
        Self::ScalarPar
    }

    /// Create a transform instance for this strategy
    pub fn build(self, config: OrderedConfig) -> impl TextureTransform<Input = u8, Output = u8> {
        match self {
            Self::Scalar => OrderedTransformImpl::Scalar(Scalar::new(config)),
            Self::ScalarPar => OrderedTransformImpl::ScalarPar(ScalarPar::new(config)),
        }
    }
}

enum OrderedTransformImpl {
    Scalar(Scalar),
    ScalarPar(ScalarPar),
}

impl TextureTransform for OrderedTransformImpl {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        match self {
            OrderedTransformImpl::Scalar(t) => t.apply(input, output),
            OrderedTransformImpl::ScalarPar(t) => t.apply(input, output),
        }
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        match self {
            OrderedTransformImpl::Scalar(t) => t.prepare(in_shape, out_shape),
            OrderedTransformImpl::ScalarPar(t) => t.prepare(in_shape, out_shape),
        }
    }
}

/// Tiled offsets cached for one image width.
#[derive(Debug, Default)]
struct TiledCache {
    width: usize,
    offsets: Vec<f64>,
}

impl TiledCache {
    fn ensure(&mut self, config: &OrderedConfig, width: usize) {
        if self.width != width || self.offsets.is_empty() {
            self.offsets = config.tiled_offsets(width);
            self.width = width;
        }
    }

    /// Offsets for image row `y`.
    #[inline(always)]
    fn row(&self, config: &OrderedConfig, y: usize) -> &[f64] {
        let start = (y & config.matrix.side_mask) * self.width;
        &self.offsets[start..start + self.width]
    }
}

struct Scalar {
    config: OrderedConfig,
    cache: TiledCache,
}

impl Scalar {
    fn new(config: OrderedConfig) -> Self {
        Self {
            config,
            cache: TiledCache::default(),
        }
    }
}

impl TextureTransform for Scalar {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        if input.is_empty() {
            return (input, output);
        }
        let (width, _) = input.shape_2d();
        self.cache.ensure(&self.config, width);

        let (config, cache) = (&self.config, &self.cache);
        output
            .as_mut()
            .chunks_exact_mut(width)
            .zip(input.as_ref().chunks_exact(width))
            .enumerate()
            .for_each(|(y, (out_row, in_row))| {
                dither_row(in_row, out_row, cache.row(config, y), &config.levels);
            });

        (input, output)
    }

    fn prepare(&mut self, in_shape: Shape, _: Shape) {
        let (width, _, _) = in_shape;
        if width > 0 {
            self.cache.ensure(&self.config, width);
        }
    }
}

struct ScalarPar {
    config: OrderedConfig,
    cache: TiledCache,
}

impl ScalarPar {
    fn new(config: OrderedConfig) -> Self {
        Self {
            config,
            cache: TiledCache::default(),
        }
    }
}

impl TextureTransform for ScalarPar {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        if input.is_empty() {
            return (input, output);
        }
        let (width, _) = input.shape_2d();
        self.cache.ensure(&self.config, width);

        let (config, cache) = (&self.config, &self.cache);
        let in_buf = input.as_ref();
        output
            .as_mut()
            .par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(y, out_row)| {
                let in_row = &in_buf[y * width..(y + 1) * width];
                dither_row(in_row, out_row, cache.row(config, y), &config.levels);
            });

        (input, output)
    }

    fn prepare(&mut self, in_shape: Shape, _: Shape) {
        let (width, _, _) = in_shape;
        if width > 0 {
            self.cache.ensure(&self.config, width);
        }
    }
}

#[inline(always)]
fn dither_row(in_row: &[u8], out_row: &mut [u8], offsets: &[f64], levels: &LevelSet<u8>) {
    for ((out, &luma), &offset) in out_row.iter_mut().zip(in_row).zip(offsets) {
        *out = levels.quantize(luma as f64 + offset).level;
    }
}
