use std::fmt::Display;

use crate::{
    dithering::error_diffusion::matrices::{DiffusionKernel, FLOYD_STEINBERG},
    quantize::LevelSet,
    texture::{Shape, Texture, TextureMut, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
    utils::iterator::GridIterator,
};

pub mod matrices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDiffusionType {
    /// One running error carried across the whole scan.
    Basic,
    FloydSteinberg,
}

impl Display for ErrorDiffusionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorDiffusionType::Basic => write!(f, "basic"),
            ErrorDiffusionType::FloydSteinberg => write!(f, "floyd_steinberg"),
        }
    }
}

impl ErrorDiffusionType {
    /// Dither one luminance plane into a level plane.
    pub fn dither(self, input: TextureSlice<'_, u8>, output: TextureMutSlice<'_, u8>) {
        tracing::trace!(kernel = %self, "error diffusion");
        self.to_transform(LevelSet::binary()).once(input, output);
    }

    pub fn to_transform(
        self,
        levels: LevelSet<u8>,
    ) -> impl TextureTransform<Input = u8, Output = u8> {
        match self {
            ErrorDiffusionType::Basic => ErrorDiffusionImpl::Running(RunningError::new(levels)),
            ErrorDiffusionType::FloydSteinberg => {
                ErrorDiffusionImpl::Kernel(KernelDiffusion::new(FLOYD_STEINBERG, levels))
            }
        }
    }
}

enum ErrorDiffusionImpl {
    Running(RunningError),
    Kernel(KernelDiffusion),
}

impl TextureTransform for ErrorDiffusionImpl {
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
            ErrorDiffusionImpl::Running(t) => t.apply(input, output),
            ErrorDiffusionImpl::Kernel(t) => t.apply(input, output),
        }
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        match self {
            ErrorDiffusionImpl::Running(t) => t.prepare(in_shape, out_shape),
            ErrorDiffusionImpl::Kernel(t) => t.prepare(in_shape, out_shape),
        }
    }
}

/// Scalar ditherer: a single error value flows left to right and wraps from
/// the end of one row into the start of the next, it is never reset.
struct RunningError {
    levels: LevelSet<u8>,
}

impl RunningError {
    fn new(levels: LevelSet<u8>) -> Self {
        Self { levels }
    }
}

impl TextureTransform for RunningError {
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
        let (width, height) = input.shape_2d();
        let in_buf = input.as_ref();
        let out_buf = output.as_mut();

        let mut error = 0.0;
        for (_, _, idx) in GridIterator::new(width, height) {
            let sample = in_buf[idx] as f64 + error;
            let quantized = self.levels.quantize(sample);
            error = quantized.residual;
            out_buf[idx] = quantized.level;
        }

        (input, output)
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

/// Error diffusion through a [DiffusionKernel] with a per-pixel error buffer.
///
/// The buffer lives for one [TextureTransform::apply] call.
struct KernelDiffusion {
    kernel: DiffusionKernel,
    levels: LevelSet<u8>,
}

impl KernelDiffusion {
    fn new(kernel: DiffusionKernel, levels: LevelSet<u8>) -> Self {
        Self { kernel, levels }
    }
}

impl TextureTransform for KernelDiffusion {
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
        let (width, height) = input.shape_2d();
        let in_buf = input.as_ref();
        let out_buf = output.as_mut();

        let mut errors = Texture::<f64>::new(input.width(), input.height(), 1);
        for (x, y, idx) in GridIterator::new(width, height) {
            let sample = in_buf[idx] as f64 + errors.as_ref()[idx];
            let quantized = self.levels.quantize(sample);
            diffuse(&self.kernel, &mut errors, x, y, quantized.residual);
            out_buf[idx] = quantized.level;
        }

        (input, output)
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

/// Spread `residual` from `(x, y)` over the kernel taps.
///
/// Taps falling outside `errors` are dropped, their share is lost.
fn diffuse<E: TextureMut<Inner = f64>>(
    kernel: &DiffusionKernel,
    errors: &mut E,
    x: usize,
    y: usize,
    residual: f64,
) {
    let share = residual / kernel.divisor as f64;
    for tap in kernel.taps {
        let Some(nx) = x.checked_add_signed(tap.dx) else {
            continue;
        };
        if let Some(pending) = errors.get_mut(nx, y + tap.dy) {
            *pending += share * tap.weight as f64;
        }
    }
}
