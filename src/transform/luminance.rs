use rayon::prelude::*;

use crate::{
    texture::{Shape, Shape2D, TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
};

/// Intensity of one pixel: the mean of its three color channels, rounded up.
///
/// Alpha never contributes.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u16 + g as u16 + b as u16;
    // ceil(sum / 3), max is 255
    sum.div_ceil(3) as u8
}

/// RGB(A) texture -> single plane intensity texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuminanceTransform {
    Seq,
    Par,
}

impl LuminanceTransform {
    pub fn auto(shape_hint: Shape2D) -> Self {
        let (width, height) = shape_hint;
        let count = width * height;

        if width < 450 || count < 202500 {
            return LuminanceTransform::Seq;
        }
        LuminanceTransform::Par
    }

    pub fn build(&self) -> impl TextureTransform<Input = u8, Output = u8> + use<> {
        match self {
            LuminanceTransform::Seq => LuminanceTransformImpl::Seq(LuminanceSeq {}),
            LuminanceTransform::Par => LuminanceTransformImpl::Par(LuminancePar {}),
        }
    }
}

enum LuminanceTransformImpl {
    Seq(LuminanceSeq),
    Par(LuminancePar),
}

impl TextureTransform for LuminanceTransformImpl {
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
            LuminanceTransformImpl::Seq(t) => t.apply(input, output),
            LuminanceTransformImpl::Par(t) => t.apply(input, output),
        }
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        match self {
            LuminanceTransformImpl::Seq(t) => t.prepare(in_shape, out_shape),
            LuminanceTransformImpl::Par(t) => t.prepare(in_shape, out_shape),
        };
    }
}

struct LuminanceSeq {}

impl TextureTransform for LuminanceSeq {
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
        if !input.is_empty() {
            scalar_impl(input.as_ref(), output.as_mut(), input.planes() as usize);
        }
        (input, output)
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

struct LuminancePar {}

impl TextureTransform for LuminancePar {
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
        if !input.is_empty() {
            scalar_par_impl(input.as_ref(), output.as_mut(), input.shape());
        }
        (input, output)
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

fn scalar_impl(in_buf: &[u8], out_buf: &mut [u8], planes: usize) {
    debug_assert!(planes == 3 || planes == 4);
    in_buf
        .chunks_exact(planes)
        .zip(out_buf.iter_mut())
        .for_each(|(pixel, out_pixel)| {
            *out_pixel = luminance(pixel[0], pixel[1], pixel[2]);
        });
}

fn scalar_par_impl(in_buf: &[u8], out_buf: &mut [u8], shape: Shape) {
    let (width, _, planes) = shape;
    debug_assert!(planes == 3 || planes == 4);
    out_buf
        .par_chunks_exact_mut(width)
        .zip(in_buf.par_chunks_exact(width * planes))
        .for_each(|(out_row, in_row)| {
            out_row
                .iter_mut()
                .zip(in_row.chunks_exact(planes))
                .for_each(|(out_pixel, in_pixel)| {
                    *out_pixel = luminance(in_pixel[0], in_pixel[1], in_pixel[2]);
                });
        });
}
