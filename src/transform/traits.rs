use crate::texture::{Shape, TextureMutSlice, TextureRef, TextureSlice};

/// A pass from one planar texture into another of the same width and height.
///
/// Luminance extraction and every dithering engine implement it. Slices are
/// borrowed per call and handed back, so one transform can be reused across
/// images of different sizes.
pub trait TextureTransform: Sized {
    type Input;
    type Output;

    /// Fill `output` from `input`, returning both slices.
    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    );

    /// Size any cached state for the shapes about to be passed to [TextureTransform::apply].
    fn prepare(&mut self, in_shape: Shape, out_shape: Shape);

    /// Single shot: [TextureTransform::prepare] then [TextureTransform::apply].
    fn once<'i, 'o>(
        mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> (
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    ) {
        self.prepare(input.shape(), output.shape());
        self.apply(input, output)
    }
}
