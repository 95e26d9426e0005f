/// (width, height, planes)
pub type Shape = (usize, usize, usize);
/// (width, height)
pub type Shape2D = (usize, usize);

/// Trait defining ops available on Textures with
/// lendable inner buffer
pub trait TextureRef: AsRef<[Self::Inner]> {
    type Inner;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn planes(&self) -> u32;

    #[inline]
    fn shape(&self) -> Shape {
        (
            self.width() as usize,
            self.height() as usize,
            self.planes() as usize,
        )
    }

    #[inline]
    fn shape_2d(&self) -> Shape2D {
        (self.width() as usize, self.height() as usize)
    }

    /// No pixels to visit.
    #[inline]
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Buffer offset of the first plane of pixel `(x, y)`, `None` outside the grid.
    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        let (width, height, planes) = self.shape();
        (x < width && y < height).then(|| (y * width + x) * planes)
    }

    /// Bounds-checked read of the first plane at `(x, y)`.
    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<&Self::Inner> {
        self.index_of(x, y).map(|idx| &self.as_ref()[idx])
    }
}

/// Trait defining ops available on mutable
/// Textures
pub trait TextureMut: TextureRef + AsMut<[Self::Inner]> {
    /// Bounds-checked write access to the first plane at `(x, y)`.
    #[inline]
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Self::Inner> {
        let idx = self.index_of(x, y)?;
        Some(&mut self.as_mut()[idx])
    }
}

/// Texture with owned buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture<T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> TextureRef for Texture<T> {
    type Inner = T;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<T> TextureMut for Texture<T> {}

impl<T> Texture<T> {
    /// Wrap an existing buffer.
    ///
    /// # Panics
    /// When the buffer length does not match `width * height * planes`.
    pub fn from_vec(width: u32, height: u32, planes: u32, buffer: Vec<T>) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize * planes as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            planes,
            buffer,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buffer
    }

    pub fn as_texture_slice(&self) -> TextureSlice<'_, T> {
        TextureSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &self.buffer,
        }
    }

    pub fn as_texture_mut_slice(&mut self) -> TextureMutSlice<'_, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &mut self.buffer,
        }
    }
}

impl<T: Clone> Texture<T> {
    pub fn from_slice(width: u32, height: u32, planes: u32, slice: &[T]) -> Self {
        Self::from_vec(width, height, planes, slice.to_owned())
    }
}

impl<T: Default + Copy> Texture<T> {
    pub fn new(width: u32, height: u32, planes: u32) -> Self {
        Self {
            width,
            height,
            planes,
            buffer: vec![T::default(); width as usize * height as usize * planes as usize],
        }
    }

    pub fn with_shape(shape: Shape) -> Self {
        let (width, height, planes) = shape;
        Self::new(width as u32, height as u32, planes as u32)
    }
}

/// Texture with borrowed internal buffer
#[derive(Debug, Copy, Clone)]
pub struct TextureSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a [T],
}

impl<T> AsRef<[T]> for TextureSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<'a, T> TextureSlice<'a, T> {
    /// # Panics
    /// When the buffer length does not match `width * height * planes`.
    pub fn new(width: u32, height: u32, planes: u32, buffer: &'a [T]) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize * planes as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            planes,
            buffer,
        }
    }
}

#[derive(Debug)]
pub struct TextureMutSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a mut [T],
}

impl<T> AsRef<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> AsMut<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureMutSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<T> TextureMut for TextureMutSlice<'_, T> {}

impl<'a, T> TextureMutSlice<'a, T> {
    /// # Panics
    /// When the buffer length does not match `width * height * planes`.
    pub fn new(width: u32, height: u32, planes: u32, buffer: &'a mut [T]) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize * planes as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            planes,
            buffer,
        }
    }
}

pub mod prelude {
    pub use super::{Texture, TextureMut, TextureMutSlice, TextureRef, TextureSlice};
}
