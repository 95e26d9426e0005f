/// A grid iterator that yields (x, y, pixel_idx) tuples in row-major order:
/// top to bottom, left to right.
///
/// Error diffusion relies on this exact order, every pixel sees the error
/// left behind by the pixels visited before it.
///
/// This iterator is designed to be completely inlined and optimized away
/// by the compiler, matching the performance of hand-written nested loops.
#[derive(Debug, Clone, Copy)]
pub struct GridIterator {
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    pixel_idx: usize,
}

impl GridIterator {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        // a grid with no columns has no rows worth visiting
        let height = if width == 0 { 0 } else { height };
        Self {
            width,
            height,
            x: 0,
            y: 0,
            pixel_idx: 0,
        }
    }
}

impl Iterator for GridIterator {
    type Item = (usize, usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.height {
            return None;
        }

        let result = (self.x, self.y, self.pixel_idx);

        self.pixel_idx += 1;
        self.x += 1;

        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIterator {
    #[inline]
    fn len(&self) -> usize {
        self.width * self.height - self.pixel_idx
    }
}
