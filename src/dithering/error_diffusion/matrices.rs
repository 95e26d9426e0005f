/// One neighbour receiving part of a pixel's residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffusionTap {
    /// column offset, may be negative
    pub dx: isize,
    /// row offset, always ahead of the current row or on it
    pub dy: usize,
    pub weight: u32,
}

/// Weighted neighbourhood a residual is spread over, each share is
/// `residual * weight / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffusionKernel {
    pub taps: &'static [DiffusionTap],
    pub divisor: u32,
}

impl DiffusionKernel {
    /// Sum of all tap weights, equals `divisor` when the kernel conserves error.
    pub fn weight_sum(&self) -> u32 {
        self.taps.iter().map(|tap| tap.weight).sum()
    }
}

const fn tap(dx: isize, dy: usize, weight: u32) -> DiffusionTap {
    DiffusionTap { dx, dy, weight }
}

/// ```text
///         X   7
///     3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    taps: &[tap(1, 0, 7), tap(-1, 1, 3), tap(0, 1, 5), tap(1, 1, 1)],
    divisor: 16,
};
