//! Bias tables for ordered dithering, row-major, centered near zero.
//!
//! Values are fixed. They set the visual signature of each pattern and are
//! not regenerated from the recursive Bayer construction.

/// 2x2, order 1
pub const BAYER_2X2: [f64; 4] = [
    -0.375, 0.125, //
    0.375, -0.125,
];

/// 4x4, order 2
pub const BAYER_4X4: [f64; 16] = [
    -0.46875, 0.03125, -0.34375, 0.15625, //
    0.28125, -0.21875, 0.40625, -0.09375, //
    -0.28125, 0.21875, -0.40625, 0.09375, //
    0.46875, -0.03125, 0.34375, -0.15625,
];

/// 8x8, order 3
pub const BAYER_8X8: [f64; 64] = [
    -0.515625, -0.015625, -0.390625, 0.109375, -0.484375, 0.015625, -0.359375, 0.140625, //
    0.234375, -0.265625, 0.359375, -0.140625, 0.265625, -0.234375, 0.390625, -0.109375, //
    -0.328125, 0.171875, -0.453125, 0.046875, -0.296875, 0.203125, -0.421875, 0.078125, //
    0.421875, -0.078125, 0.296875, -0.203125, 0.453125, -0.046875, 0.328125, -0.171875, //
    -0.46875, 0.03125, -0.34375, 0.15625, -0.5, 0.0, -0.375, 0.125, //
    0.28125, -0.21875, 0.40625, -0.09375, 0.25, -0.25, 0.375, -0.125, //
    -0.28125, 0.21875, -0.40625, 0.09375, -0.3125, 0.1875, -0.4375, 0.0625, //
    0.46875, -0.03125, 0.515625, -0.15625, 0.4375, -0.0625, 0.3125, -0.1875,
];
