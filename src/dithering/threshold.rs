pub mod matrices;
pub mod ordered_transform;

use std::fmt::Display;

use crate::{
    dithering::threshold::{
        matrices::{BAYER_2X2, BAYER_4X4, BAYER_8X8},
        ordered_transform::{OrderedConfig, OrderedStrategy, ThresholdMatrix},
    },
    quantize::LevelSet,
    texture::{TextureMutSlice, TextureRef, TextureSlice},
    transform::traits::TextureTransform,
};

pub const BAYER_2X2_MATRIX: ThresholdMatrix = ThresholdMatrix::new(1, &BAYER_2X2);
pub const BAYER_4X4_MATRIX: ThresholdMatrix = ThresholdMatrix::new(2, &BAYER_4X4);
pub const BAYER_8X8_MATRIX: ThresholdMatrix = ThresholdMatrix::new(3, &BAYER_8X8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdType {
    Bayer2x2,
    Bayer4x4,
    Bayer8x8,
}

impl Display for ThresholdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdType::Bayer2x2 => write!(f, "bayer_2x2"),
            ThresholdType::Bayer4x4 => write!(f, "bayer_4x4"),
            ThresholdType::Bayer8x8 => write!(f, "bayer_8x8"),
        }
    }
}

impl ThresholdType {
    pub const fn matrix(self) -> ThresholdMatrix {
        match self {
            ThresholdType::Bayer2x2 => BAYER_2X2_MATRIX,
            ThresholdType::Bayer4x4 => BAYER_4X4_MATRIX,
            ThresholdType::Bayer8x8 => BAYER_8X8_MATRIX,
        }
    }

    /// Quickly dither 1 luminance plane. Prefer using [ThresholdType::to_transform] for repeated passes.
    pub fn dither(self, input: TextureSlice<'_, u8>, output: TextureMutSlice<'_, u8>) {
        let strategy = OrderedStrategy::auto(input.shape_2d());
        tracing::debug!(matrix = %self, %strategy, "ordered dither");
        strategy
            .build(self.to_transform_config())
            .once(input, output);
    }

    pub fn to_transform(
        self,
        strategy: OrderedStrategy,
    ) -> impl TextureTransform<Input = u8, Output = u8> {
        strategy.build(self.to_transform_config())
    }

    fn to_transform_config(self) -> OrderedConfig {
        OrderedConfig::new(self.matrix(), LevelSet::binary())
    }
}
