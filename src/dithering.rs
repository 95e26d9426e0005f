use std::{borrow::Cow, fmt::Display};

use image::RgbaImage;

use crate::{
    dithering::{error_diffusion::ErrorDiffusionType, threshold::ThresholdType},
    texture::{Texture, TextureMutSlice, TextureRef, TextureSlice},
    transform::{luminance::LuminanceTransform, traits::TextureTransform},
    utils::image::{compose_levels, rgba_texture},
};

pub mod error_diffusion;
pub mod threshold;

/// Closed set of algorithms a caller can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMethod {
    /// Identity, hands the source back untouched.
    #[default]
    None,
    Basic,
    FloydSteinberg,
    Bayer2x2,
    Bayer4x4,
    Bayer8x8,
}

impl Display for DitherMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Basic => write!(f, "{}", ErrorDiffusionType::Basic),
            Self::FloydSteinberg => write!(f, "{}", ErrorDiffusionType::FloydSteinberg),
            Self::Bayer2x2 => write!(f, "{}", ThresholdType::Bayer2x2),
            Self::Bayer4x4 => write!(f, "{}", ThresholdType::Bayer4x4),
            Self::Bayer8x8 => write!(f, "{}", ThresholdType::Bayer8x8),
        }
    }
}

impl DitherMethod {
    /// Every method, in selector id order.
    pub const ALL: [DitherMethod; 6] = [
        Self::None,
        Self::Basic,
        Self::FloydSteinberg,
        Self::Bayer2x2,
        Self::Bayer4x4,
        Self::Bayer8x8,
    ];

    /// Numeric selector, `0..=5` in [DitherMethod::ALL] order.
    ///
    /// Anything else is treated as [DitherMethod::None].
    pub fn from_id(id: i32) -> Self {
        usize::try_from(id)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or_else(|| {
                tracing::warn!(id, "unrecognized dither selector, falling back to none");
                Self::None
            })
    }

    pub fn id(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Basic => 1,
            Self::FloydSteinberg => 2,
            Self::Bayer2x2 => 3,
            Self::Bayer4x4 => 4,
            Self::Bayer8x8 => 5,
        }
    }

    /// Named selector, case insensitive, `-` and `_` interchangeable.
    ///
    /// Unknown names are treated as [DitherMethod::None].
    pub fn from_name(name: &str) -> Self {
        let clean = name.trim().to_lowercase().replace('-', "_");
        match clean.as_str() {
            "none" | "" => Self::None,
            "basic" => Self::Basic,
            "floyd_steinberg" | "floyd" | "fs" => Self::FloydSteinberg,
            "bayer_2x2" | "bayer2x2" | "bayer_2" => Self::Bayer2x2,
            "bayer_4x4" | "bayer4x4" | "bayer_4" => Self::Bayer4x4,
            "bayer_8x8" | "bayer8x8" | "bayer_8" => Self::Bayer8x8,
            _ => {
                tracing::warn!(name, "unrecognized dither selector, falling back to none");
                Self::None
            }
        }
    }

    /// Dither `image`.
    ///
    /// [DitherMethod::None] borrows the source back, every other method
    /// returns a freshly allocated image of the same size whose pixels are
    /// pure black or white and whose alpha is copied from the source.
    /// The source is never modified.
    pub fn apply<'a>(&self, image: &'a RgbaImage) -> Cow<'a, RgbaImage> {
        let (width, height) = image.dimensions();
        tracing::debug!(method = %self, width, height, "dither");

        if *self == Self::None {
            return Cow::Borrowed(image);
        }
        if width == 0 || height == 0 {
            return Cow::Owned(RgbaImage::new(width, height));
        }

        let source = rgba_texture(image);
        let mut luma = Texture::<u8>::new(width, height, 1);
        LuminanceTransform::auto(source.shape_2d())
            .build()
            .once(source, luma.as_texture_mut_slice());

        let mut levels = Texture::<u8>::new(width, height, 1);
        self.dither_plane(luma.as_texture_slice(), levels.as_texture_mut_slice());

        Cow::Owned(compose_levels(&levels, image))
    }

    /// Luminance plane -> level plane. A no-op for [DitherMethod::None].
    pub fn dither_plane(&self, luma: TextureSlice<'_, u8>, levels: TextureMutSlice<'_, u8>) {
        match self {
            Self::None => {}
            Self::Basic => ErrorDiffusionType::Basic.dither(luma, levels),
            Self::FloydSteinberg => ErrorDiffusionType::FloydSteinberg.dither(luma, levels),
            Self::Bayer2x2 => ThresholdType::Bayer2x2.dither(luma, levels),
            Self::Bayer4x4 => ThresholdType::Bayer4x4.dither(luma, levels),
            Self::Bayer8x8 => ThresholdType::Bayer8x8.dither(luma, levels),
        }
    }
}

/// Owned form of [DitherMethod::apply].
///
/// [DitherMethod::None] moves `image` straight back out.
pub fn dither_image(image: RgbaImage, method: DitherMethod) -> RgbaImage {
    if method == DitherMethod::None {
        return image;
    }
    method.apply(&image).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_id_round_trip() {
        for method in DitherMethod::ALL {
            assert_eq!(DitherMethod::from_id(method.id()), method);
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert_eq!(DitherMethod::from_id(-1), DitherMethod::None);
        assert_eq!(DitherMethod::from_id(6), DitherMethod::None);
        assert_eq!(DitherMethod::from_id(i32::MAX), DitherMethod::None);
    }

    #[test]
    fn test_names() {
        for method in DitherMethod::ALL {
            assert_eq!(DitherMethod::from_name(&method.to_string()), method);
        }
        assert_eq!(DitherMethod::from_name("Floyd-Steinberg"), DitherMethod::FloydSteinberg);
        assert_eq!(DitherMethod::from_name(" BAYER_8X8 "), DitherMethod::Bayer8x8);
        assert_eq!(DitherMethod::from_name("atkinson"), DitherMethod::None);
    }

    #[test]
    fn test_none_borrows_source() {
        let image = RgbaImage::from_pixel(3, 3, Rgba([12, 34, 56, 78]));
        let result = DitherMethod::None.apply(&image);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert!(std::ptr::eq(&*result, &image));
    }

    #[test]
    fn test_others_allocate() {
        let image = RgbaImage::from_pixel(3, 3, Rgba([12, 34, 56, 78]));
        for method in &DitherMethod::ALL[1..] {
            assert!(matches!(method.apply(&image), Cow::Owned(_)), "{method}");
        }
    }

    #[test]
    fn test_dither_image_none_moves_buffer() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        let ptr = image.as_raw().as_ptr();
        let result = dither_image(image, DitherMethod::None);
        assert_eq!(result.as_raw().as_ptr(), ptr);
    }

    #[test]
    fn test_degenerate_images() {
        for (width, height) in [(0, 0), (0, 4), (4, 0)] {
            let image = RgbaImage::new(width, height);
            for method in DitherMethod::ALL {
                let result = method.apply(&image);
                assert_eq!(result.dimensions(), (width, height), "{method}");
            }
        }
    }
}
