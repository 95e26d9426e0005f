use crate::{
    error::MonoditherError,
    texture::{Texture, TextureRef, TextureSlice},
};
use image::{DynamicImage, ImageReader, RgbaImage, imageops::FilterType};
use std::path::Path;

/// RGBA8 has four interleaved planes.
pub const RGBA_PLANES: u32 = 4;

pub fn read_image<P: AsRef<Path>>(path: P) -> crate::error::Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

/// Encoding format follows the file extension.
pub fn write_image<P: AsRef<Path>>(image: &RgbaImage, path: P) -> crate::error::Result {
    image.save(path).map_err(MonoditherError::ImageEncode)?;
    Ok(())
}

/// Borrow the raw RGBA buffer as a 4-plane texture, no copy.
pub fn rgba_texture(image: &RgbaImage) -> TextureSlice<'_, u8> {
    TextureSlice::new(image.width(), image.height(), RGBA_PLANES, image.as_raw())
}

/// Build a fresh RGBA image whose color channels all carry the pixel's level
/// and whose alpha is copied from `source`.
///
/// # Panics
/// When `levels` and `source` differ in size.
pub fn compose_levels(levels: &Texture<u8>, source: &RgbaImage) -> RgbaImage {
    assert_eq!(
        levels.shape_2d(),
        (source.width() as usize, source.height() as usize),
        "level plane and source image don't match"
    );
    let mut output = RgbaImage::new(source.width(), source.height());
    output
        .pixels_mut()
        .zip(source.pixels())
        .zip(levels.as_ref())
        .for_each(|((out, src), &level)| {
            out.0 = [level, level, level, src.0[3]];
        });
    output
}

/// Nearest neighbour upscale, keeps hard black/white edges.
///
/// Fails with [MonoditherError::Config] when the scaled size does not fit in `u32`.
pub fn upscale_nearest(image: &RgbaImage, scale: u32) -> crate::error::Result<RgbaImage> {
    if scale <= 1 {
        return Ok(image.clone());
    }
    let (Some(width), Some(height)) = (
        image.width().checked_mul(scale),
        image.height().checked_mul(scale),
    ) else {
        return Err(MonoditherError::Config(format!(
            "output_scale {scale} overflows a {}x{} image",
            image.width(),
            image.height()
        )));
    };
    Ok(image::imageops::resize(
        image,
        width,
        height,
        FilterType::Nearest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_rgba_texture_shape() {
        let image = RgbaImage::new(3, 2);
        let texture = rgba_texture(&image);
        assert_eq!(texture.shape(), (3, 2, 4));
        assert_eq!(texture.as_ref().len(), 24);
    }

    #[test]
    fn test_compose_levels_keeps_alpha() {
        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(0, 0, Rgba([10, 20, 30, 7]));
        source.put_pixel(1, 0, Rgba([200, 210, 220, 128]));
        let levels = Texture::from_vec(2, 1, 1, vec![0, 255]);

        let output = compose_levels(&levels, &source);
        assert_eq!(output.get_pixel(0, 0), &Rgba([0, 0, 0, 7]));
        assert_eq!(output.get_pixel(1, 0), &Rgba([255, 255, 255, 128]));
    }

    #[test]
    fn test_upscale_nearest_repeats_pixels() {
        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        source.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        let output = upscale_nearest(&source, 3).unwrap();
        assert_eq!(output.dimensions(), (6, 3));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(output.get_pixel(x, y), &Rgba([0, 0, 0, 255]));
                assert_eq!(output.get_pixel(x + 3, y), &Rgba([255, 255, 255, 255]));
            }
        }
    }

    #[test]
    fn test_upscale_by_one_is_a_copy() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4]));
        assert_eq!(upscale_nearest(&source, 1).unwrap(), source);
    }

    #[test]
    fn test_upscale_overflow_is_an_error() {
        let source = RgbaImage::new(2, 1);
        assert!(matches!(
            upscale_nearest(&source, u32::MAX),
            Err(MonoditherError::Config(_))
        ));
        // the height alone would still fit
        assert!(matches!(
            upscale_nearest(&source, u32::MAX / 2 + 1),
            Err(MonoditherError::Config(_))
        ));
    }
}
