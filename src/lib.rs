//! Two-level (black and white) dithering of RGBA raster images.
//!
//! ```no_run
//! use monodither::prelude::*;
//!
//! let image = image::open("photo.png").unwrap().to_rgba8();
//! let dithered = DitherMethod::FloydSteinberg.apply(&image);
//! dithered.save("photo-fs.png").unwrap();
//! ```

use image::{DynamicImage, RgbaImage};

use crate::{config::ProcessConfig, utils::image::upscale_nearest};

pub mod config;
pub mod dithering;
pub mod error;
pub mod quantize;
pub mod texture;
pub mod transform;
pub mod utils;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::config::ProcessConfig;
    pub use crate::dithering::{DitherMethod, dither_image};
    pub use crate::error::{MonoditherError, Result};
    pub use crate::quantize::{BINARY_LEVELS, LevelSet, Quantized};
    pub use crate::texture::prelude::*;
    pub use crate::transform::prelude::*;
}

/// Convert to RGBA8, dither with the configured method, then upscale.
pub fn run(config: &ProcessConfig, source: DynamicImage) -> crate::error::Result<RgbaImage> {
    let image = source.into_rgba8();
    let dithered = dithering::dither_image(image, config.dithering_type);

    if config.output_scale > 1 {
        tracing::debug!(scale = config.output_scale, "upscaling output");
        return upscale_nearest(&dithered, config.output_scale);
    }
    Ok(dithered)
}
