use image::{Rgba, RgbaImage};
use rand::Rng;

use crate::texture::Texture;

pub const TEST_IMAGE_SIZE: usize = 64;

pub fn rand_rgba(rng: &mut rand::rngs::ThreadRng) -> Rgba<u8> {
    Rgba(rng.random::<[u8; 4]>())
}

pub fn gen_random_image(width: u32, height: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(width, height, |_, _| rand_rgba(&mut rng))
}

pub fn gen_random_luma(width: u32, height: u32) -> Texture<u8> {
    let mut rng = rand::rng();
    let buffer = (0..width as usize * height as usize)
        .map(|_| rng.random::<u8>())
        .collect();
    Texture::from_vec(width, height, 1, buffer)
}

/// Horizontal ramp from black to white, fixed alpha.
pub fn gen_gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / width.saturating_sub(1).max(1)) as u8;
        Rgba([v, v, v, 255])
    })
}

pub fn is_black_or_white(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r == g && g == b && (r == 0 || r == 255)
}
