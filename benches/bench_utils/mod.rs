#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use monodither::texture::Texture;
use rand::Rng;

pub const BENCH_IMAGE_SIZE: u32 = 300;

pub fn gen_random_image(size: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(size, size, |_, _| Rgba(rng.random::<[u8; 4]>()))
}

pub fn gen_random_luma(size: u32) -> Texture<u8> {
    let mut rng = rand::rng();
    let buffer = (0..size as usize * size as usize)
        .map(|_| rng.random::<u8>())
        .collect();
    Texture::from_vec(size, size, 1, buffer)
}
