pub mod luminance;
pub mod traits;

pub mod prelude {
    pub use super::luminance::{LuminanceTransform, luminance};
    pub use super::traits::TextureTransform;
}
