pub mod image;
pub mod iterator;
pub(crate) mod transform;

pub mod prelude {
    pub use super::iterator::GridIterator;
}
