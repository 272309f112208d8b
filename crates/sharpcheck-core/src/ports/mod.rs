//! Port definitions for the decode collaborator.

mod image_decoder;

pub use image_decoder::ImageDecoder;
