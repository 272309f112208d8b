//! Sharpcheck Adapters - External collaborators for sharpcheck.
//!
//! This crate provides:
//! - Image decoding via the `image` crate ([`CodecDecoder`])
//! - Filesystem scanning and the upload extension allowlist

pub mod decode;
pub mod fs;

pub use decode::CodecDecoder;
pub use fs::{collect_image_files, has_allowed_extension, load_pixels, ALLOWED_EXTENSIONS};
