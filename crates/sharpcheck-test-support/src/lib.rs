//! Test support utilities for sharpcheck.
//!
//! Provides synthetic pixel-buffer builders with known focus
//! characteristics, plus conversion to `image::DynamicImage` so integration
//! tests can write real encoded files to disk.

mod builders;

pub use builders::SyntheticImage;
