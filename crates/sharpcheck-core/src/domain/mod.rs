//! Core domain types for blur analysis.

mod buffer;
mod report;

pub use buffer::{FilterResponse, GrayscaleBuffer, PixelBuffer};
pub use report::{BlurReport, Classification, DEFAULT_THRESHOLD};
