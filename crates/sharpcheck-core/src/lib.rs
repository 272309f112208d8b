//! Sharpcheck Core - Focus measure and blur classification
//!
//! This crate contains the domain types and the numeric pipeline that turns
//! decoded pixel data into a sharpness score and a blur/clear decision:
//! grayscale reduction, discrete Laplacian filtering, population variance,
//! and threshold classification.
//!
//! Image decoding is a collaborator behind the [`ImageDecoder`] port; this
//! crate never touches compressed bytes, files, or the network.

pub mod analyzer;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;

pub use analyzer::BlurAnalyzer;
pub use domain::{
    BlurReport, Classification, FilterResponse, GrayscaleBuffer, PixelBuffer, DEFAULT_THRESHOLD,
};
pub use error::AnalysisError;
pub use ports::ImageDecoder;
