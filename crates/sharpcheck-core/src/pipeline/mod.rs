//! Numeric pipeline stages.
//!
//! Each stage is a pure function over immutable buffers: grayscale
//! reduction, Laplacian filtering, variance computation, and threshold
//! classification. The [`crate::BlurAnalyzer`] sequences them.

pub mod classify;
pub mod grayscale;
pub mod laplacian;
pub mod variance;
