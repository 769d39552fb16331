//! Gaussian smoothing for 8-bit binary PGM images.
//!
//! The core is two pieces: [`kernel`] builds a normalized, odd-ordered 2-D
//! Gaussian weight matrix from σ, and [`convolve`] applies it with
//! clamp-to-edge borders. [`image::pgm`] reads and writes the raster format
//! and [`blur`] ties the steps together for the command-line tool.

pub mod blur;
pub mod config;
pub mod convolve;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod kernel;

// --- High-level re-exports -------------------------------------------------

pub use crate::blur::{blur_file, blur_image, BlurRequest};
pub use crate::convolve::{ConvolutionEngine, EngineOptions, Strategy};
pub use crate::diagnostics::BlurReport;
pub use crate::error::{BlurError, BlurResult};
pub use crate::image::GrayImage;
pub use crate::kernel::WeightMatrix;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use gaussian_blur::prelude::*;
///
/// let img = GrayImage::new(5, 5, 255, vec![128; 25]).unwrap();
/// let kernel = kernel::build(0.5).unwrap();
/// let out = ConvolutionEngine::default().apply(&img, &kernel).unwrap();
/// assert_eq!(out.data(), img.data());
/// ```
pub mod prelude {
    pub use crate::image::{GrayImage, ImageView};
    pub use crate::kernel;
    pub use crate::{ConvolutionEngine, EngineOptions, Strategy, WeightMatrix};
}
