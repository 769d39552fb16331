//! Gaussian convolution of 8-bit images with clamp-to-edge borders.
//!
//! For every output pixel `(x, y)` the engine computes
//! `Σ_ki Σ_kj weight[ki][kj] · sample(x + kj - c, y + ki - c)` where `c` is the
//! kernel centre and `sample` clamps out-of-range coordinates to the nearest
//! edge pixel. Clamping moves weight onto border pixels instead of dropping
//! it, so the effective weights sum to one everywhere and edges keep their
//! brightness.
//!
//! Quantization truncates toward zero after adding `QUANTIZE_EPSILON`, which
//! absorbs the rounding error a unit-sum kernel accumulates on flat regions.
//!
//! Rows are independent: with the `parallel` feature, output rows can be
//! split across the rayon pool with no synchronization beyond the final
//! join.
mod direct;
pub mod options;
mod separable;

use crate::error::BlurResult;
use crate::image::{clamp_index, GrayImage, ImageView, ImageViewMut};
use crate::kernel::WeightMatrix;
use log::{debug, warn};

pub use options::{EngineOptions, Strategy};

/// Tolerance absorbed before truncating a weighted sum to `u8`.
pub const QUANTIZE_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, Default)]
pub struct ConvolutionEngine {
    options: EngineOptions,
}

impl ConvolutionEngine {
    pub fn new(options: EngineOptions) -> Self {
        if options.parallel && !cfg!(feature = "parallel") {
            warn!("parallel convolution requested but the `parallel` feature is disabled");
        }
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Convolve `image` with `kernel`, returning a new image with the same
    /// dimensions and max value. Fails with `KernelTooLarge` if the kernel
    /// does not fit inside the image.
    pub fn apply(&self, image: &GrayImage, kernel: &WeightMatrix) -> BlurResult<GrayImage> {
        let (w, h) = (image.width(), image.height());
        kernel.ensure_fits(w, h)?;

        let mut out = GrayImage::blank(w, h, image.max_value());
        let parallel = self.options.parallel;
        match self.options.strategy {
            Strategy::Direct => {
                direct::convolve(image.as_view(), kernel, out.as_mut_slice(), parallel)
            }
            Strategy::Separable => separable::convolve(
                image.as_view(),
                &kernel.separable_taps(),
                out.as_mut_slice(),
                parallel,
            ),
        }
        debug!(
            "convolved {w}x{h} with order {} ({}, parallel={parallel})",
            kernel.order(),
            self.options.strategy
        );
        Ok(out)
    }
}

/// Convolve with the default engine (direct, single-threaded).
pub fn apply(image: &GrayImage, kernel: &WeightMatrix) -> BlurResult<GrayImage> {
    ConvolutionEngine::default().apply(image, kernel)
}

/// Weight each input pixel receives when computing output `(x, y)` of a
/// `width × height` image, after clamping. Row-major, `width * height` long.
pub fn clamped_footprint(
    kernel: &WeightMatrix,
    width: usize,
    height: usize,
    x: usize,
    y: usize,
) -> Vec<f64> {
    let c = kernel.center() as isize;
    let mut footprint = vec![0.0; width * height];
    for ki in 0..kernel.order() {
        let sy = clamp_index(y as isize + ki as isize - c, height);
        for (kj, &wt) in kernel.row(ki).iter().enumerate() {
            let sx = clamp_index(x as isize + kj as isize - c, width);
            footprint[sy * width + sx] += wt;
        }
    }
    footprint
}

#[inline]
pub(crate) fn quantize(acc: f64) -> u8 {
    (acc + QUANTIZE_EPSILON).clamp(0.0, 255.0) as u8
}

#[cfg(feature = "parallel")]
fn for_each_row<T, F>(buf: &mut [T], width: usize, parallel: bool, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    if parallel {
        use rayon::prelude::*;
        buf.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    } else {
        buf.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_row<T, F>(buf: &mut [T], width: usize, _parallel: bool, f: F)
where
    F: Fn(usize, &mut [T]),
{
    buf.chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
