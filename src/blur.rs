//! End-to-end blur: validate σ, decode, build the kernel, convolve, encode.
//!
//! Errors are raised as early as the information allows: σ before any file
//! is opened, `KernelTooLarge` as soon as the header dimensions are known and
//! before the weight matrix is allocated.
use crate::convolve::{ConvolutionEngine, EngineOptions};
use crate::diagnostics::{timing::elapsed_ms, BlurReport, TimingBreakdown};
use crate::error::BlurResult;
use crate::image::{io, GrayImage, ImageView};
use crate::kernel;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// One invocation of the tool.
#[derive(Clone, Debug)]
pub struct BlurRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sigma: f64,
    pub engine: EngineOptions,
}

impl BlurRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, sigma: f64) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            sigma,
            engine: EngineOptions::default(),
        }
    }

    pub fn with_engine(mut self, engine: EngineOptions) -> Self {
        self.engine = engine;
        self
    }
}

/// Blur an in-memory image.
pub fn blur_image(image: &GrayImage, sigma: f64, options: EngineOptions) -> BlurResult<GrayImage> {
    let kernel = kernel::build_for_image(sigma, image.width(), image.height())?;
    ConvolutionEngine::new(options).apply(image, &kernel)
}

/// Read `request.input`, blur it, and write `request.output`.
pub fn blur_file(request: &BlurRequest) -> BlurResult<BlurReport> {
    let total_start = Instant::now();
    kernel::validate_sigma(request.sigma)?;

    let mut timings = TimingBreakdown::default();
    let input = timings.time("read", || io::load_pgm(&request.input))?;
    debug!(
        "decoded {} ({}x{}, max {})",
        request.input.display(),
        input.width(),
        input.height(),
        input.max_value()
    );

    let kernel = timings.time("kernel", || {
        kernel::build_for_image(request.sigma, input.width(), input.height())
    })?;

    let engine = ConvolutionEngine::new(request.engine);
    let output = timings.time("convolve", || engine.apply(&input, &kernel))?;
    timings.time("write", || io::save_pgm(&output, &request.output))?;
    timings.total_ms = elapsed_ms(total_start);

    info!(
        "blurred {} -> {} (sigma={}, order={}, {:.2} ms)",
        request.input.display(),
        request.output.display(),
        request.sigma,
        kernel.order(),
        timings.total_ms
    );
    Ok(BlurReport::new(
        &input,
        &output,
        &kernel,
        request.engine,
        timings,
    ))
}
