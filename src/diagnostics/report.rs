use super::TimingBreakdown;
use crate::convolve::{EngineOptions, Strategy};
use crate::image::{GrayImage, ImageView};
use crate::kernel::WeightMatrix;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub max_value: u8,
}

impl InputDescriptor {
    pub fn from_image(image: &GrayImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            max_value: image.max_value(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelDescriptor {
    pub sigma: f64,
    pub order: usize,
    pub center: usize,
    pub center_weight: f64,
}

impl KernelDescriptor {
    pub fn from_kernel(kernel: &WeightMatrix) -> Self {
        let c = kernel.center();
        Self {
            sigma: kernel.sigma(),
            order: kernel.order(),
            center: c,
            center_weight: kernel.weight(c, c),
        }
    }
}

/// Summary of a completed blur run, serialized by `--report`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurReport {
    pub input: InputDescriptor,
    pub kernel: KernelDescriptor,
    pub strategy: Strategy,
    pub parallel: bool,
    /// Mean intensity before and after filtering; a unit-sum kernel with
    /// clamped borders keeps these close.
    pub mean_in: f64,
    pub mean_out: f64,
    pub timings: TimingBreakdown,
}

impl BlurReport {
    pub fn new(
        input: &GrayImage,
        output: &GrayImage,
        kernel: &WeightMatrix,
        options: EngineOptions,
        timings: TimingBreakdown,
    ) -> Self {
        Self {
            input: InputDescriptor::from_image(input),
            kernel: KernelDescriptor::from_kernel(kernel),
            strategy: options.strategy,
            parallel: options.parallel,
            mean_in: mean_intensity(input),
            mean_out: mean_intensity(output),
            timings,
        }
    }
}

pub fn mean_intensity(image: &GrayImage) -> f64 {
    let sum: u64 = image
        .rows()
        .map(|r| r.iter().map(|&v| u64::from(v)).sum::<u64>())
        .sum();
    sum as f64 / (image.width() * image.height()) as f64
}
