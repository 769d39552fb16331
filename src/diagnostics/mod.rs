//! Run reports for the blur pipeline.
//!
//! `BlurReport` bundles the input and kernel descriptors with the stage
//! timings; the CLI writes it as JSON when `--report` is given.

pub mod report;
pub mod timing;

pub use report::{mean_intensity, BlurReport, InputDescriptor, KernelDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
