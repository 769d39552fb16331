//! Owned 8-bit grayscale raster with the declared PGM maximum value.
use super::{ImageU8, ImageView, ImageViewMut};
use crate::error::{BlurError, BlurResult};

/// Owned single-channel 8-bit image in row-major order.
///
/// `max_value` is the sample ceiling declared by the file header. It is
/// carried through filtering unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    max_value: u8,
    data: Vec<u8>,
}

impl GrayImage {
    /// Construct from raw samples, checking `data.len() == width * height`.
    pub fn new(width: usize, height: usize, max_value: u8, data: Vec<u8>) -> BlurResult<Self> {
        if width == 0 || height == 0 {
            return Err(BlurError::InvalidImage(format!(
                "dimensions must be positive (got {width}x{height})"
            )));
        }
        if max_value == 0 {
            return Err(BlurError::InvalidImage("max value must be positive".into()));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            BlurError::InvalidImage(format!("dimensions {width}x{height} overflow"))
        })?;
        if data.len() != expected {
            return Err(BlurError::InvalidImage(format!(
                "buffer holds {} samples, {width}x{height} needs {expected}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            max_value,
            data,
        })
    }

    /// Zero-filled image, used for engine output buffers.
    pub(crate) fn blank(width: usize, height: usize, max_value: u8) -> Self {
        Self {
            width,
            height,
            max_value,
            data: vec![0; width * height],
        }
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view.
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            data: &self.data,
        }
    }
}

impl ImageView for GrayImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImage {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
