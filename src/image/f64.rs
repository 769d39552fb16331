//! Owned single-channel f64 plane in row-major layout.
//!
//! Holds the intermediate of the separable strategy. Samples keep full
//! double precision so the two-pass result matches the direct 2-D sum.
#[derive(Clone, Debug)]
pub struct ImageF64 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f64>,
}

impl ImageF64 {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }
}

impl crate::image::traits::ImageView for ImageF64 {
    type Pixel = f64;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f64] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF64 {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
