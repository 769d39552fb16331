//! Row-oriented access shared by the 8-bit and floating-point planes.
//!
//! The engine only ever needs whole rows; border handling clamps row and
//! column indices with `clamp_index` before reading.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    #[inline]
    fn get(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

pub trait ImageViewMut: ImageView {
    /// The whole backing buffer, `width` elements per row.
    fn as_mut_slice(&mut self) -> &mut [Self::Pixel];
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

/// Clamp a signed index into `[0, upper - 1]`.
///
/// `upper` must be non-zero; every image in this crate has positive
/// dimensions.
#[inline]
pub fn clamp_index(idx: isize, upper: usize) -> usize {
    debug_assert!(upper > 0, "clamp_index on an empty axis");
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
