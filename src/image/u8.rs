/// Borrowed, read-only 8-bit grayscale view (row-major, `stride == w`).
///
/// This is what the convolution engine consumes: the input buffer is never
/// mutated while a filter runs.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a [u8],
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{clamp_index, GrayImage, ImageView};

    #[test]
    fn view_borrows_owner_rows() {
        let img = GrayImage::new(3, 2, 255, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let view = img.as_view();
        assert_eq!((view.width(), view.height()), (3, 2));
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.rows().count(), 2);
        // Out-of-range reads replicate the border once the index is clamped.
        assert_eq!(view.get(clamp_index(5, 3), clamp_index(-1, 2)), 3);
    }
}
