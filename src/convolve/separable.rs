//! Two-pass convolution with the Gaussian's 1-D taps.
//!
//! Clamp-to-edge is applied independently per axis, which is exactly what
//! the 2-D clamp does for a separable kernel, so results agree with the
//! direct strategy up to floating-point rounding.
use super::{for_each_row, quantize};
use crate::image::{clamp_index, ImageF64, ImageU8, ImageView, ImageViewMut};
use crate::kernel::SeparableFilter;

pub(super) fn convolve<F: SeparableFilter + Sync>(
    src: ImageU8<'_>,
    filter: &F,
    dst: &mut [u8],
    parallel: bool,
) {
    let taps = filter.taps();
    let radius = filter.radius() as isize;
    let (w, h) = (src.w, src.h);

    // Horizontal pass into a full-precision plane.
    let mut tmp = ImageF64::new(w, h);
    for_each_row(tmp.as_mut_slice(), w, parallel, |y, out_row| {
        let row = src.row(y);
        for (x, px) in out_row.iter_mut().enumerate() {
            let x0 = x as isize - radius;
            *px = taps
                .iter()
                .enumerate()
                .map(|(k, &t)| t * f64::from(row[clamp_index(x0 + k as isize, w)]))
                .sum();
        }
    });

    // Vertical pass, quantizing on the way out.
    let tmp = &tmp;
    for_each_row(dst, w, parallel, |y, out_row| {
        let y0 = y as isize - radius;
        let rows: Vec<&[f64]> = (0..taps.len())
            .map(|k| tmp.row(clamp_index(y0 + k as isize, h)))
            .collect();
        for (x, px) in out_row.iter_mut().enumerate() {
            let acc: f64 = taps.iter().zip(&rows).map(|(&t, r)| t * r[x]).sum();
            *px = quantize(acc);
        }
    });
}
