//! Reference 2-D convolution over the full weight matrix.
//!
//! Kernel rows are resolved to clamped source rows once per output row.
//! Columns whose footprint lies inside the image read a contiguous slice;
//! the `center` columns nearest each border clamp per tap.
use super::{for_each_row, quantize};
use crate::image::{clamp_index, ImageU8, ImageView};
use crate::kernel::WeightMatrix;

pub(super) fn convolve(src: ImageU8<'_>, kernel: &WeightMatrix, dst: &mut [u8], parallel: bool) {
    let width = src.w;
    for_each_row(dst, width, parallel, |y, out_row| {
        convolve_row(&src, kernel, y, out_row)
    });
}

fn convolve_row(src: &ImageU8<'_>, kernel: &WeightMatrix, y: usize, out: &mut [u8]) {
    let order = kernel.order();
    let center = kernel.center() as isize;
    let (w, h) = (src.w, src.h);

    let src_rows: Vec<&[u8]> = (0..order)
        .map(|ki| src.row(clamp_index(y as isize + ki as isize - center, h)))
        .collect();

    for (x, px) in out.iter_mut().enumerate() {
        let x0 = x as isize - center;
        let mut acc = 0.0f64;
        if x0 >= 0 && x0 as usize + order <= w {
            let x0 = x0 as usize;
            for (ki, row) in src_rows.iter().enumerate() {
                let window = &row[x0..x0 + order];
                acc += kernel
                    .row(ki)
                    .iter()
                    .zip(window)
                    .map(|(&wt, &s)| wt * f64::from(s))
                    .sum::<f64>();
            }
        } else {
            for (ki, row) in src_rows.iter().enumerate() {
                for (kj, &wt) in kernel.row(ki).iter().enumerate() {
                    let sx = clamp_index(x0 + kj as isize, w);
                    acc += wt * f64::from(row[sx]);
                }
            }
        }
        *px = quantize(acc);
    }
}
