//! Normalized 2-D Gaussian weight matrices.
//!
//! Construction
//! - `order = ceil(6σ)`, bumped to the next odd number when even, so the
//!   window spans roughly ±3σ around a unique centre cell.
//! - Every cell `(x, y)` takes the isotropic falloff
//!   `exp(-(dx² + dy²) / (2σ²))` with `dx`, `dy` measured from the centre.
//!   The density's `1/(2πσ²)` factor cancels in the division below and is
//!   left out, so σ small enough to underflow `2σ²` still yields a finite
//!   matrix.
//! - `order` is capped at `MAX_KERNEL_ORDER` so the weight buffer stays
//!   allocatable.
//! - The weights are divided by their sum. Sampling a finite window never
//!   sums exactly to one, and skipping this step shifts output brightness.
//!
//! All arithmetic is `f64`.
pub mod taps;

use crate::error::{BlurError, BlurResult};
use log::debug;

pub use taps::{GaussianTaps, SeparableFilter};

/// Largest kernel side length `build` will allocate (~128 MiB of weights).
pub const MAX_KERNEL_ORDER: usize = 4095;

/// Square, odd-ordered, unit-sum weight matrix in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix {
    sigma: f64,
    order: usize,
    weights: Vec<f64>,
}

/// Kernel side length for `sigma`, always odd. Does not validate `sigma`.
pub fn order_for_sigma(sigma: f64) -> usize {
    let order = (6.0 * sigma).ceil() as usize;
    if order % 2 == 0 {
        order + 1
    } else {
        order
    }
}

/// Reject anything that is not a positive, finite σ.
pub fn validate_sigma(sigma: f64) -> BlurResult<()> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(BlurError::InvalidParameter { sigma })
    }
}

/// Build the normalized Gaussian weight matrix for `sigma`.
pub fn build(sigma: f64) -> BlurResult<WeightMatrix> {
    validate_sigma(sigma)?;
    let order = order_for_sigma(sigma);
    if order > MAX_KERNEL_ORDER {
        return Err(BlurError::KernelOrderLimit {
            order,
            limit: MAX_KERNEL_ORDER,
        });
    }
    Ok(WeightMatrix::gaussian(sigma, order))
}

/// Build the matrix for an image of `width × height`, failing with
/// `KernelTooLarge` before any weight is allocated when it would not fit.
pub fn build_for_image(sigma: f64, width: usize, height: usize) -> BlurResult<WeightMatrix> {
    validate_sigma(sigma)?;
    check_fits(order_for_sigma(sigma), width, height)?;
    build(sigma)
}

/// Unnormalized Gaussian weight at squared distance `d2` from the centre.
///
/// The centre is always 1, even when `two_sigma_sq` has underflowed to zero.
#[inline]
pub(crate) fn gaussian_falloff(d2: f64, two_sigma_sq: f64) -> f64 {
    if d2 == 0.0 {
        1.0
    } else {
        (-d2 / two_sigma_sq).exp()
    }
}

fn check_fits(order: usize, width: usize, height: usize) -> BlurResult<()> {
    if order > width || order > height {
        return Err(BlurError::KernelTooLarge {
            order,
            width,
            height,
        });
    }
    Ok(())
}

impl WeightMatrix {
    fn gaussian(sigma: f64, order: usize) -> Self {
        let center = (order - 1) / 2;
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut weights = Vec::with_capacity(order * order);
        for y in 0..order {
            let dy = y as f64 - center as f64;
            for x in 0..order {
                let dx = x as f64 - center as f64;
                weights.push(gaussian_falloff(dx * dx + dy * dy, two_sigma_sq));
            }
        }

        let sum: f64 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }
        debug!("gaussian kernel sigma={sigma} order={order} raw_sum={sum:.6}");

        Self {
            sigma,
            order,
            weights,
        }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Side length of the matrix (odd).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Index of the centre row/column, `(order - 1) / 2`.
    pub fn center(&self) -> usize {
        (self.order - 1) / 2
    }

    #[inline]
    pub fn weight(&self, ki: usize, kj: usize) -> f64 {
        self.weights[ki * self.order + kj]
    }

    #[inline]
    pub fn row(&self, ki: usize) -> &[f64] {
        let start = ki * self.order;
        &self.weights[start..start + self.order]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Fail with `KernelTooLarge` if the matrix is wider or taller than the
    /// image it will be applied to.
    pub fn ensure_fits(&self, width: usize, height: usize) -> BlurResult<()> {
        check_fits(self.order, width, height)
    }

    /// The 1-D Gaussian whose outer product with itself is this matrix.
    pub fn separable_taps(&self) -> GaussianTaps {
        GaussianTaps::new(self.sigma, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_odd_and_covers_three_sigma() {
        assert_eq!(order_for_sigma(0.5), 3);
        assert_eq!(order_for_sigma(0.6), 5); // ceil(3.6) = 4 -> 5
        assert_eq!(order_for_sigma(1.0), 7); // 6 -> 7
        assert_eq!(order_for_sigma(1.5), 9);
        assert_eq!(order_for_sigma(0.01), 1);
    }

    #[test]
    fn invalid_sigma_is_rejected() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(build(sigma), Err(BlurError::InvalidParameter { .. })),
                "sigma={sigma} should be rejected"
            );
        }
    }

    #[test]
    fn tiny_sigma_is_identity() {
        let k = build(0.1).unwrap();
        assert_eq!(k.order(), 1);
        assert_eq!(k.center(), 0);
        assert!((k.weight(0, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weights_peak_at_center_and_decay() {
        let k = build(1.0).unwrap();
        let c = k.center();
        assert_eq!(c, 3);
        assert!(k.weight(c, c) > k.weight(c, c + 1));
        assert!(k.weight(c, c + 1) > k.weight(c + 1, c + 1));
        assert!(k.weight(c, c + 1) > k.weight(c, c + 2));
        assert!(k.as_slice().iter().all(|&w| w > 0.0));
        assert!((k.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn matrix_is_outer_product_of_taps() {
        let k = build(1.3).unwrap();
        let taps = k.separable_taps();
        let t = taps.taps();
        assert_eq!(t.len(), k.order());
        for ki in 0..k.order() {
            for kj in 0..k.order() {
                assert!((k.weight(ki, kj) - t[ki] * t[kj]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn fit_check_uses_odd_order() {
        assert!(build_for_image(0.5, 3, 3).is_ok());
        match build_for_image(0.6, 4, 4) {
            Err(BlurError::KernelTooLarge { order, .. }) => assert_eq!(order, 5),
            other => panic!("expected KernelTooLarge, got {other:?}"),
        }
        let k = build(1.0).unwrap();
        assert!(k.ensure_fits(7, 100).is_ok());
        assert!(k.ensure_fits(100, 6).is_err());
    }

    #[test]
    fn falloff_is_finite_when_variance_underflows() {
        assert_eq!(gaussian_falloff(0.0, 0.0), 1.0);
        assert_eq!(gaussian_falloff(1.0, 0.0), 0.0);
        assert!((gaussian_falloff(2.0, 2.0) - (-1.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn order_limit_is_enforced() {
        assert!(order_for_sigma(682.0) <= MAX_KERNEL_ORDER);
        match build(1e8) {
            Err(BlurError::KernelOrderLimit { order, limit }) => {
                assert_eq!(limit, MAX_KERNEL_ORDER);
                assert!(order > limit);
            }
            other => panic!("expected KernelOrderLimit, got {other:?}"),
        }
    }

    #[test]
    fn oversized_sigma_fails_before_allocating() {
        assert!(matches!(
            build_for_image(1.0e12, 640, 480),
            Err(BlurError::KernelTooLarge { .. })
        ));
    }
}
