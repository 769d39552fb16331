use super::gaussian_falloff;

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The filter is applied
    /// centred, so the length must be odd.
    fn taps(&self) -> &[f64];

    #[inline]
    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Normalized 1-D Gaussian, the separable factor of a `WeightMatrix`.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianTaps {
    taps: Vec<f64>,
}

impl GaussianTaps {
    /// Sample `exp(-d² / 2σ²)` over `order` cells centred on the middle one
    /// and divide by the sum. `order` must be odd and `sigma` positive.
    pub fn new(sigma: f64, order: usize) -> Self {
        debug_assert!(order % 2 == 1, "tap count must be odd (got {order})");
        let center = (order / 2) as f64;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let mut taps: Vec<f64> = (0..order)
            .map(|i| {
                let d = i as f64 - center;
                gaussian_falloff(d * d, two_sigma_sq)
            })
            .collect();
        let sum: f64 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps }
    }
}

impl SeparableFilter for GaussianTaps {
    #[inline]
    fn taps(&self) -> &[f64] {
        &self.taps
    }
}
