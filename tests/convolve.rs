mod common;

use common::synthetic_image::{checkerboard, flat, impulse, noise};
use gaussian_blur::convolve::{self, clamped_footprint, ConvolutionEngine, EngineOptions, Strategy};
use gaussian_blur::image::ImageView;
use gaussian_blur::{blur_image, kernel, BlurError, GrayImage};

fn engines() -> Vec<ConvolutionEngine> {
    let mut out = Vec::new();
    for strategy in [Strategy::Direct, Strategy::Separable] {
        for parallel in [false, true] {
            out.push(ConvolutionEngine::new(
                EngineOptions::new(strategy).with_parallel(parallel),
            ));
        }
    }
    out
}

#[test]
fn output_keeps_dimensions() {
    let img = noise(13, 9, 7);
    for sigma in [0.2, 0.5, 1.0, 1.4] {
        let k = kernel::build(sigma).unwrap();
        for engine in engines() {
            let out = engine.apply(&img, &k).unwrap();
            assert_eq!((out.width(), out.height()), (13, 9));
            assert_eq!(out.max_value(), img.max_value());
            assert_eq!(out.data().len(), 13 * 9);
        }
    }
}

#[test]
fn clamped_weights_sum_to_one_everywhere() {
    let (w, h) = (9, 7);
    for sigma in [0.5, 1.0] {
        let k = kernel::build(sigma).unwrap();
        for y in 0..h {
            for x in 0..w {
                let fp = clamped_footprint(&k, w, h, x, y);
                let sum: f64 = fp.iter().sum();
                assert!(
                    (sum - 1.0).abs() < 1e-9,
                    "sigma={sigma} ({x}, {y}): effective weight sum {sum}"
                );
            }
        }
    }
}

#[test]
fn flat_field_is_invariant() {
    for value in [0u8, 1, 77, 128, 254, 255] {
        let img = flat(11, 8, value);
        for sigma in [0.3, 0.5, 0.9, 1.1] {
            let k = kernel::build(sigma).unwrap();
            for engine in engines() {
                let out = engine.apply(&img, &k).unwrap();
                for (x, y) in [(0, 0), (10, 7), (5, 4), (0, 7), (10, 0)] {
                    let v = out.get(x, y);
                    assert!(
                        (i16::from(v) - i16::from(value)).abs() <= 1,
                        "value={value} sigma={sigma} {:?}: got {v} at ({x}, {y})",
                        engine.options()
                    );
                }
                assert!(out.data().iter().all(|&v| v == value));
            }
        }
    }
}

#[test]
fn filtering_flat_output_again_is_stable() {
    let img = flat(8, 8, 200);
    let k = kernel::build(1.0).unwrap();
    let once = convolve::apply(&img, &k).unwrap();
    let twice = convolve::apply(&once, &k).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn impulse_scenario_sigma_half() {
    let img = impulse(5, 5, 2, 2, 255);
    let out = blur_image(&img, 0.5, EngineOptions::default()).unwrap();

    assert!(out.get(2, 2) < 255, "center should lose energy");
    assert!(out.get(2, 2) > 0);
    for (x, y) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
        assert!(out.get(x, y) > 0, "orthogonal neighbour ({x}, {y}) is zero");
        assert!(out.get(x, y) < out.get(2, 2));
    }
    for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
        assert_eq!(out.get(x, y), 0, "corner ({x}, {y}) should stay black");
    }
}

#[test]
fn kernel_larger_than_small_image_is_rejected() {
    let img = flat(4, 4, 10);
    let err = blur_image(&img, 0.7, EngineOptions::default()).unwrap_err();
    assert!(
        matches!(err, BlurError::KernelTooLarge { order: 5, width: 4, height: 4 }),
        "{err:?}"
    );
}

#[test]
fn kernel_equal_to_image_size_is_accepted() {
    // order 3 on a 3x3 image: every footprint clamps on at least one side.
    let img = noise(3, 3, 99);
    let out = blur_image(&img, 0.5, EngineOptions::default()).unwrap();
    assert_eq!(out.data().len(), 9);
}

#[test]
fn direct_and_separable_agree_within_one_level() {
    let img = noise(31, 17, 12345);
    for sigma in [0.4, 0.8, 1.6, 2.5] {
        let k = kernel::build(sigma).unwrap();
        let direct = ConvolutionEngine::new(EngineOptions::new(Strategy::Direct))
            .apply(&img, &k)
            .unwrap();
        let separable = ConvolutionEngine::new(EngineOptions::new(Strategy::Separable))
            .apply(&img, &k)
            .unwrap();
        for (i, (a, b)) in direct.data().iter().zip(separable.data()).enumerate() {
            assert!(
                (i16::from(*a) - i16::from(*b)).abs() <= 1,
                "sigma={sigma} index {i}: direct={a} separable={b}"
            );
        }
    }
}

#[test]
fn parallel_rows_match_sequential_bytes() {
    let img = checkerboard(40, 23, 4);
    let k = kernel::build(1.2).unwrap();
    for strategy in [Strategy::Direct, Strategy::Separable] {
        let seq = ConvolutionEngine::new(EngineOptions::new(strategy))
            .apply(&img, &k)
            .unwrap();
        let par = ConvolutionEngine::new(EngineOptions::new(strategy).with_parallel(true))
            .apply(&img, &k)
            .unwrap();
        assert_eq!(seq, par, "{strategy} differs between sequential and parallel");
    }
}

#[test]
fn input_buffer_is_untouched() {
    let img = noise(10, 10, 3);
    let before = img.clone();
    let k = kernel::build(1.0).unwrap();
    let _ = convolve::apply(&img, &k).unwrap();
    assert_eq!(img, before);
}

#[test]
fn blur_reduces_checkerboard_variance() {
    let img = checkerboard(32, 32, 2);
    let out = blur_image(&img, 1.0, EngineOptions::default()).unwrap();
    let var = |im: &GrayImage| {
        let n = im.data().len() as f64;
        let mean = im.data().iter().map(|&v| f64::from(v)).sum::<f64>() / n;
        im.data()
            .iter()
            .map(|&v| (f64::from(v) - mean).powi(2))
            .sum::<f64>()
            / n
    };
    assert!(var(&out) < var(&img) * 0.5);
}

#[test]
fn edges_do_not_darken() {
    // A uniform bright image with one dark pixel in the middle: the border
    // must stay at full brightness under clamping.
    let mut data = vec![240u8; 15 * 15];
    data[7 * 15 + 7] = 0;
    let img = GrayImage::new(15, 15, 255, data).unwrap();
    let out = blur_image(&img, 1.0, EngineOptions::default()).unwrap();
    for x in 0..15 {
        assert_eq!(out.get(x, 0), 240);
        assert_eq!(out.get(x, 14), 240);
    }
    assert!(out.get(7, 7) > 0 && out.get(7, 7) < 240);
}
