use gaussian_blur::GrayImage;

/// Every pixel set to `value`.
pub fn flat(width: usize, height: usize, value: u8) -> GrayImage {
    GrayImage::new(width, height, 255, vec![value; width * height]).expect("valid flat image")
}

/// All zeros except a single bright pixel at `(x, y)`.
pub fn impulse(width: usize, height: usize, x: usize, y: usize, value: u8) -> GrayImage {
    assert!(x < width && y < height, "impulse must lie inside the image");
    let mut data = vec![0u8; width * height];
    data[y * width + x] = value;
    GrayImage::new(width, height, 255, data).expect("valid impulse image")
}

/// High-contrast checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> GrayImage {
    assert!(cell > 0, "cell size must be positive");
    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            data[y * width + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    GrayImage::new(width, height, 255, data).expect("valid checkerboard")
}

/// Deterministic pseudo-random texture (xorshift), full 0..=255 range.
pub fn noise(width: usize, height: usize, seed: u32) -> GrayImage {
    let mut state = seed.max(1);
    let data = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    GrayImage::new(width, height, 255, data).expect("valid noise image")
}
