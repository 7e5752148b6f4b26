use stencil_linebuf::image::Mem2D;
use stencil_linebuf::stream::CircularFIFO;

/// Consecutive integers `1..=rows*cols` in raster order.
pub fn ramp(rows: usize, cols: usize) -> Mem2D<i32> {
    assert!(rows > 0 && cols > 0, "image dimensions must be positive");
    Mem2D::from_fn(rows, cols, |r, c| (r * cols + c + 1) as i32)
}

/// Deterministic pseudo-random raster in `[-50, 50)`.
pub fn noise(rows: usize, cols: usize, seed: u64) -> Mem2D<i64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    Mem2D::from_fn(rows, cols, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % 100) as i64 - 50
    })
}

/// `kernel[i][j] = i + j`.
pub fn example_kernel() -> Mem2D<i32> {
    Mem2D::from_fn(3, 3, |i, j| (i + j) as i32)
}

/// Queue every sample of `image` in raster order.
pub fn fifo_from<const SIZE: usize>(image: &Mem2D<i32>) -> CircularFIFO<i32, SIZE> {
    let mut fifo = CircularFIFO::new();
    for &v in &image.data {
        fifo.write(v);
    }
    fifo
}
