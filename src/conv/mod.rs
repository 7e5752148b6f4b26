//! Streaming stencil reductions over window buffers.
//!
//! The drivers pull raster samples from a [`SampleSource`], keep the window
//! buffer at constant occupancy (pop one, write one per step) and push one
//! weighted sum per valid window onto a [`SampleSink`], in raster order of
//! window centers. [`bulk_conv`] computes the same interior-only reduction
//! over a materialized array and exists to check the streaming path.
//!
//! [`SampleSource`]: crate::stream::SampleSource
//! [`SampleSink`]: crate::stream::SampleSink

pub mod bulk;
pub mod driver;

pub use bulk::bulk_conv;
pub use driver::{line_buffer_conv, line_buffer_conv_3x3, single_bank_conv};

use crate::buffer::WindowBuffer;
use crate::image::Mem2D;
use crate::types::Sample;

/// Interior output size for an odd `kernel_rows × kernel_cols` stencil.
pub fn output_dims(
    image_rows: usize,
    image_cols: usize,
    kernel_rows: usize,
    kernel_cols: usize,
) -> (usize, usize) {
    (
        image_rows.saturating_sub(2 * (kernel_rows / 2)),
        image_cols.saturating_sub(2 * (kernel_cols / 2)),
    )
}

/// Panics unless `kernel` is odd-sized and exactly `B`'s window size.
///
/// Validity of a window is judged on the buffer's own margins, so a smaller
/// kernel would drop a different border than [`bulk_conv`].
pub(crate) fn check_kernel<T, B: WindowBuffer<T>>(kernel: &Mem2D<T>) {
    assert!(
        kernel.rows % 2 == 1 && kernel.cols % 2 == 1,
        "kernel must be odd-sized, got {}x{}",
        kernel.rows,
        kernel.cols
    );
    assert!(
        kernel.rows == B::WINDOW_ROWS && kernel.cols == B::WINDOW_COLS,
        "kernel {}x{} does not match window {}x{}",
        kernel.rows,
        kernel.cols,
        B::WINDOW_ROWS,
        B::WINDOW_COLS
    );
}

/// `Σ kernel[r][c] · window.read(r - K/2, c - K/2)` over the current window.
pub fn apply_kernel<T: Sample, B: WindowBuffer<T>>(window: &B, kernel: &Mem2D<T>) -> T {
    let row_margin = (kernel.rows / 2) as i32;
    let col_margin = (kernel.cols / 2) as i32;
    let mut res = T::default();
    for r in 0..kernel.rows {
        for c in 0..kernel.cols {
            res = res
                + kernel.get(r, c) * window.read(r as i32 - row_margin, c as i32 - col_margin);
        }
    }
    res
}
