//! Dense reference reduction over a fully materialized raster.
use super::output_dims;
use crate::image::Mem2D;
use crate::types::Sample;

/// Reduce every interior position `(i, j)` of `input` with `kernel`.
///
/// Output is `(R - 2·(K/2)) × (C - 2·(K/2))`; border centers are dropped,
/// never padded.
pub fn bulk_conv<T: Sample>(input: &Mem2D<T>, kernel: &Mem2D<T>) -> Mem2D<T> {
    let row_margin = kernel.rows / 2;
    let col_margin = kernel.cols / 2;
    let (out_rows, out_cols) = output_dims(input.rows, input.cols, kernel.rows, kernel.cols);
    let mut output = Mem2D::new(out_rows, out_cols);

    for i in row_margin..row_margin + out_rows {
        for j in col_margin..col_margin + out_cols {
            let mut res = T::default();
            for r in 0..kernel.rows {
                for c in 0..kernel.cols {
                    res = res
                        + kernel.get(r, c) * input.get(i + r - row_margin, j + c - col_margin);
                }
            }
            output.set(i - row_margin, j - col_margin, res);
        }
    }
    output
}
