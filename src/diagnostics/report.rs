use super::timing::TimingBreakdown;
use crate::image::{ImageView, Mem2D};
use serde::Serialize;

/// Output of one buffer variant compared against the dense reference.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantReport<T> {
    pub variant: String,
    pub output_count: usize,
    pub matches_reference: bool,
    /// Index of the first value that differs from the reference, if any.
    pub first_mismatch: Option<usize>,
    pub output: Vec<Vec<T>>,
}

impl<T: Copy + PartialEq> VariantReport<T> {
    /// Compare a streamed output (raster order) against `reference`.
    pub fn compare(variant: impl Into<String>, streamed: &[T], reference: &Mem2D<T>) -> Self {
        let first_mismatch = streamed
            .iter()
            .zip(reference.data.iter())
            .position(|(a, b)| a != b)
            .or_else(|| {
                (streamed.len() != reference.size())
                    .then_some(streamed.len().min(reference.size()))
            });
        let output = streamed
            .chunks(reference.cols.max(1))
            .map(|row| row.to_vec())
            .collect();
        Self {
            variant: variant.into(),
            output_count: streamed.len(),
            matches_reference: first_mismatch.is_none(),
            first_mismatch,
            output,
        }
    }
}

/// Full run: reference reduction, each variant, and timings.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvolutionReport<T> {
    pub image_rows: usize,
    pub image_cols: usize,
    pub kernel: Vec<Vec<T>>,
    pub reference: Vec<Vec<T>>,
    pub variants: Vec<VariantReport<T>>,
    pub timing: TimingBreakdown,
}

impl<T: Copy + PartialEq> ConvolutionReport<T> {
    pub fn new(
        image_rows: usize,
        image_cols: usize,
        kernel: &Mem2D<T>,
        reference: &Mem2D<T>,
    ) -> Self {
        Self {
            image_rows,
            image_cols,
            kernel: nested(kernel),
            reference: nested(reference),
            variants: Vec::new(),
            timing: TimingBreakdown::default(),
        }
    }

    pub fn all_match(&self) -> bool {
        self.variants.iter().all(|v| v.matches_reference)
    }
}

fn nested<T: Copy>(m: &Mem2D<T>) -> Vec<Vec<T>> {
    m.rows().map(|row| row.to_vec()).collect()
}
