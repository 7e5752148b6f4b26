//! JSON configuration for the `stream_conv` tool.
//!
//! Image geometry is fixed by the tool's buffer instantiation; the file only
//! supplies values: the raster contents, the kernel, which buffer variants to
//! run, and where to write the report.
use crate::image::io::read_json_file;
use crate::image::Mem2D;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct StreamConvConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default = "default_kernel")]
    pub kernel: Vec<Vec<i32>>,
    #[serde(default = "Variant::all")]
    pub variants: Vec<Variant>,
    pub output: OutputConfig,
}

/// Raster contents: explicit `samples` in raster order, or a ramp.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub start: i32,
    pub step: i32,
    pub samples: Option<Vec<i32>>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            start: 1,
            step: 1,
            samples: None,
        }
    }
}

impl InputConfig {
    /// Materialize the raster for a `rows × cols` image.
    pub fn raster(&self, rows: usize, cols: usize) -> Result<Mem2D<i32>, String> {
        match &self.samples {
            Some(samples) => Mem2D::from_vec(rows, cols, samples.clone()).ok_or_else(|| {
                format!(
                    "input.samples has {} values, expected {rows}x{cols} = {}",
                    samples.len(),
                    rows * cols
                )
            }),
            None => Ok(Mem2D::from_fn(rows, cols, |r, c| {
                self.start + self.step * (r * cols + c) as i32
            })),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

/// Window buffer variant driving a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Generic,
    Banked,
    SingleBank,
}

impl Variant {
    pub fn all() -> Vec<Variant> {
        vec![Variant::Generic, Variant::Banked, Variant::SingleBank]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Generic => "generic",
            Variant::Banked => "banked",
            Variant::SingleBank => "single_bank",
        };
        f.pad(name)
    }
}

/// `kernel[i][j] = i + j`.
fn default_kernel() -> Vec<Vec<i32>> {
    (0..3)
        .map(|i| (0..3).map(|j| i + j).collect())
        .collect()
}

/// Validate a nested kernel: square and exactly `dim × dim`, the window size
/// of the buffers it will run through.
pub fn kernel_from_rows(rows: &[Vec<i32>], dim: usize) -> Result<Mem2D<i32>, String> {
    let k = rows.len();
    if k != dim {
        return Err(format!("kernel must have {dim} rows to match the window, got {k}"));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != k) {
        return Err(format!(
            "kernel must be square: row {i} has {} values, expected {k}",
            row.len()
        ));
    }
    let data = rows.iter().flatten().copied().collect();
    Mem2D::from_vec(k, k, data).ok_or_else(|| "kernel storage size mismatch".to_string())
}

pub fn load_config(path: &Path) -> Result<StreamConvConfig, String> {
    read_json_file(path).map_err(|e| format!("Failed to load config: {e}"))
}
