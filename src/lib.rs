#![doc = include_str!("../README.md")]

// Core: window buffers and the streaming drivers over them.
pub mod buffer;
pub mod conv;

// Collaborators: value types, dense storage, stream transport.
pub mod image;
pub mod stream;
pub mod types;

// Tooling surface.
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::buffer::{ImageBuffer, ImageBuffer3x3, LineBuffer, RegisterWindow, WindowBuffer};
pub use crate::conv::{bulk_conv, line_buffer_conv, line_buffer_conv_3x3, single_bank_conv};
pub use crate::image::Mem2D;
pub use crate::stream::{CircularFIFO, RasterSource, SampleSink, SampleSource};
pub use crate::types::{PixelLoc, RamAddr, Sample};

// --- Prelude ---------------------------------------------------------------

/// Everything needed to stream a raster through a window buffer.
///
/// ```
/// use stencil_linebuf::prelude::*;
///
/// let input = Mem2D::from_fn(5, 5, |r, c| (r * 5 + c) as i32);
/// let kernel = Mem2D::from_fn(3, 3, |_, _| 1);
/// let mut out = Vec::new();
/// line_buffer_conv_3x3::<i32, 5, 5>(&mut RasterSource::new(&input), &kernel, &mut out);
/// assert_eq!(out, bulk_conv(&input, &kernel).data);
/// ```
pub mod prelude {
    pub use crate::image::Mem2D;
    pub use crate::stream::{CircularFIFO, RasterSource, SampleSink, SampleSource};
    pub use crate::{bulk_conv, line_buffer_conv, line_buffer_conv_3x3, single_bank_conv};
    pub use crate::{ImageBuffer, ImageBuffer3x3, LineBuffer, PixelLoc};
}
