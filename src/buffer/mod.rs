//! Sliding-window buffers over a raster stream.
//!
//! Each buffer holds only the staggered rows a `WindowRows × WindowCols`
//! window needs and is driven through modular read/write indices:
//!
//! - [`ImageBuffer`]: one flat circular store, reads computed by index
//!   arithmetic, read/write frontiers tracked as raster positions.
//! - [`ImageBuffer3x3`]: the 3×3 case split over three row banks, with a
//!   nine-register window cache refreshed on every write and `read_shift`.
//! - [`LineBuffer`]: a single bank of whole rows; column predicates come
//!   straight from the read index instead of a maintained frontier.
//!
//! Geometry is structural: window and image dimensions are const generic
//! parameters, and capacities/margins are associated consts derived from
//! them. Writing to a full buffer or reading outside `±WindowDim/2` panics.

pub mod banked;
pub mod image_buffer;
pub mod line_buffer;
pub mod ring;

pub use banked::{ImageBuffer3x3, RegisterWindow};
pub use image_buffer::ImageBuffer;
pub use line_buffer::LineBuffer;
pub use ring::OutputBounds;

use crate::image::Mem2D;

/// Operations the streaming drivers need from a window buffer.
pub trait WindowBuffer<T> {
    const WINDOW_ROWS: usize;
    const WINDOW_COLS: usize;

    /// Append the next raster sample. Panics when the buffer is full.
    fn write(&mut self, value: T);
    /// Release the oldest sample and advance the read position.
    fn pop(&mut self);
    /// Sample at `(row_offset, col_offset)` from the window center.
    fn read(&self, row_offset: i32, col_offset: i32) -> T;

    fn full(&self) -> bool;
    fn num_valid_entries(&self) -> usize;
    /// Enough samples buffered for a complete window to exist.
    fn window_full(&self) -> bool;
    /// The window at the read position may be reduced and emitted.
    fn window_valid(&self) -> bool;

    /// Snapshot of the window anchored at the read index.
    fn window(&self) -> Mem2D<T>;
}

/// Check a read offset against the window half-extent.
#[inline]
pub(crate) fn check_offset(row_offset: i32, col_offset: i32, row_margin: usize, col_margin: usize) {
    assert!(
        row_offset.unsigned_abs() as usize <= row_margin,
        "row offset {row_offset} outside window (±{row_margin})"
    );
    assert!(
        col_offset.unsigned_abs() as usize <= col_margin,
        "column offset {col_offset} outside window (±{col_margin})"
    );
}
