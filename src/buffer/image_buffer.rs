//! Generic flat circular window buffer.
//!
//! Capacity is `(WR - 1)·IC + WC/2 + WC`: `WR` staggered rows plus the column
//! margin needed before the first interior center. The read index always
//! points at the top-left sample of the next window, so
//! `read(r, c)` is `buf[(read + IC·(r + WR/2) + c + WC/2) mod capacity]`.
use super::ring::{mod_inc, occupancy, OutputBounds};
use super::{check_offset, WindowBuffer};
use crate::image::Mem2D;
use crate::types::{PixelLoc, Sample};

/// Sliding `WR × WC` window over an `IR × IC` raster stream.
#[derive(Clone, Debug)]
pub struct ImageBuffer<T, const WR: usize, const WC: usize, const IR: usize, const IC: usize> {
    buf: Box<[T]>,
    write_ind: usize,
    read_ind: usize,
    read_top_left: PixelLoc,
    write_top_left: PixelLoc,
    empty: bool,
}

impl<T: Sample, const WR: usize, const WC: usize, const IR: usize, const IC: usize> Default
    for ImageBuffer<T, WR, WC, IR, IC>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, const WR: usize, const WC: usize, const IR: usize, const IC: usize>
    ImageBuffer<T, WR, WC, IR, IC>
{
    pub const ROW_MARGIN: usize = WR / 2;
    pub const COL_MARGIN: usize = WC / 2;
    pub const CAPACITY: usize = (WR - 1) * IC + WC / 2 + WC;
    /// Occupancy at which a complete window exists in the buffer.
    pub const WINDOW_ENTRIES: usize = (WR - 1) * IC + WC;
    pub const BOUNDS: OutputBounds = OutputBounds::new(IR, IC, WR, WC);

    pub fn new() -> Self {
        assert!(WR % 2 == 1 && WC % 2 == 1, "window must be odd-sized, got {WR}x{WC}");
        assert!(WC <= IC, "window width {WC} exceeds image width {IC}");
        Self {
            buf: vec![T::default(); Self::CAPACITY].into_boxed_slice(),
            write_ind: 0,
            read_ind: 0,
            read_top_left: PixelLoc::default(),
            write_top_left: PixelLoc::default(),
            empty: true,
        }
    }

    pub fn full(&self) -> bool {
        !self.empty && self.write_ind == self.read_ind
    }

    pub fn write(&mut self, value: T) {
        assert!(!self.full(), "write to full ImageBuffer (capacity {})", Self::CAPACITY);

        self.empty = false;
        self.buf[self.write_ind] = value;
        self.write_top_left = self.write_top_left.advance(IC);
        self.write_ind = mod_inc(self.write_ind, Self::CAPACITY);
    }

    pub fn pop(&mut self) {
        self.read_ind = mod_inc(self.read_ind, Self::CAPACITY);
        self.read_top_left = self.read_top_left.advance(IC);
        if self.read_ind == self.write_ind {
            self.empty = true;
        }
    }

    pub fn read(&self, row_offset: i32, col_offset: i32) -> T {
        check_offset(row_offset, col_offset, Self::ROW_MARGIN, Self::COL_MARGIN);
        let r = (row_offset + Self::ROW_MARGIN as i32) as usize;
        let c = (col_offset + Self::COL_MARGIN as i32) as usize;
        self.buf[(self.read_ind + IC * r + c) % Self::CAPACITY]
    }

    pub fn num_valid_entries(&self) -> usize {
        occupancy(self.empty, self.read_ind, self.write_ind, Self::CAPACITY)
    }

    pub fn window_full(&self) -> bool {
        self.num_valid_entries() >= Self::WINDOW_ENTRIES
    }

    pub fn next_read_center(&self) -> PixelLoc {
        self.read_top_left
            .offset(Self::ROW_MARGIN as i32, Self::COL_MARGIN as i32)
    }

    pub fn next_read_in_bounds(&self) -> bool {
        Self::BOUNDS.contains(self.next_read_center())
    }

    pub fn window_valid(&self) -> bool {
        self.next_read_in_bounds() && self.window_full()
    }

    /// Raster position of the next sample to be read.
    pub fn read_frontier(&self) -> PixelLoc {
        self.read_top_left
    }

    /// Raster position of the next sample to be written.
    pub fn write_frontier(&self) -> PixelLoc {
        self.write_top_left
    }

    pub fn window(&self) -> Mem2D<T> {
        Mem2D::from_fn(WR, WC, |r, c| {
            self.buf[(self.read_ind + IC * r + c) % Self::CAPACITY]
        })
    }

    /// Raw storage in slot order (not read order).
    pub fn buffer_contents(&self) -> &[T] {
        &self.buf
    }
}

impl<T: Sample, const WR: usize, const WC: usize, const IR: usize, const IC: usize> WindowBuffer<T>
    for ImageBuffer<T, WR, WC, IR, IC>
{
    const WINDOW_ROWS: usize = WR;
    const WINDOW_COLS: usize = WC;

    #[inline]
    fn write(&mut self, value: T) {
        ImageBuffer::write(self, value)
    }
    #[inline]
    fn pop(&mut self) {
        ImageBuffer::pop(self)
    }
    #[inline]
    fn read(&self, row_offset: i32, col_offset: i32) -> T {
        ImageBuffer::read(self, row_offset, col_offset)
    }
    fn full(&self) -> bool {
        ImageBuffer::full(self)
    }
    fn num_valid_entries(&self) -> usize {
        ImageBuffer::num_valid_entries(self)
    }
    fn window_full(&self) -> bool {
        ImageBuffer::window_full(self)
    }
    fn window_valid(&self) -> bool {
        ImageBuffer::window_valid(self)
    }
    fn window(&self) -> Mem2D<T> {
        ImageBuffer::window(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Lb10 = ImageBuffer<i32, 3, 3, 10, 10>;

    #[test]
    fn first_window_is_centered_at_1_1() {
        let lb = Lb10::new();
        assert_eq!(lb.next_read_center(), PixelLoc::new(1, 1));
    }

    #[test]
    fn fresh_buffer_is_empty_and_invalid() {
        let lb = Lb10::new();
        assert_eq!(lb.num_valid_entries(), 0);
        assert!(!lb.window_valid());
        assert_eq!(Lb10::CAPACITY, 24);
        assert_eq!(lb.buffer_contents().len(), 24);
    }

    #[test]
    fn window_becomes_valid_after_two_rows_and_a_window() {
        let mut lb = Lb10::new();
        for i in 0..(10 * 2 + 3) {
            assert!(!lb.window_full());
            assert!(!lb.window_valid());
            lb.write(i);
        }
        assert!(lb.window_full());
        assert!(lb.window_valid());
        assert_eq!(lb.write_frontier(), PixelLoc::new(2, 3));
    }

    #[test]
    fn pop_shifts_center_then_refill_restores_validity() {
        let mut lb = Lb10::new();
        for i in 0..23 {
            lb.write(i);
        }
        assert!(lb.next_read_in_bounds());
        lb.pop();
        assert!(!lb.window_full());
        assert_eq!(lb.next_read_center(), PixelLoc::new(1, 2));

        lb.write(23);
        assert!(lb.window_full());
        assert!(lb.window_valid());
    }

    #[test]
    fn center_wraps_to_next_row() {
        let mut lb = Lb10::new();
        for i in 0..23 {
            lb.write(i);
        }
        lb.pop();
        // ImageCols - WindowCols further pops end the row
        for k in 0..(10 - 3) {
            lb.write(23 + k);
            lb.pop();
        }
        assert_eq!(lb.next_read_center(), PixelLoc::new(1, 9));
        assert!(!lb.next_read_in_bounds());
        lb.write(0);
        lb.pop();
        lb.write(0);
        lb.pop();
        assert_eq!(lb.next_read_center(), PixelLoc::new(2, 1));
        assert!(lb.next_read_in_bounds());
    }

    #[test]
    fn read_addresses_window_relative_to_center() {
        let mut lb = Lb10::new();
        for i in 0..23 {
            lb.write(i);
        }
        assert_eq!(lb.read(-1, -1), 0);
        assert_eq!(lb.read(0, 0), 11);
        assert_eq!(lb.read(1, 1), 22);
        assert_eq!(lb.read(1, 1), 22);
        let win = lb.window();
        assert_eq!(win.get(1, 2), 12);
    }

    #[test]
    fn occupancy_wraps_around_capacity() {
        let mut lb = Lb10::new();
        for i in 0..23 {
            lb.write(i);
        }
        for i in 0..5 {
            lb.pop();
            lb.write(100 + i);
        }
        assert_eq!(lb.num_valid_entries(), 23);
        assert_eq!(lb.read(1, 1), 104);
    }

    #[test]
    fn popping_last_entry_empties() {
        let mut lb = Lb10::new();
        lb.write(1);
        lb.write(2);
        lb.pop();
        assert_eq!(lb.num_valid_entries(), 1);
        lb.pop();
        assert_eq!(lb.num_valid_entries(), 0);
    }

    #[test]
    #[should_panic(expected = "write to full ImageBuffer")]
    fn writing_past_capacity_panics() {
        let mut lb = Lb10::new();
        for i in 0..25 {
            lb.write(i);
        }
    }

    #[test]
    #[should_panic(expected = "row offset 2 outside window")]
    fn reading_outside_window_panics() {
        let lb = Lb10::new();
        lb.read(2, 0);
    }

    #[test]
    #[should_panic(expected = "column offset -2 outside window")]
    fn reading_left_of_window_panics() {
        let lb = Lb10::new();
        lb.read(0, -2);
    }

    #[test]
    fn five_by_five_window_capacity() {
        type Lb5 = ImageBuffer<i32, 5, 5, 9, 12>;
        assert_eq!(Lb5::CAPACITY, 4 * 12 + 2 + 5);
        assert_eq!(Lb5::WINDOW_ENTRIES, 4 * 12 + 5);
        assert_eq!(Lb5::new().next_read_center(), PixelLoc::new(2, 2));
    }
}
