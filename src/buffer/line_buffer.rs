//! Single-bank line buffer holding `WR` whole rows.
//!
//! Same circular occupancy tracking as [`ImageBuffer`](super::ImageBuffer)
//! but no raster frontiers. With a capacity of exactly `WR · IC` slots the
//! read index modulo `IC` is the read column, so row-boundary predicates are
//! computed straight from it.
use super::ring::{mod_inc, occupancy};
use super::{check_offset, WindowBuffer};
use crate::image::Mem2D;
use crate::types::Sample;

#[derive(Clone, Debug)]
pub struct LineBuffer<T, const WR: usize, const WC: usize, const IC: usize> {
    buf: Box<[T]>,
    write_ind: usize,
    read_ind: usize,
    empty: bool,
}

impl<T: Sample, const WR: usize, const WC: usize, const IC: usize> Default
    for LineBuffer<T, WR, WC, IC>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, const WR: usize, const WC: usize, const IC: usize> LineBuffer<T, WR, WC, IC> {
    pub const ROW_MARGIN: usize = WR / 2;
    pub const COL_MARGIN: usize = WC / 2;
    pub const CAPACITY: usize = WR * IC;
    pub const WINDOW_ENTRIES: usize = (WR - 1) * IC + WC;

    pub fn new() -> Self {
        assert!(WR % 2 == 1 && WC % 2 == 1, "window must be odd-sized, got {WR}x{WC}");
        assert!(WC <= IC, "window width {WC} exceeds image width {IC}");
        Self {
            buf: vec![T::default(); Self::CAPACITY].into_boxed_slice(),
            write_ind: 0,
            read_ind: 0,
            empty: true,
        }
    }

    pub fn full(&self) -> bool {
        !self.empty && self.write_ind == self.read_ind
    }

    pub fn write(&mut self, value: T) {
        assert!(!self.full(), "write to full LineBuffer (capacity {})", Self::CAPACITY);
        self.empty = false;
        self.buf[self.write_ind] = value;
        self.write_ind = mod_inc(self.write_ind, Self::CAPACITY);
    }

    /// Plain modular advance; end of row is not special-cased.
    pub fn pop(&mut self) {
        self.read_ind = mod_inc(self.read_ind, Self::CAPACITY);
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

    /// Column of the sample at the read index.
    #[inline]
    pub fn read_column(&self) -> usize {
        self.read_ind % IC
    }

    /// Column of the center of the window anchored at the read index.
    #[inline]
    fn center_column(&self) -> usize {
        (self.read_ind + Self::COL_MARGIN) % IC
    }

    /// Read index sits on the first column of a row.
    pub fn sol(&self) -> bool {
        self.read_column() == 0
    }

    /// Read index sits on the last column of a row.
    pub fn eol(&self) -> bool {
        self.read_column() == IC - 1
    }

    /// Window center falls in the left border of a row.
    pub fn in_start_margin(&self) -> bool {
        self.center_column() < Self::COL_MARGIN
    }

    /// Window center falls in the right border of a row.
    pub fn in_end_margin(&self) -> bool {
        self.center_column() >= IC - Self::COL_MARGIN
    }

    pub fn window_valid(&self) -> bool {
        self.window_full() && !self.in_start_margin() && !self.in_end_margin()
    }

    pub fn window(&self) -> Mem2D<T> {
        Mem2D::from_fn(WR, WC, |r, c| {
            self.buf[(self.read_ind + IC * r + c) % Self::CAPACITY]
        })
    }

    pub fn buffer_contents(&self) -> &[T] {
        &self.buf
    }
}

impl<T: Sample, const WR: usize, const WC: usize, const IC: usize> WindowBuffer<T>
    for LineBuffer<T, WR, WC, IC>
{
    const WINDOW_ROWS: usize = WR;
    const WINDOW_COLS: usize = WC;

    #[inline]
    fn write(&mut self, value: T) {
        LineBuffer::write(self, value)
    }
    #[inline]
    fn pop(&mut self) {
        LineBuffer::pop(self)
    }
    #[inline]
    fn read(&self, row_offset: i32, col_offset: i32) -> T {
        LineBuffer::read(self, row_offset, col_offset)
    }
    fn full(&self) -> bool {
        LineBuffer::full(self)
    }
    fn num_valid_entries(&self) -> usize {
        LineBuffer::num_valid_entries(self)
    }
    fn window_full(&self) -> bool {
        LineBuffer::window_full(self)
    }
    fn window_valid(&self) -> bool {
        LineBuffer::window_valid(self)
    }
    fn window(&self) -> Mem2D<T> {
        LineBuffer::window(self)
    }
}
