//! 3×3 window buffer split across three row banks with a register cache.
//!
//! Models bounded-width per-row RAMs: two full-width banks hold the oldest
//! and middle rows, a four-wide tail bank holds the column margin plus the
//! newest window row. A flat slot index `i` lives in bank `i / IC` at
//! `i % IC` (see [`RamAddr::locate`]).
//!
//! Reads never touch the banks. Nine registers mirror the current window
//! and are refreshed by [`ImageBuffer3x3::shift_window`] on every write and
//! every [`ImageBuffer3x3::read_shift`]. Because the cache loads the
//! rightmost window column at the read index, it runs two columns ahead of
//! the read frontier; `next_read_center` and `window_almost_full` carry that
//! two-slot lead.
//!
//! Lifecycle: empty, filling (writes only, read index pinned at 0), warming
//! (`read_shift` twice), streaming (pop, write, shift per sample), drained.
use super::ring::{mod_inc, occupancy, OutputBounds};
use super::{check_offset, WindowBuffer};
use crate::image::Mem2D;
use crate::types::{PixelLoc, RamAddr, Sample};
use log::trace;
use std::fmt;

/// Nine holding cells mirroring the valid 3×3 window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterWindow<T> {
    e: [[T; 3]; 3],
}

impl<T: Copy> RegisterWindow<T> {
    /// Drop the leftmost column and append `column` (top to bottom) on the right.
    #[inline]
    pub fn shift(&mut self, column: [T; 3]) {
        for (row, incoming) in self.e.iter_mut().zip(column) {
            row[0] = row[1];
            row[1] = row[2];
            row[2] = incoming;
        }
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.e[r][c]
    }
}

impl<T: fmt::Display> fmt::Display for RegisterWindow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.e.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Banked 3×3 window buffer over an `IR × IC` raster stream.
#[derive(Clone, Debug)]
pub struct ImageBuffer3x3<T, const IR: usize, const IC: usize> {
    line0: [T; IC],
    line1: [T; IC],
    line2: [T; 4],

    regs: RegisterWindow<T>,

    write_ind: usize,
    read_ind: usize,
    read_top_left: PixelLoc,
    write_top_left: PixelLoc,
    empty: bool,
}

impl<T: Sample, const IR: usize, const IC: usize> Default for ImageBuffer3x3<T, IR, IC> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, const IR: usize, const IC: usize> ImageBuffer3x3<T, IR, IC> {
    pub const WINDOW_ROWS: usize = 3;
    pub const WINDOW_COLS: usize = 3;
    pub const ROW_MARGIN: usize = 1;
    pub const COL_MARGIN: usize = 1;
    pub const BANK_COUNT: usize = 3;
    pub const TAIL_BANK_WIDTH: usize = Self::COL_MARGIN + Self::WINDOW_COLS;
    pub const CAPACITY: usize = 2 * IC + Self::TAIL_BANK_WIDTH;
    pub const WINDOW_ENTRIES: usize = 2 * IC + Self::WINDOW_COLS;
    /// Columns the register cache runs ahead of the read frontier.
    pub const REGISTER_LEAD: i32 = 2;
    pub const BOUNDS: OutputBounds = OutputBounds::new(IR, IC, 3, 3);

    pub fn new() -> Self {
        assert!(IC >= 3, "image width {IC} narrower than the 3x3 window");
        Self {
            line0: [T::default(); IC],
            line1: [T::default(); IC],
            line2: [T::default(); 4],
            regs: RegisterWindow::default(),
            write_ind: 0,
            read_ind: 0,
            read_top_left: PixelLoc::default(),
            write_top_left: PixelLoc::default(),
            empty: true,
        }
    }

    fn bank(&self, n: usize) -> &[T] {
        match n {
            0 => &self.line0[..],
            1 => &self.line1[..],
            2 => &self.line2[..],
            _ => panic!("bank {n} out of range"),
        }
    }

    fn bank_mut(&mut self, n: usize) -> &mut [T] {
        match n {
            0 => &mut self.line0[..],
            1 => &mut self.line1[..],
            2 => &mut self.line2[..],
            _ => panic!("bank {n} out of range"),
        }
    }

    /// Bank address of flat slot `i`.
    pub fn address(i: usize) -> RamAddr {
        RamAddr::locate(i, Self::BANK_COUNT, IC)
    }

    fn read_buf(&self, i: usize) -> T {
        let addr = Self::address(i);
        self.bank(addr.bank_number)[addr.index_in_bank]
    }

    fn write_buf(&mut self, i: usize, value: T) {
        let addr = Self::address(i);
        self.bank_mut(addr.bank_number)[addr.index_in_bank] = value;
    }

    /// Load one fresh column per buffered row into the register cache.
    pub fn shift_window(&mut self) {
        let column = [
            self.read_buf(self.read_ind),
            self.read_buf((self.read_ind + IC) % Self::CAPACITY),
            self.read_buf((self.read_ind + 2 * IC) % Self::CAPACITY),
        ];
        self.regs.shift(column);
        trace!("register window after shift at slot {}: {:?}", self.read_ind, self.regs);
    }

    pub fn full(&self) -> bool {
        !self.empty && self.write_ind == self.read_ind
    }

    pub fn write(&mut self, value: T) {
        assert!(!self.full(), "write to full ImageBuffer3x3 (capacity {})", Self::CAPACITY);

        self.empty = false;
        self.write_buf(self.write_ind, value);
        self.write_top_left = self.write_top_left.advance(IC);
        self.write_ind = mod_inc(self.write_ind, Self::CAPACITY);

        self.shift_window();
    }

    /// Pop and refresh the register cache.
    pub fn read_shift(&mut self) {
        self.pop();
        self.shift_window();
    }

    pub fn pop(&mut self) {
        self.read_ind = mod_inc(self.read_ind, Self::CAPACITY);
        self.read_top_left = self.read_top_left.advance(IC);
        if self.read_ind == self.write_ind {
            self.empty = true;
        }
    }

    pub fn num_valid_entries(&self) -> usize {
        occupancy(self.empty, self.read_ind, self.write_ind, Self::CAPACITY)
    }

    pub fn next_read_center(&self) -> PixelLoc {
        self.read_top_left.offset(
            Self::ROW_MARGIN as i32,
            Self::COL_MARGIN as i32 - Self::REGISTER_LEAD,
        )
    }

    pub fn window_full(&self) -> bool {
        self.num_valid_entries() >= Self::WINDOW_ENTRIES
    }

    /// Occupancy check relaxed by the register lead, used once warm-up shifts
    /// have consumed two slots.
    pub fn window_almost_full(&self) -> bool {
        let n_valid = self.num_valid_entries();
        n_valid + Self::REGISTER_LEAD as usize >= Self::WINDOW_ENTRIES
    }

    pub fn next_read_in_bounds(&self) -> bool {
        Self::BOUNDS.contains(self.next_read_center())
    }

    pub fn window_valid(&self) -> bool {
        self.next_read_in_bounds() && self.window_almost_full()
    }

    /// Constant-time read from the register cache.
    pub fn read(&self, row_offset: i32, col_offset: i32) -> T {
        check_offset(row_offset, col_offset, Self::ROW_MARGIN, Self::COL_MARGIN);
        self.regs
            .get((row_offset + 1) as usize, (col_offset + 1) as usize)
    }

    pub fn register_window(&self) -> &RegisterWindow<T> {
        &self.regs
    }

    pub fn read_frontier(&self) -> PixelLoc {
        self.read_top_left
    }

    pub fn write_frontier(&self) -> PixelLoc {
        self.write_top_left
    }

    /// Window anchored at the read index, read from the banks.
    pub fn window(&self) -> Mem2D<T> {
        Mem2D::from_fn(3, 3, |r, c| {
            self.read_buf((self.read_ind + IC * r + c) % Self::CAPACITY)
        })
    }

    /// Storage in flat slot order: the full-width banks walked slot by slot,
    /// then the tail bank.
    pub fn buffer_contents(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(Self::CAPACITY);
        let mut addr = RamAddr::new(Self::BANK_COUNT, IC);
        while addr.bank_number < Self::BANK_COUNT - 1 {
            out.push(self.bank(addr.bank_number)[addr.index_in_bank]);
            addr = addr.increment();
        }
        out.extend_from_slice(self.bank(addr.bank_number));
        out
    }
}

impl<T: Sample, const IR: usize, const IC: usize> WindowBuffer<T> for ImageBuffer3x3<T, IR, IC> {
    const WINDOW_ROWS: usize = 3;
    const WINDOW_COLS: usize = 3;

    #[inline]
    fn write(&mut self, value: T) {
        ImageBuffer3x3::write(self, value)
    }
    #[inline]
    fn pop(&mut self) {
        ImageBuffer3x3::pop(self)
    }
    #[inline]
    fn read(&self, row_offset: i32, col_offset: i32) -> T {
        ImageBuffer3x3::read(self, row_offset, col_offset)
    }
    fn full(&self) -> bool {
        ImageBuffer3x3::full(self)
    }
    fn num_valid_entries(&self) -> usize {
        ImageBuffer3x3::num_valid_entries(self)
    }
    fn window_full(&self) -> bool {
        ImageBuffer3x3::window_full(self)
    }
    fn window_valid(&self) -> bool {
        ImageBuffer3x3::window_valid(self)
    }
    fn window(&self) -> Mem2D<T> {
        ImageBuffer3x3::window(self)
    }
}
