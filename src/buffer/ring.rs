//! Index arithmetic shared by the circular stores.
use crate::types::PixelLoc;

/// Increment `i` modulo `size`.
#[inline]
pub fn mod_inc(i: usize, size: usize) -> usize {
    let fresh = i + 1;
    if fresh == size {
        0
    } else {
        fresh
    }
}

/// Number of live entries between `read` and `write` in a ring of
/// `capacity` slots. `read == write` means full unless `empty` is set.
#[inline]
pub fn occupancy(empty: bool, read: usize, write: usize, capacity: usize) -> usize {
    if empty {
        return 0;
    }
    if read < write {
        return write - read;
    }
    if read == write {
        return capacity;
    }
    // read > write
    (capacity - read) + write
}

/// Inclusive range of centers that produce output (interior only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputBounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl OutputBounds {
    pub const fn new(
        image_rows: usize,
        image_cols: usize,
        window_rows: usize,
        window_cols: usize,
    ) -> Self {
        let row_margin = (window_rows / 2) as i32;
        let col_margin = (window_cols / 2) as i32;
        Self {
            left: col_margin,
            right: image_cols as i32 - col_margin - 1,
            top: row_margin,
            bottom: image_rows as i32 - row_margin - 1,
        }
    }

    #[inline]
    pub fn contains(&self, p: PixelLoc) -> bool {
        self.left <= p.col && p.col <= self.right && self.top <= p.row && p.row <= self.bottom
    }
}
