use std::fmt;
use std::ops::{Add, Mul};

/// Scalar element carried through buffers, kernels and streams.
///
/// `Default` supplies the value of never-written storage cells.
pub trait Sample: Copy + Default + Add<Output = Self> + Mul<Output = Self> + fmt::Debug {}

impl<T> Sample for T where T: Copy + Default + Add<Output = T> + Mul<Output = T> + fmt::Debug {}

/// Raster coordinate in source-image space.
///
/// Signed so that centers shifted left of column 0 (banked register lead)
/// stay representable and simply fall outside the output bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelLoc {
    pub row: i32,
    pub col: i32,
}

impl PixelLoc {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Next position in raster order for an image `image_cols` wide.
    #[inline]
    pub fn advance(self, image_cols: usize) -> Self {
        let next_col = self.col + 1;
        if next_col == image_cols as i32 {
            Self::new(self.row + 1, 0)
        } else {
            Self::new(self.row, next_col)
        }
    }

    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for PixelLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Address split across `bank_count` equal-width banks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RamAddr {
    pub bank_number: usize,
    pub index_in_bank: usize,
    pub bank_count: usize,
    pub bank_width: usize,
}

impl RamAddr {
    pub fn new(bank_count: usize, bank_width: usize) -> Self {
        assert!(bank_count > 0, "RamAddr needs at least one bank");
        assert!(bank_width > 0, "RamAddr banks must be non-empty");
        Self {
            bank_number: 0,
            index_in_bank: 0,
            bank_count,
            bank_width,
        }
    }

    /// Locate flat index `i`. Indices past the last full bank stay in the
    /// tail bank, which may be narrower or wider than `bank_width`.
    pub fn locate(i: usize, bank_count: usize, bank_width: usize) -> Self {
        let bank = (i / bank_width).min(bank_count - 1);
        Self {
            bank_number: bank,
            index_in_bank: i - bank * bank_width,
            bank_count,
            bank_width,
        }
    }

    /// Advance one slot, moving round-robin to the next bank when the
    /// current one is exhausted.
    pub fn increment(self) -> Self {
        let next = self.index_in_bank + 1;
        if next == self.bank_width {
            Self {
                bank_number: (self.bank_number + 1) % self.bank_count,
                index_in_bank: 0,
                ..self
            }
        } else {
            Self {
                index_in_bank: next,
                ..self
            }
        }
    }

    /// Flat index this address stands for.
    pub fn flat(&self) -> usize {
        self.bank_number * self.bank_width + self.index_in_bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_loc_wraps_at_image_width() {
        let p = PixelLoc::new(0, 8).advance(10);
        assert_eq!(p, PixelLoc::new(0, 9));
        assert_eq!(p.advance(10), PixelLoc::new(1, 0));
        assert_eq!(format!("{}", PixelLoc::new(2, 3)), "(2, 3)");
    }

    #[test]
    fn ram_addr_increment_keeps_bank_until_exhausted() {
        let mut addr = RamAddr::new(3, 4);
        for expected in 1..4 {
            addr = addr.increment();
            assert_eq!(addr.bank_number, 0);
            assert_eq!(addr.index_in_bank, expected);
        }
        addr = addr.increment();
        assert_eq!((addr.bank_number, addr.index_in_bank), (1, 0));
    }

    #[test]
    fn ram_addr_round_robin_wraps_to_first_bank() {
        let mut addr = RamAddr::new(2, 2);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push((addr.bank_number, addr.index_in_bank));
            addr = addr.increment();
        }
        assert_eq!(seen, vec![(0, 0), (0, 1), (1, 0), (1, 1), (0, 0)]);
    }

    #[test]
    fn locate_puts_overflow_in_tail_bank() {
        let a = RamAddr::locate(13, 3, 10);
        assert_eq!((a.bank_number, a.index_in_bank), (1, 3));
        let tail = RamAddr::locate(23, 3, 10);
        assert_eq!((tail.bank_number, tail.index_in_bank), (2, 3));
        let narrow = RamAddr::locate(9, 3, 3);
        assert_eq!((narrow.bank_number, narrow.index_in_bank), (2, 3));
        assert_eq!(a.flat(), 13);
    }
}
