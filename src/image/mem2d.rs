//! Owned dense 2D array in row-major layout (stride == cols).
//!
//! Holds kernels, materialized rasters for the reference reduction, and the
//! window snapshots buffers hand out for inspection. Access is `(row, col)`.
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mem2D<T> {
    /// Number of rows
    pub rows: usize,
    /// Number of columns (also the row stride)
    pub cols: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Copy + Default> Mem2D<T> {
    /// Construct a `rows × cols` array filled with `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Copy> Mem2D<T> {
    /// Construct from a generator called in raster order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Wrap row-major samples; `None` when the length does not match.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    #[inline]
    pub fn idx(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.rows && c < self.cols, "({r}, {c}) out of range");
        r * self.cols + c
    }
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[self.idx(r, c)]
    }
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, v: T) {
        let i = self.idx(r, c);
        self.data[i] = v;
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }
}

impl<T: Copy> crate::image::traits::ImageView for Mem2D<T> {
    type Pixel = T;

    #[inline]
    fn height(&self) -> usize {
        self.rows
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl<T: fmt::Display> fmt::Display for Mem2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
