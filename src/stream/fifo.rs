//! Bounded single-producer/single-consumer queue over a fixed array.
use super::{SampleSink, SampleSource};
use crate::buffer::ring::{mod_inc, occupancy};

/// Fixed-capacity circular FIFO.
///
/// Read and write cursors share the same array; an explicit `empty` flag
/// disambiguates the `read == write` case between empty and full.
#[derive(Clone, Debug)]
pub struct CircularFIFO<T, const SIZE: usize> {
    buf: [T; SIZE],
    write_ind: usize,
    read_ind: usize,
    empty: bool,
}

impl<T: Copy + Default, const SIZE: usize> Default for CircularFIFO<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const SIZE: usize> CircularFIFO<T, SIZE> {
    pub fn new() -> Self {
        assert!(SIZE > 0, "CircularFIFO needs a non-zero capacity");
        Self {
            buf: [T::default(); SIZE],
            write_ind: 0,
            read_ind: 0,
            empty: true,
        }
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }

    pub fn full(&self) -> bool {
        !self.empty && self.write_ind == self.read_ind
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn len(&self) -> usize {
        occupancy(self.empty, self.read_ind, self.write_ind, SIZE)
    }

    pub fn write(&mut self, value: T) {
        assert!(!self.full(), "write to full CircularFIFO (capacity {SIZE})");
        self.buf[self.write_ind] = value;
        self.write_ind = mod_inc(self.write_ind, SIZE);
        self.empty = false;
    }

    pub fn read(&self) -> T {
        assert!(!self.empty, "read from empty CircularFIFO");
        self.buf[self.read_ind]
    }

    pub fn pop(&mut self) {
        assert!(!self.empty, "pop from empty CircularFIFO");
        self.read_ind = mod_inc(self.read_ind, SIZE);
        if self.read_ind == self.write_ind {
            self.empty = true;
        }
    }
}

impl<T: Copy + Default, const SIZE: usize> SampleSource<T> for CircularFIFO<T, SIZE> {
    #[inline]
    fn read(&self) -> T {
        CircularFIFO::read(self)
    }
    #[inline]
    fn pop(&mut self) {
        CircularFIFO::pop(self)
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.empty
    }
}

impl<T: Copy + Default, const SIZE: usize> SampleSink<T> for CircularFIFO<T, SIZE> {
    #[inline]
    fn write(&mut self, value: T) {
        CircularFIFO::write(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_peeks_in_write_order() {
        let mut cb: CircularFIFO<i32, 100> = CircularFIFO::new();
        cb.write(10);
        cb.write(13);
        assert_eq!(cb.read(), 10);
        assert_eq!(cb.read(), 10);
        cb.pop();
        assert_eq!(cb.read(), 13);
    }

    #[test]
    fn empty_only_after_last_pop() {
        let mut cb: CircularFIFO<u8, 4> = CircularFIFO::new();
        for v in 1..=4 {
            cb.write(v);
        }
        assert!(cb.full());
        assert_eq!(cb.len(), 4);
        for expected in 1..=4 {
            assert!(!cb.is_empty());
            assert_eq!(cb.read(), expected);
            cb.pop();
        }
        assert!(cb.is_empty());
        assert_eq!(cb.len(), 0);
    }

    #[test]
    fn cursors_wrap_around() {
        let mut cb: CircularFIFO<i32, 3> = CircularFIFO::new();
        let mut popped = Vec::new();
        for v in 0..10 {
            cb.write(v);
            if cb.len() == 2 {
                popped.push(cb.read());
                cb.pop();
            }
        }
        assert_eq!(popped, (0..9).collect::<Vec<_>>());
        assert_eq!(cb.read(), 9);
    }

    #[test]
    #[should_panic(expected = "write to full CircularFIFO")]
    fn write_when_full_panics() {
        let mut cb: CircularFIFO<i32, 2> = CircularFIFO::new();
        cb.write(1);
        cb.write(2);
        cb.write(3);
    }

    #[test]
    #[should_panic(expected = "pop from empty CircularFIFO")]
    fn pop_when_empty_panics() {
        let mut cb: CircularFIFO<i32, 2> = CircularFIFO::new();
        cb.pop();
    }
}
