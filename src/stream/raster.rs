//! Raster-order stream over any [`ImageView`].
use super::SampleSource;
use crate::image::{ImageView, Rows};

/// Streams an image left-to-right, top-to-bottom without copying it.
pub struct RasterSource<'a, I: ImageView> {
    rows: Rows<'a, I>,
    current: &'a [I::Pixel],
    x: usize,
}

impl<'a, I: ImageView> RasterSource<'a, I> {
    pub fn new(image: &'a I) -> Self {
        let mut source = Self {
            rows: image.rows(),
            current: &[],
            x: 0,
        };
        source.load_next_row();
        source
    }

    fn load_next_row(&mut self) {
        self.x = 0;
        self.current = &[];
        for row in self.rows.by_ref() {
            if !row.is_empty() {
                self.current = row;
                break;
            }
        }
    }
}

impl<'a, I: ImageView> SampleSource<I::Pixel> for RasterSource<'a, I> {
    fn read(&self) -> I::Pixel {
        assert!(!self.current.is_empty(), "read from exhausted RasterSource");
        self.current[self.x]
    }

    fn pop(&mut self) {
        assert!(!self.current.is_empty(), "pop from exhausted RasterSource");
        self.x += 1;
        if self.x == self.current.len() {
            self.load_next_row();
        }
    }

    fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Mem2D;
    use crate::stream::{drain, fill, CircularFIFO};

    #[test]
    fn yields_raster_order() {
        let img = Mem2D::from_fn(2, 3, |r, c| (r * 3 + c) as i32);
        let mut src = RasterSource::new(&img);
        assert_eq!(drain(&mut src), vec![0, 1, 2, 3, 4, 5]);
        assert!(src.is_empty());
    }

    #[test]
    fn empty_image_is_empty_stream() {
        let img: Mem2D<i32> = Mem2D::new(4, 0);
        let src = RasterSource::new(&img);
        assert!(src.is_empty());
    }

    #[test]
    fn fifo_round_trip_preserves_order() {
        let samples: Vec<i32> = (1..=80).collect();
        let mut fifo: CircularFIFO<i32, 80> = CircularFIFO::new();
        fill(&mut fifo, &samples);
        assert_eq!(drain(&mut fifo), samples);
    }
}
