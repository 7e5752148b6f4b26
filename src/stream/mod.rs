//! Stream contracts the window buffers are fed from and drained into.
//!
//! Drivers pull samples in raster order from a [`SampleSource`] and push one
//! reduction per valid window into a [`SampleSink`]. Both sides run in
//! lock-step on the calling thread.

pub mod fifo;
pub mod raster;

pub use fifo::CircularFIFO;
pub use raster::RasterSource;

/// Consumer side of an input stream.
pub trait SampleSource<T> {
    /// Peek at the next sample without consuming it.
    fn read(&self) -> T;
    /// Consume the sample last returned by [`read`](Self::read).
    fn pop(&mut self);
    fn is_empty(&self) -> bool;
}

/// Producer side of an output stream.
pub trait SampleSink<T> {
    fn write(&mut self, value: T);
}

impl<T> SampleSink<T> for Vec<T> {
    #[inline]
    fn write(&mut self, value: T) {
        self.push(value);
    }
}

/// Push every sample of `samples` into `sink` in order.
pub fn fill<T: Copy, S: SampleSink<T>>(sink: &mut S, samples: &[T]) {
    for &v in samples {
        sink.write(v);
    }
}

/// Drain `source` into a vector, oldest first.
pub fn drain<T, S: SampleSource<T>>(source: &mut S) -> Vec<T> {
    let mut out = Vec::new();
    while !source.is_empty() {
        out.push(source.read());
        source.pop();
    }
    out
}
