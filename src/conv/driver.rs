//! Fill / steady-state / drain orchestration for each buffer variant.
use super::{apply_kernel, check_kernel};
use crate::buffer::{ImageBuffer, ImageBuffer3x3, LineBuffer, WindowBuffer};
use crate::image::Mem2D;
use crate::stream::{SampleSink, SampleSource};
use crate::types::{PixelLoc, Sample};
use log::{debug, trace};

/// Write input into `buf` until its window is valid.
///
/// Returns `false` when the input runs dry first.
fn fill_until_valid<T, B, S>(buf: &mut B, input: &mut S) -> bool
where
    B: WindowBuffer<T>,
    S: SampleSource<T>,
{
    let mut written = 0usize;
    while !buf.window_valid() {
        if input.is_empty() {
            debug!("input exhausted after {written} samples before first valid window");
            return false;
        }
        buf.write(input.read());
        input.pop();
        written += 1;
    }
    debug!(
        "fill phase done after {written} samples ({} buffered)",
        buf.num_valid_entries()
    );
    true
}

/// Emit on every valid window, then pop one and write one until the input
/// is exhausted. Returns the number of values pushed onto `output`.
fn stream_steady_state<T, B, S, O>(
    buf: &mut B,
    input: &mut S,
    kernel: &Mem2D<T>,
    output: &mut O,
) -> usize
where
    T: Sample,
    B: WindowBuffer<T>,
    S: SampleSource<T>,
    O: SampleSink<T>,
{
    let mut emitted = 0usize;
    let mut steps = 0usize;
    loop {
        if buf.window_valid() {
            let res = apply_kernel(&*buf, kernel);
            trace!("output {emitted}: {res:?}");
            output.write(res);
            emitted += 1;
        }

        if input.is_empty() {
            break;
        }

        buf.pop();
        buf.write(input.read());
        input.pop();
        steps += 1;
    }
    debug!("drained after {steps} steady-state steps, {emitted} outputs");
    emitted
}

/// Stencil reduction through the generic [`ImageBuffer`] with a `KR × KC`
/// window over an `IR × IC` raster.
pub fn line_buffer_conv<T, const KR: usize, const KC: usize, const IR: usize, const IC: usize>(
    input: &mut impl SampleSource<T>,
    kernel: &Mem2D<T>,
    output: &mut impl SampleSink<T>,
) -> usize
where
    T: Sample,
{
    check_kernel::<T, ImageBuffer<T, KR, KC, IR, IC>>(kernel);
    let mut lb: ImageBuffer<T, KR, KC, IR, IC> = ImageBuffer::new();

    if !fill_until_valid::<T, _, _>(&mut lb, input) {
        return 0;
    }
    debug!("first valid window centered at {}", lb.next_read_center());

    stream_steady_state(&mut lb, input, kernel, output)
}

/// 3×3 stencil reduction through the banked [`ImageBuffer3x3`].
///
/// Fills until the window is full, then takes two `read_shift` warm-up
/// steps so the register cache holds the first interior window before the
/// steady-state loop starts.
pub fn line_buffer_conv_3x3<T, const IR: usize, const IC: usize>(
    input: &mut impl SampleSource<T>,
    kernel: &Mem2D<T>,
    output: &mut impl SampleSink<T>,
) -> usize
where
    T: Sample,
{
    check_kernel::<T, ImageBuffer3x3<T, IR, IC>>(kernel);
    let mut lb: ImageBuffer3x3<T, IR, IC> = ImageBuffer3x3::new();

    let mut written = 0usize;
    while !lb.window_full() {
        if input.is_empty() {
            debug!("input exhausted after {written} samples before the banks filled");
            return 0;
        }
        lb.write(input.read());
        input.pop();
        written += 1;
    }
    debug!("banks full after {written} samples");

    lb.read_shift();
    lb.read_shift();

    assert!(lb.window_valid(), "banked window not valid after warm-up");
    assert_eq!(
        lb.next_read_center(),
        PixelLoc::new(1, 1),
        "banked warm-up must center the first window at (1, 1)"
    );
    debug!(
        "warm-up done, first valid window centered at {}",
        lb.next_read_center()
    );
    trace!("register window on first valid:\n{:?}", lb.register_window());

    stream_steady_state(&mut lb, input, kernel, output)
}

/// Stencil reduction through the single-bank [`LineBuffer`], gated by its
/// column-margin predicates instead of a raster frontier.
pub fn single_bank_conv<T, const KR: usize, const KC: usize, const IC: usize>(
    input: &mut impl SampleSource<T>,
    kernel: &Mem2D<T>,
    output: &mut impl SampleSink<T>,
) -> usize
where
    T: Sample,
{
    check_kernel::<T, LineBuffer<T, KR, KC, IC>>(kernel);
    let mut lb: LineBuffer<T, KR, KC, IC> = LineBuffer::new();

    if !fill_until_valid::<T, _, _>(&mut lb, input) {
        return 0;
    }

    stream_steady_state(&mut lb, input, kernel, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::bulk_conv;
    use crate::stream::{drain, fill, CircularFIFO, RasterSource};

    fn ramp(rows: usize, cols: usize) -> Mem2D<i32> {
        Mem2D::from_fn(rows, cols, |r, c| (r * cols + c + 1) as i32)
    }

    fn example_kernel() -> Mem2D<i32> {
        Mem2D::from_fn(3, 3, |i, j| (i + j) as i32)
    }

    #[test]
    fn generic_driver_matches_reference() {
        let input = ramp(8, 10);
        let kernel = example_kernel();
        let mut src: CircularFIFO<i32, 80> = CircularFIFO::new();
        fill(&mut src, &input.data);
        let mut out: CircularFIFO<i32, 48> = CircularFIFO::new();

        let n = line_buffer_conv::<i32, 3, 3, 8, 10>(&mut src, &kernel, &mut out);

        assert_eq!(n, 48);
        assert!(src.is_empty());
        assert!(out.full());
        assert_eq!(drain(&mut out), bulk_conv(&input, &kernel).data);
    }

    #[test]
    fn banked_driver_matches_reference() {
        let input = ramp(8, 10);
        let kernel = example_kernel();
        let mut src = RasterSource::new(&input);
        let mut out = Vec::new();

        let n = line_buffer_conv_3x3::<i32, 8, 10>(&mut src, &kernel, &mut out);

        assert_eq!(n, 48);
        assert_eq!(out, bulk_conv(&input, &kernel).data);
    }

    #[test]
    fn single_bank_driver_matches_reference() {
        let input = ramp(8, 10);
        let kernel = example_kernel();
        let mut src = RasterSource::new(&input);
        let mut out = Vec::new();

        single_bank_conv::<i32, 3, 3, 10>(&mut src, &kernel, &mut out);

        assert_eq!(out, bulk_conv(&input, &kernel).data);
    }

    #[test]
    fn center_tap_kernel_matches_reference_border() {
        let input = ramp(6, 7);
        let mut kernel = Mem2D::new(3, 3);
        kernel.set(1, 1, 2);
        let mut out = Vec::new();

        line_buffer_conv::<i32, 3, 3, 6, 7>(&mut RasterSource::new(&input), &kernel, &mut out);

        let reference = bulk_conv(&input, &kernel);
        assert_eq!((reference.rows, reference.cols), (4, 5));
        assert_eq!(out, reference.data);
        assert_eq!(out[0], 2 * input.get(1, 1));
    }

    #[test]
    #[should_panic(expected = "kernel 1x1 does not match window 3x3")]
    fn undersized_kernel_panics() {
        let input = ramp(6, 7);
        let kernel = Mem2D::from_fn(1, 1, |_, _| 2);
        let mut out = Vec::new();
        line_buffer_conv::<i32, 3, 3, 6, 7>(&mut RasterSource::new(&input), &kernel, &mut out);
    }

    #[test]
    fn short_input_emits_nothing() {
        let input = ramp(2, 10);
        let kernel = example_kernel();
        let mut out = Vec::new();

        assert_eq!(
            line_buffer_conv::<i32, 3, 3, 2, 10>(&mut RasterSource::new(&input), &kernel, &mut out),
            0
        );
        assert_eq!(
            line_buffer_conv_3x3::<i32, 2, 10>(&mut RasterSource::new(&input), &kernel, &mut out),
            0
        );
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic(expected = "kernel 5x5 does not match window 3x3")]
    fn oversized_kernel_panics() {
        let input = ramp(8, 10);
        let kernel = Mem2D::from_fn(5, 5, |_, _| 1);
        let mut out = Vec::new();
        line_buffer_conv::<i32, 3, 3, 8, 10>(&mut RasterSource::new(&input), &kernel, &mut out);
    }

    #[test]
    #[should_panic(expected = "kernel must be odd-sized")]
    fn even_kernel_panics() {
        let input = ramp(8, 10);
        let kernel = Mem2D::from_fn(2, 2, |_, _| 1);
        let mut out = Vec::new();
        line_buffer_conv_3x3::<i32, 8, 10>(&mut RasterSource::new(&input), &kernel, &mut out);
    }

    #[test]
    #[should_panic(expected = "write to full CircularFIFO")]
    fn undersized_output_panics() {
        let input = ramp(8, 10);
        let kernel = example_kernel();
        let mut out: CircularFIFO<i32, 47> = CircularFIFO::new();
        line_buffer_conv::<i32, 3, 3, 8, 10>(&mut RasterSource::new(&input), &kernel, &mut out);
    }
}
