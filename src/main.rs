use stencil_linebuf::conv::output_dims;
use stencil_linebuf::prelude::*;
use stencil_linebuf::stream::drain;

const ROWS: usize = 8;
const COLS: usize = 10;

fn main() {
    env_logger::init();
    // Demo: 8x10 ramp 1..80 through every buffer variant, kernel[i][j] = i + j
    let input = Mem2D::from_fn(ROWS, COLS, |r, c| (r * COLS + c + 1) as i32);
    let kernel = Mem2D::from_fn(3, 3, |i, j| (i + j) as i32);
    let reference = bulk_conv(&input, &kernel);
    let (out_rows, out_cols) = output_dims(ROWS, COLS, 3, 3);

    let mut source: CircularFIFO<i32, { ROWS * COLS }> = CircularFIFO::new();
    for &v in &input.data {
        source.write(v);
    }
    let mut generic: CircularFIFO<i32, 48> = CircularFIFO::new();
    line_buffer_conv::<i32, 3, 3, ROWS, COLS>(&mut source, &kernel, &mut generic);
    let generic = drain(&mut generic);

    let mut banked = Vec::new();
    line_buffer_conv_3x3::<i32, ROWS, COLS>(&mut RasterSource::new(&input), &kernel, &mut banked);

    let mut single = Vec::new();
    single_bank_conv::<i32, 3, 3, COLS>(&mut RasterSource::new(&input), &kernel, &mut single);

    println!("reference ({out_rows}x{out_cols}):\n{reference}");
    for (name, out) in [("generic", &generic), ("banked", &banked), ("single_bank", &single)] {
        println!("{name:>12}: matches={}", *out == reference.data);
    }
}
