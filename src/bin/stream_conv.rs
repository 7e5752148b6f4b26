use stencil_linebuf::config::{self, kernel_from_rows, Variant};
use stencil_linebuf::conv::output_dims;
use stencil_linebuf::diagnostics::{ConvolutionReport, TimingBreakdown, VariantReport};
use stencil_linebuf::image::io::write_json_file;
use stencil_linebuf::prelude::*;
use std::env;
use std::path::Path;

const ROWS: usize = 8;
const COLS: usize = 10;
const WINDOW: usize = 3;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let input = config.input.raster(ROWS, COLS)?;
    let kernel = kernel_from_rows(&config.kernel, WINDOW)?;

    let mut timing = TimingBreakdown::default();
    let reference = timing.time("reference", || bulk_conv(&input, &kernel));
    let (out_rows, out_cols) = output_dims(ROWS, COLS, kernel.rows, kernel.cols);

    let mut report = ConvolutionReport::new(ROWS, COLS, &kernel, &reference);
    for &variant in &config.variants {
        let streamed = timing.time(variant.to_string(), || run_variant(variant, &input, &kernel));
        let entry = VariantReport::compare(variant.to_string(), &streamed, &reference);
        println!(
            "{variant:>12}: {} outputs ({out_rows}x{out_cols} expected), matches reference: {}",
            entry.output_count, entry.matches_reference
        );
        report.variants.push(entry);
    }
    report.timing = timing;

    write_json_file(&config.output.report_json, &report)?;
    println!("Saved report to {}", config.output.report_json.display());

    if report.all_match() {
        Ok(())
    } else {
        Err("streamed output differs from the dense reference".to_string())
    }
}

fn run_variant(variant: Variant, input: &Mem2D<i32>, kernel: &Mem2D<i32>) -> Vec<i32> {
    let mut source = RasterSource::new(input);
    let mut out = Vec::new();
    match variant {
        Variant::Generic => {
            line_buffer_conv::<i32, WINDOW, WINDOW, ROWS, COLS>(&mut source, kernel, &mut out)
        }
        Variant::Banked => line_buffer_conv_3x3::<i32, ROWS, COLS>(&mut source, kernel, &mut out),
        Variant::SingleBank => {
            single_bank_conv::<i32, WINDOW, WINDOW, COLS>(&mut source, kernel, &mut out)
        }
    };
    out
}

fn usage() -> String {
    format!("Usage: stream_conv <config.json>  (image geometry fixed at {ROWS}x{COLS})")
}
