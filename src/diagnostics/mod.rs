//! Serializable summaries of convolution runs for tooling.

pub mod report;
pub mod timing;

pub use report::{ConvolutionReport, VariantReport};
pub use timing::{StageTiming, TimingBreakdown};
