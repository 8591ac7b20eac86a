mod parser;
mod range;

pub use parser::ThresholdError;
pub use range::{Range, Thresholds};
