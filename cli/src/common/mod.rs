mod stats;
mod workers;

pub use stats::*;
pub use workers::*;
