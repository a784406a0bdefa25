mod validation;

pub use validation::*;
