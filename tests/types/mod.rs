pub mod accumulator;
pub mod errors;
