pub mod ricker;
pub mod spectrum;
