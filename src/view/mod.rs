pub mod plot;
pub mod table;

pub use plot::PlotSummary;
