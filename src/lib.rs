//! Front-end model for the Ricker power-spectrum explorer.
//!
//! Holds the user's current parameters, stamps each change, keeps only the
//! newest computed frame on display, and renders plot summaries and tables.
//! All numeric work lives in `ricker-core`.

pub mod bounds;
pub mod session;
pub mod view;

pub use bounds::{ParamBounds, SliderRange};
pub use session::{sweep, sweep_values, Explorer, Frame, SweepParam, Ticket, MAX_SWEEP_VALUES};
pub use view::PlotSummary;

pub use ricker_core::{InvalidInputError, SpectrumResult, TimeSeries, WaveletParams};
