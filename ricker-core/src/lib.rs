//! Ricker wavelet synthesis and its orthonormal one-sided power spectrum.
//!
//! Both entry points are pure: [`synthesize`] turns four parameters into an
//! odd-length, zero-centred [`TimeSeries`], and [`analyze`] folds that series
//! into a normalized [`SpectrumResult`].
//!
//! ```
//! use ricker_core::{analyze, synthesize, WaveletParams};
//!
//! let series = synthesize(&WaveletParams::default());
//! assert_eq!(series.len(), 65);
//!
//! let spectrum = analyze(&series).unwrap();
//! assert_eq!(spectrum.frequencies.len(), 33);
//! ```

pub mod dsp;
pub mod error;
pub mod types;

pub use dsp::ricker::{index_limit, ricker, synthesize};
pub use dsp::spectrum::{analyze, analyze_slices};
pub use error::{InvalidInputError, Result};
pub use types::{SpectrumResult, TimeSeries, WaveletParams};
