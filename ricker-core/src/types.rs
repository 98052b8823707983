use serde::{Deserialize, Serialize};

/// The four user-adjustable knobs of a Ricker wavelet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveletParams {
    pub peak_frequency_hz: f64,
    /// Amplitude at t = 0. Negative values invert polarity.
    pub amplitude_scalar: f64,
    pub signal_length_ms: f64,
    pub sample_interval_ms: f64,
}

impl Default for WaveletParams {
    fn default() -> Self {
        Self {
            peak_frequency_hz: 20.0,
            amplitude_scalar: 1.0,
            signal_length_ms: 256.0,
            sample_interval_ms: 4.0,
        }
    }
}

/// Sampled wavelet: `times` in ms and the amplitude at each time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub times: Vec<f64>,
    pub amplitudes: Vec<f64>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Index of the t = 0 sample for a symmetric series.
    pub fn center_index(&self) -> usize {
        self.len().saturating_sub(1) / 2
    }
}

/// One-sided power spectrum. All three vectors have `index_limit + 1` entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpectrumResult {
    /// One-sided power; DC undoubled, every other bin doubled.
    pub power: Vec<f64>,
    /// `10·log10(power / max(power))`, 0 dB at the peak bin.
    pub power_db: Vec<f64>,
    /// Bin frequencies in Hz.
    pub frequencies: Vec<f64>,
}

impl SpectrumResult {
    pub fn index_limit(&self) -> usize {
        self.power.len().saturating_sub(1)
    }

    /// Bin with the highest power (first one on ties).
    pub fn peak_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.power.iter().enumerate() {
            match best {
                Some((_, b)) if p <= b => {}
                _ => best = Some((i, p)),
            }
        }
        best.map(|(i, _)| i)
    }
}
