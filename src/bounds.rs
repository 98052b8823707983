use ricker_core::WaveletParams;
use serde::{Deserialize, Serialize};

/// A slider's range and step. Values snap to `start + k·step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Clamp into `[start, end]`, then snap to the nearest step.
    /// Infinities go to the nearer end; NaN goes to `start`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.start;
        }
        let v = value.clamp(self.start, self.end);
        if self.step <= 0.0 {
            return v;
        }
        let steps = ((v - self.start) / self.step).round();
        (self.start + steps * self.step).min(self.end)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

/// Suggested slider ranges for the four wavelet parameters.
///
/// These are affordances for the front end; the core accepts any positive
/// length and interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamBounds {
    pub peak_frequency_hz: SliderRange,
    pub amplitude_scalar: SliderRange,
    pub signal_length_ms: SliderRange,
    pub sample_interval_ms: SliderRange,
}

impl Default for ParamBounds {
    fn default() -> Self {
        Self {
            peak_frequency_hz: SliderRange::new(1.0, 100.0, 1.0),
            amplitude_scalar: SliderRange::new(-10.0, 10.0, 1.0),
            signal_length_ms: SliderRange::new(1.0, 2096.0, 1.0),
            sample_interval_ms: SliderRange::new(1.0, 25.0, 0.5),
        }
    }
}

impl ParamBounds {
    pub fn clamp(&self, params: &WaveletParams) -> WaveletParams {
        WaveletParams {
            peak_frequency_hz: self.peak_frequency_hz.clamp(params.peak_frequency_hz),
            amplitude_scalar: self.amplitude_scalar.clamp(params.amplitude_scalar),
            signal_length_ms: self.signal_length_ms.clamp(params.signal_length_ms),
            sample_interval_ms: self.sample_interval_ms.clamp(params.sample_interval_ms),
        }
    }

    pub fn contains(&self, params: &WaveletParams) -> bool {
        self.peak_frequency_hz.contains(params.peak_frequency_hz)
            && self.amplitude_scalar.contains(params.amplitude_scalar)
            && self.signal_length_ms.contains(params.signal_length_ms)
            && self.sample_interval_ms.contains(params.sample_interval_ms)
    }
}
