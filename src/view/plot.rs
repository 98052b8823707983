use crate::session::Frame;
use serde::Serialize;

/// Fixed dB window of the power spectrum plot.
pub const DB_AXIS: (f64, f64) = (-62.5, 2.5);

/// Headroom above the largest absolute amplitude on the wavelet plot.
const AMPLITUDE_HEADROOM: f64 = 1.1;

/// Axis extents and headline numbers for the two plots of a frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotSummary {
    /// `times[last] - times[first]` in ms.
    pub actual_length_ms: f64,
    /// `None` for a single-sample wavelet.
    pub dt_ms: Option<f64>,
    pub index_limit: usize,
    pub max_freq_hz: f64,
    pub df_hz: Option<f64>,
    pub time_axis: (f64, f64),
    pub amplitude_axis: (f64, f64),
    pub freq_axis: (f64, f64),
    pub db_axis: (f64, f64),
}

impl PlotSummary {
    pub fn from_frame(frame: &Frame) -> Self {
        let times = &frame.series.times;
        let freqs = &frame.spectrum.frequencies;

        let first_t = times.first().copied().unwrap_or(0.0);
        let last_t = times.last().copied().unwrap_or(0.0);
        let dt_ms = (times.len() > 1).then(|| times[1] - times[0]);

        let max_freq_hz = freqs.last().copied().unwrap_or(0.0);
        let df_hz = (freqs.len() > 1).then(|| freqs[1] - freqs[0]);

        let peak_abs = frame
            .series
            .amplitudes
            .iter()
            .fold(0.0f64, |m, a| m.max(a.abs()));
        let half_height = if peak_abs > 0.0 {
            AMPLITUDE_HEADROOM * peak_abs
        } else {
            1.0
        };

        Self {
            actual_length_ms: last_t - first_t,
            dt_ms,
            index_limit: frame.spectrum.index_limit(),
            max_freq_hz,
            df_hz,
            time_axis: (first_t, last_t),
            amplitude_axis: (-half_height, half_height),
            freq_axis: (0.0, max_freq_hz),
            db_axis: DB_AXIS,
        }
    }

    pub fn wavelet_title(&self) -> String {
        format!(
            "Wavelet - actual length: {} ms; dt: {} ms",
            self.actual_length_ms,
            fmt_opt(self.dt_ms, 1)
        )
    }

    pub fn spectrum_title(&self) -> String {
        format!(
            "Power Spectrum - max freq: {:.2} Hz; df: {} Hz",
            self.max_freq_hz,
            fmt_opt(self.df_hz, 2)
        )
    }
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "n/a".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Explorer;
    use ricker_core::WaveletParams;

    #[test]
    fn test_default_summary() {
        let mut ex = Explorer::default();
        let frame = ex.update(WaveletParams::default()).unwrap();
        let s = PlotSummary::from_frame(frame);
        assert_eq!(s.actual_length_ms, 256.0);
        assert_eq!(s.dt_ms, Some(4.0));
        assert_eq!(s.index_limit, 32);
        assert!((s.max_freq_hz - 123.0769).abs() < 1e-3);
        assert!((s.df_hz.unwrap() - 3.8462).abs() < 1e-3);
        assert_eq!(s.time_axis, (-128.0, 128.0));
        assert!((s.amplitude_axis.1 - 1.1).abs() < 1e-12);
        assert_eq!(s.db_axis, DB_AXIS);
    }

    #[test]
    fn test_titles() {
        let mut ex = Explorer::default();
        let frame = ex.update(WaveletParams::default()).unwrap();
        let s = PlotSummary::from_frame(frame);
        assert_eq!(s.wavelet_title(), "Wavelet - actual length: 256 ms; dt: 4.0 ms");
        assert_eq!(
            s.spectrum_title(),
            "Power Spectrum - max freq: 123.08 Hz; df: 3.85 Hz"
        );
    }

    #[test]
    fn test_single_sample_summary() {
        let mut ex = Explorer::default();
        let frame = ex
            .update(WaveletParams {
                signal_length_ms: 1.0,
                ..WaveletParams::default()
            })
            .unwrap();
        let s = PlotSummary::from_frame(frame);
        assert_eq!(s.actual_length_ms, 0.0);
        assert_eq!(s.dt_ms, None);
        assert_eq!(s.df_hz, None);
        assert_eq!(s.index_limit, 0);
        assert!(s.wavelet_title().ends_with("dt: n/a ms"));
    }

    #[test]
    fn test_inverted_polarity_axis_is_symmetric() {
        let mut ex = Explorer::default();
        let frame = ex
            .update(WaveletParams {
                amplitude_scalar: -5.0,
                ..WaveletParams::default()
            })
            .unwrap();
        let s = PlotSummary::from_frame(frame);
        assert!((s.amplitude_axis.1 - 5.5).abs() < 1e-12);
        assert_eq!(s.amplitude_axis.0, -s.amplitude_axis.1);
    }
}
