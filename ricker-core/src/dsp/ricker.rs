use crate::types::{TimeSeries, WaveletParams};
use std::f64::consts::PI;

/// Number of samples on each side of t = 0: `trunc(length / 2 / interval)`.
///
/// Shared by synthesis and spectrum folding so the time and frequency index
/// bounds always agree. Truncates toward zero; non-finite or negative ratios
/// collapse to 0.
pub fn index_limit(signal_length: f64, sample_interval: f64) -> usize {
    let ratio = (signal_length / 2.0 / sample_interval).trunc();
    if ratio.is_finite() && ratio > 0.0 {
        ratio as usize
    } else {
        0
    }
}

/// Ricker amplitude at `t_ms` milliseconds for angular frequency `omega` (rad/s).
pub fn ricker_amplitude(t_ms: f64, omega: f64, amplitude_scalar: f64) -> f64 {
    let t = t_ms / 1000.0;
    let arg = omega * omega * t * t;
    amplitude_scalar * (1.0 - 0.5 * arg) * (-0.25 * arg).exp()
}

/// Build a symmetric, odd-length Ricker wavelet centred on t = 0.
///
/// Times are `k * sample_interval_ms` for `k` in `-index_limit..=index_limit`,
/// so the grid mirrors exactly around zero and the centre sample is `0.0`.
pub fn synthesize(params: &WaveletParams) -> TimeSeries {
    let dt = params.sample_interval_ms;
    let limit = index_limit(params.signal_length_ms, dt) as i64;
    let omega = 2.0 * PI * params.peak_frequency_hz;

    let times: Vec<f64> = (-limit..=limit).map(|k| k as f64 * dt).collect();
    let amplitudes = times
        .iter()
        .map(|&t| ricker_amplitude(t, omega, params.amplitude_scalar))
        .collect();

    TimeSeries { times, amplitudes }
}

/// Flat-argument form of [`synthesize`].
pub fn ricker(
    peak_frequency_hz: f64,
    amplitude_scalar: f64,
    signal_length_ms: f64,
    sample_interval_ms: f64,
) -> TimeSeries {
    synthesize(&WaveletParams {
        peak_frequency_hz,
        amplitude_scalar,
        signal_length_ms,
        sample_interval_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_index_limit_truncates() {
        assert_eq!(index_limit(256.0, 4.0), 32);
        assert_eq!(index_limit(259.0, 4.0), 32);
        assert_eq!(index_limit(263.9, 4.0), 32);
        assert_eq!(index_limit(264.0, 4.0), 33);
        assert_eq!(index_limit(1.0, 4.0), 0);
        assert_eq!(index_limit(7.9, 4.0), 0);
        assert_eq!(index_limit(8.0, 4.0), 1);
    }

    #[test]
    fn test_index_limit_degenerate_inputs() {
        assert_eq!(index_limit(0.0, 4.0), 0);
        assert_eq!(index_limit(256.0, 0.0), 0);
        assert_eq!(index_limit(-10.0, 1.0), 0);
        assert_eq!(index_limit(f64::NAN, 1.0), 0);
    }

    #[test]
    fn test_default_wavelet_grid() {
        let w = synthesize(&WaveletParams::default());
        assert_eq!(w.times.len(), 65);
        assert_eq!(w.amplitudes.len(), 65);
        assert_eq!(w.times[0], -128.0);
        assert_eq!(w.times[64], 128.0);
        assert_eq!(w.times[32], 0.0);
        for pair in w.times.windows(2) {
            assert_eq!(pair[1] - pair[0], 4.0);
        }
    }

    #[test]
    fn test_peak_at_zero_equals_scalar() {
        let w = ricker(35.0, -3.0, 200.0, 2.5);
        let c = w.center_index();
        assert_eq!(w.times[c], 0.0);
        assert_eq!(w.amplitudes[c], -3.0);
        // Negative scalar: every other sample is no lower than the trough.
        assert!(w.amplitudes.iter().all(|&a| a >= -3.0));
    }

    #[test]
    fn test_amplitudes_symmetric() {
        let w = ricker(20.0, 1.0, 256.0, 4.0);
        let n = w.len();
        for i in 0..n {
            assert_eq!(w.amplitudes[i], w.amplitudes[n - 1 - i], "asymmetry at {i}");
        }
    }

    #[test]
    fn test_zero_crossings_of_ricker() {
        // Zeros of (1 - 0.5 ω² t²) sit at t = ±sqrt(2)/ω.
        let fpeak = 25.0;
        let omega = 2.0 * PI * fpeak;
        let t_zero_ms = 2f64.sqrt() / omega * 1000.0;
        assert_relative_eq!(ricker_amplitude(t_zero_ms, omega, 1.0), 0.0, epsilon = 1e-12);
        assert!(ricker_amplitude(t_zero_ms * 1.5, omega, 1.0) < 0.0);
    }

    #[test]
    fn test_single_sample_when_too_short() {
        let w = ricker(20.0, 7.0, 1.0, 4.0);
        assert_eq!(w.times, vec![0.0]);
        assert_eq!(w.amplitudes, vec![7.0]);
    }

    #[test]
    fn test_zero_peak_frequency_is_constant() {
        let w = ricker(0.0, 2.5, 100.0, 5.0);
        assert_eq!(w.len(), 21);
        assert!(w.amplitudes.iter().all(|&a| a == 2.5));
    }

    #[test]
    fn test_fractional_interval() {
        let w = ricker(20.0, 1.0, 10.0, 0.5);
        assert_eq!(w.len(), 21);
        assert_eq!(w.times[0], -5.0);
        assert_eq!(w.times[20], 5.0);
        assert_eq!(w.times[10], 0.0);
    }
}
