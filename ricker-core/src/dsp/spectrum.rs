use crate::error::{InvalidInputError, Result};
use crate::types::{SpectrumResult, TimeSeries};
use realfft::num_complex::Complex;
use realfft::RealFftPlanner;
use std::cell::RefCell;

thread_local! {
    static FFT_PLANNER: RefCell<RealFftPlanner<f64>> = RefCell::new(RealFftPlanner::new());
}

/// Orthonormal forward DFT of a real signal, non-negative frequencies only.
///
/// Every coefficient is scaled by `1/sqrt(N)`, so signal energy equals spectral
/// energy with no leftover constant. Returns `N/2 + 1` bins; the negative half
/// is the complex conjugate mirror.
pub fn ortho_rfft(samples: &[f64]) -> Vec<Complex<f64>> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }
    let scale = 1.0 / (n as f64).sqrt();
    if n == 1 {
        return vec![Complex::new(samples[0] * scale, 0.0)];
    }

    let fft = FFT_PLANNER.with(|p| p.borrow_mut().plan_fft_forward(n));
    let mut input = fft.make_input_vec();
    let mut spectrum = fft.make_output_vec();
    input.copy_from_slice(samples);
    fft.process(&mut input, &mut spectrum).expect("FFT failed");

    for c in spectrum.iter_mut() {
        *c *= scale;
    }
    spectrum
}

/// `|X[k]|²` for all `N` bins of the orthonormal DFT, before any folding.
///
/// Bins above `N/2` are filled from their conjugate mirror `X[N-k]`.
pub fn two_sided_power(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    let half: Vec<f64> = ortho_rfft(samples).iter().map(|c| c.norm_sqr()).collect();
    (0..n)
        .map(|k| if k < half.len() { half[k] } else { half[n - k] })
        .collect()
}

/// Fold raw power into one-sided form: `[p0, 2·p1, …, 2·p_limit]`.
/// DC is never doubled.
pub fn fold_one_sided(raw_power: &[f64], index_limit: usize) -> Vec<f64> {
    raw_power
        .iter()
        .take(index_limit + 1)
        .enumerate()
        .map(|(k, &p)| if k == 0 { p } else { 2.0 * p })
        .collect()
}

/// `10·log10(p / max(p))` per bin. The peak bin is exactly 0 dB.
///
/// An all-zero spectrum has no reference level and maps to `-inf` everywhere.
pub fn normalize_db(power: &[f64]) -> Vec<f64> {
    let max_power = power.iter().copied().fold(0.0f64, f64::max);
    if max_power <= 0.0 {
        return vec![f64::NEG_INFINITY; power.len()];
    }
    power
        .iter()
        .map(|&p| 10.0 * (p / max_power).log10())
        .collect()
}

/// Bin frequencies in Hz for an odd-length grid of `2·index_limit + 1` samples.
///
/// The bin width uses the full two-sided sample count even though only the
/// `index_limit + 1` non-negative bins are returned.
pub fn frequency_bins(sample_interval_ms: f64, index_limit: usize) -> Vec<f64> {
    let scale_factor = 1.0 / ((sample_interval_ms / 1000.0) * (2 * index_limit + 1) as f64);
    (0..=index_limit).map(|i| scale_factor * i as f64).collect()
}

/// Relative distance from an integer within which a span/spacing ratio is
/// treated as that integer.
const GRID_SNAP_TOLERANCE: f64 = 1e-9;

/// `trunc(signal_length / 2 / sample_interval)` for a grid read back from
/// sample times.
///
/// `times[1] - times[0]` carries rounding error when the interval is not
/// exactly representable (0.1 ms, 0.3 ms, ...), which can leave the ratio a
/// hair below the true integer. Ratios that close to an integer snap to it;
/// genuinely fractional ratios still truncate.
fn grid_index_limit(signal_length: f64, sample_interval: f64) -> usize {
    let ratio = signal_length / 2.0 / sample_interval;
    let nearest = ratio.round();
    let snapped = if (ratio - nearest).abs() <= GRID_SNAP_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        ratio.trunc()
    };
    if snapped.is_finite() && snapped > 0.0 {
        snapped as usize
    } else {
        0
    }
}

/// Check that `times`/`amplitudes` can be folded, returning the index limit.
fn validate(times: &[f64], amplitudes: &[f64]) -> Result<(usize, f64)> {
    let n = amplitudes.len();
    if n % 2 == 0 {
        return Err(InvalidInputError::EvenLength { len: n });
    }
    if times.len() != n {
        return Err(InvalidInputError::LengthMismatch {
            times: times.len(),
            amplitudes: n,
        });
    }
    if n == 1 {
        return Ok((0, 0.0));
    }

    let signal_length = times[n - 1] - times[0];
    let sample_interval = times[1] - times[0];
    if !(sample_interval.is_finite() && sample_interval > 0.0) {
        return Err(InvalidInputError::NonPositiveInterval {
            interval: sample_interval,
        });
    }

    let limit = grid_index_limit(signal_length, sample_interval);
    let max = (n - 1) / 2;
    if limit > max {
        return Err(InvalidInputError::IndexLimitOutOfRange {
            index_limit: limit,
            max,
        });
    }
    Ok((limit, sample_interval))
}

/// Compute the normalized one-sided power spectrum of a sampled wavelet.
///
/// Spacing and total length are read from `times` (ms) rather than from the
/// synthesis parameters, so any odd-length uniform series can be analyzed.
pub fn analyze_slices(times: &[f64], amplitudes: &[f64]) -> Result<SpectrumResult> {
    let (limit, sample_interval) = validate(times, amplitudes)?;

    let raw: Vec<f64> = ortho_rfft(amplitudes).iter().map(|c| c.norm_sqr()).collect();
    let power = fold_one_sided(&raw, limit);
    let power_db = normalize_db(&power);
    let frequencies = if limit == 0 {
        vec![0.0]
    } else {
        frequency_bins(sample_interval, limit)
    };

    Ok(SpectrumResult {
        power,
        power_db,
        frequencies,
    })
}

pub fn analyze(series: &TimeSeries) -> Result<SpectrumResult> {
    analyze_slices(&series.times, &series.amplitudes)
}
