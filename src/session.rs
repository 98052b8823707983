//! Front-end state: the current parameters and the frame on display.
//!
//! Every parameter change gets a stamp. Frames may be computed out of order
//! (e.g. on a worker during a slider drag), but a frame only replaces the one
//! on display if its stamp is newer.

use crate::bounds::ParamBounds;
use ricker_core::{analyze, synthesize, InvalidInputError, SpectrumResult, TimeSeries, WaveletParams};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A stamped parameter set waiting to be computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ticket {
    pub stamp: u64,
    pub params: WaveletParams,
}

impl Ticket {
    /// Synthesize and analyze. Pure; safe to run on any thread.
    pub fn compute(self) -> Result<Frame, InvalidInputError> {
        let series = synthesize(&self.params);
        let spectrum = analyze(&series)?;
        Ok(Frame {
            stamp: self.stamp,
            params: self.params,
            series,
            spectrum,
        })
    }
}

/// One complete wavelet + spectrum computation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub stamp: u64,
    pub params: WaveletParams,
    pub series: TimeSeries,
    pub spectrum: SpectrumResult,
}

pub struct Explorer {
    params: WaveletParams,
    bounds: Option<ParamBounds>,
    next_stamp: u64,
    current: Option<Frame>,
}

impl Explorer {
    pub fn new(params: WaveletParams) -> Self {
        Self {
            params,
            bounds: None,
            next_stamp: 0,
            current: None,
        }
    }

    /// Clamp every submitted parameter set to `bounds` before stamping it.
    pub fn with_bounds(mut self, bounds: ParamBounds) -> Self {
        self.params = bounds.clamp(&self.params);
        self.bounds = Some(bounds);
        self
    }

    pub fn params(&self) -> &WaveletParams {
        &self.params
    }

    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// Record a parameter change and hand back a ticket for computing it.
    pub fn set_params(&mut self, params: WaveletParams) -> Ticket {
        let params = match &self.bounds {
            Some(bounds) => {
                let clamped = bounds.clamp(&params);
                if clamped != params {
                    log::warn!("clamped parameters {:?} -> {:?}", params, clamped);
                }
                clamped
            }
            None => params,
        };
        self.params = params;
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        log::debug!("submitted stamp {stamp}: {:?}", params);
        Ticket { stamp, params }
    }

    /// Whether `ticket` is still the latest submission. Hosts can skip
    /// computing tickets that are already superseded.
    pub fn is_latest(&self, ticket: &Ticket) -> bool {
        ticket.stamp + 1 == self.next_stamp
    }

    /// Show `frame` unless a newer one is already on display.
    pub fn publish(&mut self, frame: Frame) -> bool {
        self.show(frame).0
    }

    /// Submit, compute and publish in one step. Returns the frame on display
    /// afterwards, which is the new one unless a frame with a later stamp was
    /// published directly.
    pub fn update(&mut self, params: WaveletParams) -> Result<&Frame, InvalidInputError> {
        let frame = self.set_params(params).compute()?;
        Ok(self.show(frame).1)
    }

    /// The single last-writer decision: keep whichever frame has the newer stamp.
    fn show(&mut self, frame: Frame) -> (bool, &Frame) {
        if let Some(cur) = self.current.take() {
            if frame.stamp <= cur.stamp {
                log::warn!(
                    "discarding stale frame {} (showing {})",
                    frame.stamp,
                    cur.stamp
                );
                return (false, self.current.insert(cur));
            }
        }
        log::debug!(
            "showing frame {}: {} samples, {} bins",
            frame.stamp,
            frame.series.len(),
            frame.spectrum.power.len()
        );
        (true, self.current.insert(frame))
    }

    /// Recompute the current parameters.
    pub fn refresh(&mut self) -> Result<&Frame, InvalidInputError> {
        self.update(self.params)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(WaveletParams::default())
    }
}

// ── Parameter sweeps ──────────────────────────────────────────────────────

/// Which knob a sweep moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SweepParam {
    PeakFrequency,
    AmplitudeScalar,
    SignalLength,
    SampleInterval,
}

impl SweepParam {
    pub fn apply(self, base: &WaveletParams, value: f64) -> WaveletParams {
        let mut p = *base;
        match self {
            SweepParam::PeakFrequency => p.peak_frequency_hz = value,
            SweepParam::AmplitudeScalar => p.amplitude_scalar = value,
            SweepParam::SignalLength => p.signal_length_ms = value,
            SweepParam::SampleInterval => p.sample_interval_ms = value,
        }
        p
    }
}

impl FromStr for SweepParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fpeak" | "peak" | "frequency" => Ok(SweepParam::PeakFrequency),
            "scalar" | "amplitude" => Ok(SweepParam::AmplitudeScalar),
            "length" | "signal-length" => Ok(SweepParam::SignalLength),
            "interval" | "dt" | "sample-interval" => Ok(SweepParam::SampleInterval),
            other => Err(format!(
                "unknown sweep parameter '{other}' (expected fpeak, scalar, length or interval)"
            )),
        }
    }
}

impl fmt::Display for SweepParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SweepParam::PeakFrequency => "fpeak",
            SweepParam::AmplitudeScalar => "scalar",
            SweepParam::SignalLength => "length",
            SweepParam::SampleInterval => "interval",
        };
        f.write_str(name)
    }
}

/// Upper bound on the number of frames one sweep may compute.
pub const MAX_SWEEP_VALUES: usize = 10_000;

/// `start, start + step, …` up to and including `end`.
///
/// Fails when the range would need more than [`MAX_SWEEP_VALUES`] values.
pub fn sweep_values(start: f64, end: f64, step: f64) -> Result<Vec<f64>, String> {
    if !(step > 0.0) || end < start {
        return Ok(vec![start]);
    }
    let steps = ((end - start) / step + 1e-9).floor();
    if !steps.is_finite() || steps + 1.0 > MAX_SWEEP_VALUES as f64 {
        return Err(format!(
            "sweep from {start} to {end} by {step} needs more than {MAX_SWEEP_VALUES} values"
        ));
    }
    Ok((0..=steps as usize).map(|i| start + i as f64 * step).collect())
}

/// One frame per value, stamped in sweep order.
pub fn sweep(
    base: &WaveletParams,
    param: SweepParam,
    values: &[f64],
) -> Result<Vec<Frame>, InvalidInputError> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Ticket {
                stamp: i as u64,
                params: param.apply(base, v),
            }
            .compute()
        })
        .collect()
}
