use crate::session::Frame;
use crate::view::plot::PlotSummary;
use ricker_core::{SpectrumResult, TimeSeries};
use serde::Serialize;
use std::fmt::Write;

/// Index / time / amplitude table for the wavelet.
pub fn wavelet_table(series: &TimeSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:>12}  {:>14}", "index", "time (ms)", "amplitude");
    for (i, (t, a)) in series.times.iter().zip(series.amplitudes.iter()).enumerate() {
        let _ = writeln!(out, "{:>6}  {:>12.3}  {:>14.6}", i, t, a);
    }
    out
}

/// Index / frequency / normalized dB table for the one-sided spectrum.
pub fn spectrum_table(spectrum: &SpectrumResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6}  {:>14}  {:>20}",
        "index", "frequency (Hz)", "normalized dB (1/Hz)"
    );
    for (i, (f, db)) in spectrum
        .frequencies
        .iter()
        .zip(spectrum.power_db.iter())
        .enumerate()
    {
        let _ = writeln!(out, "{:>6}  {:>14.4}  {:>20.4}", i, f, db);
    }
    out
}

/// Titles followed by both tables.
pub fn frame_report(frame: &Frame) -> String {
    let summary = PlotSummary::from_frame(frame);
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary.wavelet_title());
    out.push_str(&wavelet_table(&frame.series));
    out.push('\n');
    let _ = writeln!(out, "{}", summary.spectrum_title());
    out.push_str(&spectrum_table(&frame.spectrum));
    out
}

/// One line per frame: the knob value and the index bounds it produces.
pub fn sweep_table(frames: &[Frame]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8}  {:>8}  {:>8}  {:>8}  {:>6}  {:>12}  {:>10}",
        "fpeak", "scalar", "length", "dt", "limit", "max freq", "df"
    );
    for frame in frames {
        let s = PlotSummary::from_frame(frame);
        let p = &frame.params;
        let _ = writeln!(
            out,
            "{:>8}  {:>8}  {:>8}  {:>8}  {:>6}  {:>12.2}  {:>10}",
            p.peak_frequency_hz,
            p.amplitude_scalar,
            p.signal_length_ms,
            p.sample_interval_ms,
            s.index_limit,
            s.max_freq_hz,
            s.df_hz.map_or_else(|| "n/a".to_string(), |d| format!("{d:.3}")),
        );
    }
    out
}

#[derive(Serialize)]
struct FrameJson<'a> {
    #[serde(flatten)]
    frame: &'a Frame,
    summary: PlotSummary,
}

/// The frame plus its plot summary as pretty JSON. `-inf` dB values
/// (all-zero spectrum) serialize as `null`.
pub fn frame_json(frame: &Frame) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&FrameJson {
        frame,
        summary: PlotSummary::from_frame(frame),
    })
}

pub fn summary_json(frame: &Frame) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PlotSummary::from_frame(frame))
}
