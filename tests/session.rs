use ricker_power::{Explorer, ParamBounds, WaveletParams};
use std::sync::mpsc;
use std::thread;

fn with_length(length: f64) -> WaveletParams {
    WaveletParams {
        signal_length_ms: length,
        ..WaveletParams::default()
    }
}

#[test]
fn test_burst_keeps_newest_regardless_of_completion_order() {
    let mut ex = Explorer::default();
    let tickets: Vec<_> = [64.0, 128.0, 256.0, 512.0]
        .iter()
        .map(|&len| ex.set_params(with_length(len)))
        .collect();

    // Compute on worker threads, then deliver in reverse submission order.
    let (tx, rx) = mpsc::channel();
    let handles: Vec<_> = tickets
        .iter()
        .copied()
        .map(|t| {
            let tx = tx.clone();
            thread::spawn(move || tx.send(t.compute().unwrap()).unwrap())
        })
        .collect();
    drop(tx);
    for h in handles {
        h.join().unwrap();
    }
    let mut frames: Vec<_> = rx.iter().collect();
    frames.sort_by_key(|f| std::cmp::Reverse(f.stamp));

    let accepted: Vec<bool> = frames.into_iter().map(|f| ex.publish(f)).collect();
    assert_eq!(accepted, vec![true, false, false, false]);

    let shown = ex.current().unwrap();
    assert_eq!(shown.params.signal_length_ms, 512.0);
    assert_eq!(shown.series.len(), 2 * 64 + 1);
}

#[test]
fn test_older_result_shown_until_newer_arrives() {
    let mut ex = Explorer::default();
    let a = ex.set_params(with_length(64.0));
    let b = ex.set_params(with_length(128.0));

    assert!(ex.publish(a.compute().unwrap()));
    assert_eq!(ex.current().unwrap().stamp, a.stamp);
    assert!(ex.publish(b.compute().unwrap()));
    assert_eq!(ex.current().unwrap().stamp, b.stamp);
}

#[test]
fn test_recompute_is_bit_identical() {
    let mut ex = Explorer::default();
    let first = ex.update(with_length(300.0)).unwrap().clone();
    let second = ex.refresh().unwrap();
    assert_eq!(first.series, second.series);
    assert_eq!(first.spectrum, second.spectrum);
    assert!(second.stamp > first.stamp);
}

#[test]
fn test_clamped_explorer_stays_in_bounds() {
    let bounds = ParamBounds::default();
    let mut ex = Explorer::default().with_bounds(bounds);
    let frame = ex
        .update(WaveletParams {
            peak_frequency_hz: 500.0,
            amplitude_scalar: 42.0,
            signal_length_ms: 5000.0,
            sample_interval_ms: 0.25,
        })
        .unwrap();
    assert!(bounds.contains(&frame.params));
    // 2096 ms at 1 ms -> 1048 samples each side.
    assert_eq!(frame.series.len(), 2097);
    assert_eq!(frame.spectrum.frequencies.len(), 1049);
}
