//! Partitioning and determinism integration tests.

use bandtable_backend::partition::{partition, CandidateCursor, LogCurve};
use bandtable_backend::{generate, plan, BandtableError};
use bandtable_spec::{GenerationConfig, Precision, Waveform};
use pretty_assertions::assert_eq;

// ============================================================================
// Partition invariants
// ============================================================================

#[test]
fn test_invariants_across_rates_and_waveforms() {
    for sample_rate in [8000, 22050, 44100, 48000, 96000] {
        for waveform in Waveform::ALL {
            let plans = partition::<f32>(sample_rate, 128, waveform.min_frequency_offset())
                .expect("partition should succeed");

            assert!(!plans.is_empty());
            assert!(plans.len() <= 128);
            for pair in plans.windows(2) {
                assert!(pair[1].sample_length < pair[0].sample_length);
            }
            for p in &plans {
                assert!(p.sample_length >= 1);
                let product = p.canonical_frequency * p.sample_length as f64;
                assert!(
                    (product - sample_rate as f64).abs() / (sample_rate as f64) < 1e-5,
                    "{:?} at {} Hz",
                    p,
                    sample_rate
                );
            }
        }
    }
}

#[test]
fn test_first_slot_sits_at_offset_floor() {
    // 0.001 * nyquist + offset
    let plans = partition::<f64>(44100, 16, 50.0).unwrap();
    let target = 0.001 * 22050.0 + 50.0;
    assert_eq!(plans[0].sample_length, (44100.0f64 / target).round() as usize);
}

#[test]
fn test_highest_slot_stays_at_or_below_nyquist() {
    let plans = partition::<f64>(48000, 32, 80.0).unwrap();
    let last = plans.last().unwrap();
    // The curve tops out just below 1.0, so no table is shorter than two samples.
    assert!(last.sample_length >= 2);
    assert!(last.canonical_frequency <= 24000.0);
}

#[test]
fn test_requested_count_emitted_when_no_collisions() {
    // Few slots over a wide range never collide.
    let plans = partition::<f32>(48000, 8, 80.0).unwrap();
    assert_eq!(plans.len(), 8);
}

#[test]
fn test_collisions_shrink_output() {
    let few = partition::<f32>(8000, 500, 80.0).unwrap();
    assert!(few.len() < 500);
    // Lengths are distinct, so the count can never exceed the largest length.
    assert!(few.len() <= few[0].sample_length);
}

#[test]
fn test_cursor_replays_partition() {
    // Walk the cursor by hand and check it lands on the same lengths.
    let curve = LogCurve::<f64>::new();
    let mut cursor = CandidateCursor::new(300);
    let mut lengths: Vec<usize> = Vec::new();
    while !cursor.is_exhausted() {
        let target = curve.lookup(cursor.fraction::<f64>()) * 24000.0 + 80.0;
        let len = ((48000.0 / target).round() as usize).max(1);
        if lengths.last().is_some_and(|&prev| len >= prev) {
            cursor.reject();
        } else {
            lengths.push(len);
            cursor.accept();
        }
    }

    let plans = partition::<f64>(48000, 300, 80.0).unwrap();
    assert_eq!(
        plans.iter().map(|p| p.sample_length).collect::<Vec<_>>(),
        lengths
    );
    assert_eq!(cursor.accepted() as usize, plans.len());
}

#[test]
fn test_plan_uses_waveform_offset() {
    let square = plan(&GenerationConfig::new(48000, 4, Waveform::Square)).unwrap();
    let triangle = plan(&GenerationConfig::new(48000, 4, Waveform::Triangle)).unwrap();
    // 104 Hz vs. 74 Hz floors
    assert_eq!(square[0].sample_length, 462);
    assert_eq!(triangle[0].sample_length, 649);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_repeat_runs_are_identical() {
    for precision in [Precision::Single, Precision::Double] {
        let config = GenerationConfig::new(48000, 48, Waveform::Saw).with_precision(precision);
        let first = generate(&config).unwrap();
        for _ in 0..3 {
            let again = generate(&config).unwrap();
            assert_eq!(again.table_hash, first.table_hash);
            assert_eq!(again.sample_lengths(), first.sample_lengths());
        }
    }
}

#[test]
fn test_distinct_configs_hash_differently() {
    let hashes: Vec<String> = Waveform::ALL
        .iter()
        .map(|&w| generate(&GenerationConfig::new(48000, 8, w)).unwrap().table_hash)
        .collect();
    for (i, a) in hashes.iter().enumerate() {
        for b in &hashes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_configs_are_rejected_before_partitioning() {
    let cases = [
        GenerationConfig::new(0, 8, Waveform::Saw),
        GenerationConfig::new(48000, 0, Waveform::Saw),
        GenerationConfig::new(10_000_000, 8, Waveform::Saw),
    ];
    for config in cases {
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, BandtableError::InvalidConfiguration(_)));
        assert!(err.is_configuration_error());
    }
}
