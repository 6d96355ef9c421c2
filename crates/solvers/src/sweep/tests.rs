use approx::assert_relative_eq;

use widthscan_core::{Extended, ParameterError, Parameters, Real, WidthGap};

use crate::grid::{self, SearchSpec, SearchSpecError, Strategy};

use super::{
    Action, Config, Error, Event, Status, Tightening, WidthSequence, run, run_unobserved,
};

/// Answers for `bits = 8` over `[1, 32)` at step 0.01, widths 16 through 256.
const EIGHT_BIT_ANSWERS: [(u32, f64); 31] = [
    (16, 28.77),
    (24, 16.75),
    (32, 11.84),
    (40, 9.15),
    (48, 7.43),
    (56, 6.24),
    (64, 5.36),
    (72, 4.69),
    (80, 4.16),
    (88, 3.73),
    (96, 3.37),
    (104, 3.07),
    (112, 2.82),
    (120, 2.6),
    (128, 2.4),
    (136, 2.24),
    (144, 2.09),
    (152, 1.95),
    (160, 1.83),
    (168, 1.72),
    (176, 1.63),
    (184, 1.54),
    (192, 1.45),
    (200, 1.38),
    (208, 1.31),
    (216, 1.25),
    (224, 1.19),
    (232, 1.13),
    (240, 1.08),
    (248, 1.04),
    (256, 1.0),
];

fn eight_bit_spec(step: f64) -> SearchSpec<f64> {
    SearchSpec::new(1.0, 32.0, step).expect("valid spec")
}

#[test]
fn eight_bit_sweep_matches_known_answers() {
    let widths = WidthSequence::new(8, 256, &[]).unwrap();

    for strategy in [Strategy::Sequential, Strategy::Batch] {
        let config = Config::new(strategy, Tightening::Checked);
        let report = run_unobserved(8, &eight_bit_spec(0.01), &widths, &config)
            .expect("sweep should complete");

        assert_eq!(report.status, Status::Completed);
        assert_eq!(report.answers.len(), EIGHT_BIT_ANSWERS.len());
        for ((width, answer), (expected_width, expected)) in
            report.pairs().zip(EIGHT_BIT_ANSWERS)
        {
            assert_eq!(width, expected_width);
            assert_relative_eq!(answer, expected);
        }
    }
}

#[test]
fn each_answer_bounds_the_next_width() {
    let widths = WidthSequence::new(8, 256, &[]).unwrap();
    let report = run_unobserved(8, &eight_bit_spec(0.01), &widths, &Config::default()).unwrap();

    assert_relative_eq!(report.answers[0].bound, 32.0);
    for pair in report.answers.windows(2) {
        assert_eq!(pair[1].bound.to_bits(), pair[0].answer.to_bits());
        assert!(pair[1].answer < pair[0].answer);
    }
}

#[test]
fn narrowing_keeps_the_full_interval_minimizer() {
    // Checks the decreasing-minimizer assumption for this parameter range:
    // every narrowed answer equals the answer over the full interval.
    let spec = eight_bit_spec(0.01);
    let widths = WidthSequence::new(8, 256, &[]).unwrap();
    let report = run_unobserved(8, &spec, &widths, &Config::default()).unwrap();

    for entry in &report.answers {
        let params = Parameters::from_widths(8, entry.width).unwrap();
        let full = grid::solve_unobserved(&WidthGap::new(params), &spec, Strategy::Sequential)
            .unwrap();
        assert_eq!(full.x.to_bits(), entry.answer.to_bits(), "width {}", entry.width);
    }
}

#[test]
fn observer_sees_widths_in_order() {
    let widths = WidthSequence::new(8, 48, &[]).unwrap();
    let mut seen = Vec::new();
    let observer = |event: &Event<'_, f64>| {
        seen.push((event.width, event.answer(), event.bound));
        None
    };

    run(8, &eight_bit_spec(0.01), &widths, &Config::default(), observer).unwrap();

    assert_eq!(seen.len(), 5);
    assert_eq!(seen[0].0, 16);
    assert_relative_eq!(seen[0].1, 28.77);
    assert_relative_eq!(seen[0].2, 32.0);
    assert_eq!(seen[4].0, 48);
    assert_relative_eq!(seen[4].2, 9.15);
}

#[test]
fn observer_can_stop_between_widths() {
    let widths = WidthSequence::new(8, 256, &[]).unwrap();
    let observer = |event: &Event<'_, f64>| (event.width == 24).then_some(Action::StopEarly);

    let report = run(8, &eight_bit_spec(0.01), &widths, &Config::default(), observer).unwrap();

    assert_eq!(report.status, Status::StoppedByObserver);
    assert_eq!(report.answers.len(), 2);
    assert_eq!(report.last().map(|entry| entry.width), Some(24));
}

#[test]
fn coarse_step_trips_the_bound_check() {
    // At step 0.1 the minimizer for width 136 lands on the last sample
    // below the previous answer (2.4).
    let widths = WidthSequence::new(8, 256, &[]).unwrap();

    let err = run_unobserved(8, &eight_bit_spec(0.1), &widths, &Config::default())
        .expect_err("bound should be reached");

    match err {
        Error::BoundReached {
            width,
            answer,
            bound,
        } => {
            assert_eq!(width, 136);
            assert_relative_eq!(answer, 2.3);
            assert_relative_eq!(bound, 2.4);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn assumed_tightening_runs_until_the_interval_collapses() {
    // Without checks the coarse sweep keeps going until an answer reaches
    // `left`, which leaves the next width with an empty interval.
    let widths = WidthSequence::new(8, 256, &[]).unwrap();
    let config = Config::new(Strategy::Sequential, Tightening::Assumed);

    let err = run_unobserved(8, &eight_bit_spec(0.1), &widths, &config)
        .expect_err("interval should collapse");

    assert!(matches!(
        err,
        Error::Interval {
            width: 240,
            source: SearchSpecError::EmptyInterval { .. }
        }
    ));
    assert_eq!(err.width(), 240);
}

#[test]
fn answer_rounded_onto_bound_is_rejected() {
    // Samples 1.06, 1.16, 1.26 under a bound of 1.28; the gap decreases over
    // the interval, so 1.26 wins and rounds to 1.3.
    let spec = SearchSpec::new(1.06, 1.28, 0.1).unwrap();
    let widths = WidthSequence::from_widths([16]);

    let err = run_unobserved(8, &spec, &widths, &Config::default())
        .expect_err("answer should not tighten");
    match err {
        Error::NotTightening {
            width,
            answer,
            bound,
        } => {
            assert_eq!(width, 16);
            assert_relative_eq!(answer, 1.3);
            assert_relative_eq!(bound, 1.28);
        }
        other => panic!("unexpected error: {other}"),
    }

    let config = Config::new(Strategy::Sequential, Tightening::Assumed);
    let report = run_unobserved(8, &spec, &widths, &config).unwrap();
    assert_relative_eq!(report.answers[0].answer, 1.3);
}

#[test]
fn answer_at_left_empties_the_next_interval() {
    let widths = WidthSequence::new(8, 256, &[264]).unwrap();

    let err = run_unobserved(8, &eight_bit_spec(0.01), &widths, &Config::default())
        .expect_err("width 264 has no interval left");

    assert!(matches!(
        err,
        Error::Interval {
            width: 264,
            source: SearchSpecError::EmptyInterval { .. }
        }
    ));
}

#[test]
fn overflowing_width_names_the_width() {
    // 2^128 does not fit in f32.
    let spec = SearchSpec::new(1.0_f32, 32.0, 0.01).unwrap();
    let widths = WidthSequence::from_widths([16, 128]);
    let config = Config::new(Strategy::Sequential, Tightening::Assumed);

    let err = run_unobserved(8, &spec, &widths, &config).expect_err("f32 overflow");

    assert!(matches!(
        err,
        Error::Parameters {
            width: 128,
            source: ParameterError::Overflow { width: 128, .. }
        }
    ));
}

#[test]
fn empty_sequence_reports_nothing() {
    let widths = WidthSequence::new(16, 16, &[]).unwrap();
    assert!(widths.is_empty());

    let report = run_unobserved(16, &eight_bit_spec(0.01), &widths, &Config::default()).unwrap();

    assert_eq!(report.status, Status::Completed);
    assert!(report.answers.is_empty());
}

#[test]
#[ignore = "scans about 31 million samples for the first width"]
fn eight_bit_sweep_at_full_resolution() {
    let widths = WidthSequence::new(8, 256, &[]).unwrap();
    let config = Config::new(Strategy::Sequential, Tightening::Assumed);
    let report = run_unobserved(8, &eight_bit_spec(1e-6), &widths, &config).unwrap();

    assert_eq!(report.answers.len(), 31);
    assert_eq!(report.answers[0].width, 16);
    assert_eq!(report.answers[0].answer, 28.765_464);
}

#[test]
fn wide_widths_need_extended_precision() {
    // bits = 16 with widths 1024 and 2048: 2^1024 overflows f64 but not the
    // extended scalar. Minimizers are near 92.2935 and 45.7597.
    let widths = WidthSequence::new(16, 16, &[1024, 2048]).unwrap();
    assert_eq!(widths.as_slice(), &[1024, 2048]);

    let spec = SearchSpec::new(
        Extended::of_f64(45.0),
        Extended::of_f64(93.0),
        Extended::of_f64(0.01),
    )
    .unwrap();
    let report = run_unobserved(16, &spec, &widths, &Config::default())
        .expect("extended sweep should complete");

    let answers: Vec<(u32, String)> = report
        .pairs()
        .map(|(width, answer)| (width, answer.to_string()))
        .collect();
    assert_eq!(
        answers,
        vec![(1024, "92.29".to_owned()), (2048, "45.76".to_owned())]
    );
    assert_eq!(report.answers[1].bound, report.answers[0].answer);

    let double = SearchSpec::new(45.0, 93.0, 0.01).unwrap();
    let err = run_unobserved(16, &double, &widths, &Config::default())
        .expect_err("2^1024 overflows f64");
    assert!(matches!(
        err,
        Error::Parameters {
            width: 1024,
            source: ParameterError::Overflow { width: 1024, .. }
        }
    ));
}
