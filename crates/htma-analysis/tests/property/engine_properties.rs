use htma_analysis::model::evaluate;
use htma_analysis::risk::summarize;
use htma_analysis::voi::{compute_voi, compute_voi_for_options};
use htma_analysis::{parse, sample, CalibratedEstimate, DistributionFamily, DistributionParameters, SimulationResult};
use proptest::prelude::*;

fn finite_samples(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e9..1.0e9f64, 1..max_len)
}

proptest! {
    #[test]
    fn normal_range_round_trips_through_quantiles(
        low in -1.0e6..1.0e6f64,
        width in 1.0e-3..1.0e6f64,
        confidence in 0.5..0.99f64,
    ) {
        let high = low + width;
        let estimate =
            CalibratedEstimate::with_confidence(low, high, confidence, DistributionFamily::Normal).unwrap();
        let params = parse(&estimate).unwrap();
        let tail = (1.0 - confidence) / 2.0;
        let tol = 1e-9 * low.abs().max(high.abs()).max(1.0);
        prop_assert!((params.quantile(tail).unwrap() - low).abs() < tol);
        prop_assert!((params.quantile(1.0 - tail).unwrap() - high).abs() < tol);
    }

    #[test]
    fn lognormal_range_round_trips_through_quantiles(
        low in 1.0e-3..1.0e4f64,
        ratio in 1.01..1.0e3f64,
    ) {
        let high = low * ratio;
        let estimate = CalibratedEstimate::new(low, high, DistributionFamily::LogNormal).unwrap();
        let params = parse(&estimate).unwrap();
        prop_assert!((params.quantile(0.05).unwrap() - low).abs() < 1e-9 * high);
        prop_assert!((params.quantile(0.95).unwrap() - high).abs() < 1e-9 * high);
    }

    #[test]
    fn seeded_sampling_is_reproducible(
        mean in -100.0..100.0f64,
        std_dev in 0.01..100.0f64,
        count in 1usize..500,
        seed in any::<u64>(),
    ) {
        let params = DistributionParameters::normal(mean, std_dev).unwrap();
        let a = sample(&params, count, Some(seed)).unwrap();
        let b = sample(&params, count, Some(seed)).unwrap();
        prop_assert_eq!(a.len(), count);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn evaluate_is_pointwise_and_length_preserving(
        pairs in prop::collection::vec((-1.0e6..1.0e6f64, -1.0e6..1.0e6f64), 0..200),
    ) {
        let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        let model = |row: &[f64]| row[0] * 2.0 - row[1];
        let out = evaluate(model, &[xs.clone(), ys.clone()]).unwrap();
        prop_assert_eq!(out.len(), pairs.len());
        for (i, v) in out.iter().enumerate() {
            prop_assert_eq!(*v, model(&[xs[i], ys[i]]));
        }
    }

    #[test]
    fn extreme_percentiles_are_min_and_max(values in finite_samples(300)) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let summary = summarize(&SimulationResult::from(values), &[0.0, 100.0], None).unwrap();
        prop_assert_eq!(summary.percentile(0.0), Some(min));
        prop_assert_eq!(summary.percentile(100.0), Some(max));
    }

    #[test]
    fn summarize_is_idempotent(values in finite_samples(300), threshold in -1.0e9..1.0e9f64) {
        let result = SimulationResult::from(values);
        let ranks = [5.0, 10.0, 50.0, 90.0, 95.0];
        let first = summarize(&result, &ranks, Some(threshold)).unwrap();
        let second = summarize(&result, &ranks, Some(threshold)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn evpi_is_never_negative(
        values in prop::collection::vec(-1.0e6..1.0e6f64, 1..300),
        options in prop::collection::vec((-10.0..10.0f64, -1.0e6..1.0e6f64), 1..5),
    ) {
        let result = SimulationResult::from(values);
        let voi = compute_voi_for_options(&result, &options, |(slope, intercept), v| slope * v + intercept)
            .unwrap();
        prop_assert!(voi.expected_value_of_perfect_information >= 0.0);
        prop_assert!(voi.best_option < options.len());
    }

    #[test]
    fn binary_decision_evpi_is_never_negative(
        values in prop::collection::vec(-1.0e6..1.0e6f64, 1..300),
        threshold in -1.0e6..1.0e6f64,
        right in (-10.0..10.0f64, -1.0e6..1.0e6f64),
        wrong in (-10.0..10.0f64, -1.0e6..1.0e6f64),
    ) {
        let result = SimulationResult::from(values);
        let voi = compute_voi(&result, threshold, |v, correct| {
            let (slope, intercept) = if correct { right } else { wrong };
            slope * v + intercept
        })
        .unwrap();
        prop_assert!(voi.expected_value_of_perfect_information >= 0.0);
        prop_assert_eq!(
            voi.expected_value_of_perfect_information,
            voi.expected_opportunity_loss
        );
        prop_assert!(voi.best_option < 2);
    }
}
