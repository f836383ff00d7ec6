//! Risk Statistics Aggregator.

pub mod curves;
pub mod summary;

pub use curves::{histogram, risk_curve, Histogram, HistogramBin, RiskCurvePoint};
pub use summary::{percentile_of_sorted, summarize, PercentileValue, RiskSummary};
