//! Calibrated estimate types.

use htma_core::constants::DEFAULT_CONFIDENCE_LEVEL;
use htma_core::errors::CalibrationError;
use serde::Serialize;

use crate::distribution::DistributionFamily;

/// How the bounds of an estimate are read for uniform and triangular families.
///
/// Normal and lognormal estimates are always confidence intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    /// `[lower, upper]` holds the central `confidence_level` of the mass.
    #[default]
    ConfidenceInterval,
    /// `[lower, upper]` is the full support.
    Absolute,
}

/// A range elicited from a calibrated expert.
///
/// Invariants (checked at construction): finite bounds, `lower < upper`,
/// `confidence_level` in (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibratedEstimate {
    lower_bound: f64,
    upper_bound: f64,
    confidence_level: f64,
    family: DistributionFamily,
    range_kind: RangeKind,
}

impl CalibratedEstimate {
    /// A 90% confidence interval.
    pub fn new(
        lower_bound: f64,
        upper_bound: f64,
        family: DistributionFamily,
    ) -> Result<Self, CalibrationError> {
        Self::with_confidence(lower_bound, upper_bound, DEFAULT_CONFIDENCE_LEVEL, family)
    }

    pub fn with_confidence(
        lower_bound: f64,
        upper_bound: f64,
        confidence_level: f64,
        family: DistributionFamily,
    ) -> Result<Self, CalibrationError> {
        let estimate = Self {
            lower_bound,
            upper_bound,
            confidence_level,
            family,
            range_kind: RangeKind::default(),
        };
        estimate.validate()?;
        Ok(estimate)
    }

    pub fn with_range_kind(mut self, range_kind: RangeKind) -> Self {
        self.range_kind = range_kind;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), CalibrationError> {
        let reason = if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            "bounds must be finite"
        } else if self.lower_bound >= self.upper_bound {
            "lower bound must be below upper bound"
        } else if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            "confidence level must be strictly between 0 and 1"
        } else {
            return Ok(());
        };
        Err(CalibrationError::InvalidRange {
            lower: self.lower_bound,
            upper: self.upper_bound,
            confidence: self.confidence_level,
            reason: reason.to_string(),
        })
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    pub fn range_kind(&self) -> RangeKind {
        self.range_kind
    }
}
