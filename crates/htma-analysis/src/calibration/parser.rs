//! Range → parameter solve.
//!
//! The `c` confidence interval `[low, high]` is matched to the `(1-c)/2` and
//! `(1+c)/2` quantiles of the chosen family.

use htma_core::errors::CalibrationError;
use tracing::debug;

use super::types::{CalibratedEstimate, RangeKind};
use crate::distribution::{standard_normal_quantile, DistributionFamily, DistributionParameters};

/// Standard-normal quantile of the upper tail of a central `confidence` interval
/// (1.645 for 0.90, 1.960 for 0.95).
pub fn tail_z_score(confidence: f64) -> f64 {
    standard_normal_quantile(0.5 + confidence / 2.0)
}

/// Derive distribution parameters from a calibrated estimate. Pure.
pub fn parse(estimate: &CalibratedEstimate) -> Result<DistributionParameters, CalibrationError> {
    estimate.validate()?;

    let low = estimate.lower_bound();
    let high = estimate.upper_bound();
    let confidence = estimate.confidence_level();
    let z = tail_z_score(confidence);

    let params = match estimate.family() {
        DistributionFamily::Normal => DistributionParameters::Normal {
            mean: (low + high) / 2.0,
            std_dev: (high - low) / (2.0 * z),
        },
        DistributionFamily::LogNormal => {
            if low <= 0.0 {
                return Err(domain_error(
                    estimate,
                    "lognormal bounds must be strictly positive",
                ));
            }
            let (ln_low, ln_high) = (low.ln(), high.ln());
            DistributionParameters::LogNormal {
                log_mean: (ln_low + ln_high) / 2.0,
                log_std_dev: (ln_high - ln_low) / (2.0 * z),
            }
        }
        DistributionFamily::Uniform => match estimate.range_kind() {
            RangeKind::Absolute => DistributionParameters::Uniform { low, high },
            RangeKind::ConfidenceInterval => {
                let center = (low + high) / 2.0;
                let half_width = (high - low) / (2.0 * confidence);
                DistributionParameters::Uniform {
                    low: center - half_width,
                    high: center + half_width,
                }
            }
        },
        DistributionFamily::Triangular => {
            let center = (low + high) / 2.0;
            match estimate.range_kind() {
                RangeKind::Absolute => DistributionParameters::Triangular {
                    low,
                    mode: center,
                    high,
                },
                RangeKind::ConfidenceInterval => {
                    // Symmetric triangle: tail mass (1-c)/2 at distance
                    // H·(1 - sqrt(1-c)) from the mode.
                    let half_width = (high - low) / 2.0 / (1.0 - (1.0 - confidence).sqrt());
                    DistributionParameters::Triangular {
                        low: center - half_width,
                        mode: center,
                        high: center + half_width,
                    }
                }
            }
        }
        DistributionFamily::Bernoulli => {
            return Err(domain_error(
                estimate,
                "a Bernoulli probability is given directly, not as a range",
            ));
        }
    };

    params
        .validate()
        .map_err(|e| domain_error(estimate, &e.to_string()))?;

    debug!(family = %estimate.family(), low, high, confidence, %params, "parsed calibrated estimate");
    Ok(params)
}

fn domain_error(estimate: &CalibratedEstimate, reason: &str) -> CalibrationError {
    CalibrationError::Domain {
        family: estimate.family().name().to_string(),
        lower: estimate.lower_bound(),
        upper: estimate.upper_bound(),
        reason: reason.to_string(),
    }
}
