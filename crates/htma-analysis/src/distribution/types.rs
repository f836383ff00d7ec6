//! Distribution families and their parameters.

use std::f64::consts::{PI, SQRT_2};

use htma_core::errors::SamplingError;
use serde::{Deserialize, Serialize};
use statrs::function::erf::{erfc, erfc_inv};

/// The closed set of distribution families the engine can sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionFamily {
    Normal,
    LogNormal,
    Uniform,
    Triangular,
    Bernoulli,
}

impl DistributionFamily {
    /// All 5 families.
    pub const ALL: &'static [DistributionFamily] = &[
        Self::Normal,
        Self::LogNormal,
        Self::Uniform,
        Self::Triangular,
        Self::Bernoulli,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::LogNormal => "lognormal",
            Self::Uniform => "uniform",
            Self::Triangular => "triangular",
            Self::Bernoulli => "bernoulli",
        }
    }

    /// Whether values are drawn from a continuum (everything but Bernoulli).
    pub fn is_continuous(&self) -> bool {
        !matches!(self, Self::Bernoulli)
    }
}

impl std::fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Family-specific parameters. Derived once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DistributionParameters {
    Normal { mean: f64, std_dev: f64 },
    LogNormal { log_mean: f64, log_std_dev: f64 },
    Uniform { low: f64, high: f64 },
    Triangular { low: f64, mode: f64, high: f64 },
    Bernoulli { probability: f64 },
}

impl DistributionParameters {
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, SamplingError> {
        Self::Normal { mean, std_dev }.validated()
    }

    pub fn lognormal(log_mean: f64, log_std_dev: f64) -> Result<Self, SamplingError> {
        Self::LogNormal {
            log_mean,
            log_std_dev,
        }
        .validated()
    }

    pub fn uniform(low: f64, high: f64) -> Result<Self, SamplingError> {
        Self::Uniform { low, high }.validated()
    }

    pub fn triangular(low: f64, mode: f64, high: f64) -> Result<Self, SamplingError> {
        Self::Triangular { low, mode, high }.validated()
    }

    pub fn bernoulli(probability: f64) -> Result<Self, SamplingError> {
        Self::Bernoulli { probability }.validated()
    }

    fn validated(self) -> Result<Self, SamplingError> {
        self.validate()?;
        Ok(self)
    }

    /// Check the parameters describe a proper distribution.
    pub fn validate(&self) -> Result<(), SamplingError> {
        match *self {
            Self::Normal { mean, std_dev } => {
                require_finite("mean", mean)?;
                require_positive("std_dev", std_dev)
            }
            Self::LogNormal {
                log_mean,
                log_std_dev,
            } => {
                require_finite("log_mean", log_mean)?;
                require_positive("log_std_dev", log_std_dev)
            }
            Self::Uniform { low, high } => {
                require_finite("low", low)?;
                require_finite("high", high)?;
                if low >= high {
                    return Err(SamplingError::invalid(
                        "bounds",
                        format!("low ({low}) must be below high ({high})"),
                    ));
                }
                require_finite_width(low, high)?;
                Ok(())
            }
            Self::Triangular { low, mode, high } => {
                require_finite("low", low)?;
                require_finite("mode", mode)?;
                require_finite("high", high)?;
                if low >= high {
                    return Err(SamplingError::invalid(
                        "bounds",
                        format!("low ({low}) must be below high ({high})"),
                    ));
                }
                require_finite_width(low, high)?;
                if mode < low || mode > high {
                    return Err(SamplingError::invalid(
                        "mode",
                        format!("mode ({mode}) must lie within [{low}, {high}]"),
                    ));
                }
                Ok(())
            }
            Self::Bernoulli { probability } => {
                if !(0.0..=1.0).contains(&probability) {
                    return Err(SamplingError::invalid(
                        "probability",
                        format!("{probability} is outside [0, 1]"),
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn family(&self) -> DistributionFamily {
        match self {
            Self::Normal { .. } => DistributionFamily::Normal,
            Self::LogNormal { .. } => DistributionFamily::LogNormal,
            Self::Uniform { .. } => DistributionFamily::Uniform,
            Self::Triangular { .. } => DistributionFamily::Triangular,
            Self::Bernoulli { .. } => DistributionFamily::Bernoulli,
        }
    }

    /// Expected value of the distribution.
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } => mean,
            Self::LogNormal {
                log_mean,
                log_std_dev,
            } => (log_mean + log_std_dev * log_std_dev / 2.0).exp(),
            Self::Uniform { low, high } => (low + high) / 2.0,
            Self::Triangular { low, mode, high } => (low + mode + high) / 3.0,
            Self::Bernoulli { probability } => probability,
        }
    }

    pub fn std_dev(&self) -> f64 {
        match *self {
            Self::Normal { std_dev, .. } => std_dev,
            Self::LogNormal {
                log_mean,
                log_std_dev,
            } => {
                let s2 = log_std_dev * log_std_dev;
                ((s2.exp() - 1.0) * (2.0 * log_mean + s2).exp()).sqrt()
            }
            Self::Uniform { low, high } => (high - low) / 12f64.sqrt(),
            Self::Triangular { low, mode, high } => {
                ((low * low + mode * mode + high * high - low * mode - low * high - mode * high)
                    / 18.0)
                    .sqrt()
            }
            Self::Bernoulli { probability } => (probability * (1.0 - probability)).sqrt(),
        }
    }

    /// Probability density at `x`. For Bernoulli this is the probability
    /// mass at 0 or 1 and zero elsewhere.
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            Self::Normal { mean, std_dev } => std_normal_pdf((x - mean) / std_dev) / std_dev,
            Self::LogNormal {
                log_mean,
                log_std_dev,
            } => {
                if x <= 0.0 {
                    0.0
                } else {
                    std_normal_pdf((x.ln() - log_mean) / log_std_dev) / (x * log_std_dev)
                }
            }
            Self::Uniform { low, high } => {
                if (low..=high).contains(&x) {
                    1.0 / (high - low)
                } else {
                    0.0
                }
            }
            Self::Triangular { low, mode, high } => {
                if x < low || x > high {
                    0.0
                } else if x < mode {
                    2.0 * (x - low) / ((high - low) * (mode - low))
                } else if x == mode {
                    2.0 / (high - low)
                } else {
                    2.0 * (high - x) / ((high - low) * (high - mode))
                }
            }
            Self::Bernoulli { probability } => {
                if x == 1.0 {
                    probability
                } else if x == 0.0 {
                    1.0 - probability
                } else {
                    0.0
                }
            }
        }
    }

    /// Cumulative probability `P(X <= x)`.
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            Self::Normal { mean, std_dev } => std_normal_cdf((x - mean) / std_dev),
            Self::LogNormal {
                log_mean,
                log_std_dev,
            } => {
                if x <= 0.0 {
                    0.0
                } else {
                    std_normal_cdf((x.ln() - log_mean) / log_std_dev)
                }
            }
            Self::Uniform { low, high } => ((x - low) / (high - low)).clamp(0.0, 1.0),
            Self::Triangular { low, mode, high } => {
                if x <= low {
                    0.0
                } else if x >= high {
                    1.0
                } else if x <= mode {
                    (x - low).powi(2) / ((high - low) * (mode - low))
                } else {
                    1.0 - (high - x).powi(2) / ((high - low) * (high - mode))
                }
            }
            Self::Bernoulli { probability } => {
                if x < 0.0 {
                    0.0
                } else if x < 1.0 {
                    1.0 - probability
                } else {
                    1.0
                }
            }
        }
    }

    /// Inverse CDF. `None` when `p` is outside [0, 1].
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        let value = match *self {
            Self::Normal { mean, std_dev } => mean + std_dev * standard_normal_quantile(p),
            Self::LogNormal {
                log_mean,
                log_std_dev,
            } => (log_mean + log_std_dev * standard_normal_quantile(p)).exp(),
            Self::Uniform { low, high } => low + p * (high - low),
            Self::Triangular { low, mode, high } => {
                let split = (mode - low) / (high - low);
                if p <= split {
                    low + (p * (high - low) * (mode - low)).sqrt()
                } else {
                    high - ((1.0 - p) * (high - low) * (high - mode)).sqrt()
                }
            }
            Self::Bernoulli { probability } => {
                if p <= 1.0 - probability {
                    0.0
                } else {
                    1.0
                }
            }
        };
        Some(value)
    }
}

impl std::fmt::Display for DistributionParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal { mean, std_dev } => write!(f, "normal(mean={mean}, std_dev={std_dev})"),
            Self::LogNormal {
                log_mean,
                log_std_dev,
            } => write!(f, "lognormal(log_mean={log_mean}, log_std_dev={log_std_dev})"),
            Self::Uniform { low, high } => write!(f, "uniform({low}, {high})"),
            Self::Triangular { low, mode, high } => write!(f, "triangular({low}, {mode}, {high})"),
            Self::Bernoulli { probability } => write!(f, "bernoulli(p={probability})"),
        }
    }
}

/// Anything with a cumulative distribution function over the reals.
pub trait CumulativeDistribution {
    /// `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// CDF evaluated at every point of `xs`, in order.
    fn cdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// Probability mass between neighbouring grid points.
    ///
    /// For an ascending grid `x_0..x_{n-1}` returns
    /// `[0, F(x_1) - F(x_0), ..., F(x_{n-1}) - F(x_{n-2})]`; the leading zero keeps
    /// the output aligned with the grid.
    fn incremental_probability(&self, grid: &[f64]) -> Vec<f64> {
        let cdfs = self.cdf_many(grid);
        let mut increments = Vec::with_capacity(cdfs.len());
        if !cdfs.is_empty() {
            increments.push(0.0);
        }
        increments.extend(cdfs.windows(2).map(|w| w[1] - w[0]));
        increments
    }
}

impl CumulativeDistribution for DistributionParameters {
    fn cdf(&self, x: f64) -> f64 {
        DistributionParameters::cdf(self, x)
    }
}

/// Φ⁻¹(p) for the standard normal.
pub fn standard_normal_quantile(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

pub(crate) fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

pub(crate) fn std_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
}

fn require_finite(name: &'static str, value: f64) -> Result<(), SamplingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SamplingError::invalid(name, format!("{value} is not finite")))
    }
}

fn require_finite_width(low: f64, high: f64) -> Result<(), SamplingError> {
    if (high - low).is_finite() {
        Ok(())
    } else {
        Err(SamplingError::invalid(
            "bounds",
            format!("width of [{low}, {high}] overflows"),
        ))
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), SamplingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SamplingError::invalid(
            name,
            format!("{value} must be finite and positive"),
        ))
    }
}
