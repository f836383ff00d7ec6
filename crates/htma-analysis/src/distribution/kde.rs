//! Gaussian kernel density estimate over simulated samples.
//!
//! Histograms are fine for plotting but poor for integrating; the KDE gives a
//! smooth CDF so a threshold loss can be integrated over simulated payoffs.
//! Works best on unimodal samples.

use htma_core::errors::{SamplingError, StatisticsError};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use rayon::prelude::*;

use super::types::{std_normal_cdf, std_normal_pdf, CumulativeDistribution};
use crate::samples::SampleSequence;

/// Gaussian KDE with Scott's-rule bandwidth.
#[derive(Debug, Clone)]
pub struct KernelDensity {
    samples: Vec<f64>,
    bandwidth: f64,
    /// Lower integration limit for the CDF.
    lower_bound: f64,
}

impl KernelDensity {
    /// Fit a KDE. The CDF integrates from `lower_bound`, or from the smallest
    /// sample when `None`.
    pub fn from_samples(samples: &[f64], lower_bound: Option<f64>) -> Result<Self, StatisticsError> {
        if samples.is_empty() {
            return Err(StatisticsError::EmptySample);
        }
        if samples.len() < 2 {
            return Err(StatisticsError::InvalidArgument {
                name: "samples",
                message: "at least two samples are needed to estimate a bandwidth".to_string(),
            });
        }
        if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
            return Err(StatisticsError::InvalidArgument {
                name: "samples",
                message: format!("sample {bad} is not finite"),
            });
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let spread = variance.sqrt();
        if spread <= 0.0 || !spread.is_finite() {
            return Err(StatisticsError::InvalidArgument {
                name: "samples",
                message: "samples have zero spread".to_string(),
            });
        }

        let bandwidth = spread * n.powf(-0.2);
        let lower_bound =
            lower_bound.unwrap_or_else(|| samples.iter().copied().fold(f64::INFINITY, f64::min));

        Ok(Self {
            samples: samples.to_vec(),
            bandwidth,
            lower_bound,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn pdf(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let total: f64 = self
            .samples
            .iter()
            .map(|xi| std_normal_pdf((x - xi) / h))
            .sum();
        total / (self.samples.len() as f64 * h)
    }

    /// Resample: pick a data point uniformly, then perturb it by the kernel.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<SampleSequence, SamplingError> {
        if count == 0 {
            return Err(SamplingError::invalid("count", "must be a positive integer"));
        }
        let values = (0..count)
            .map(|_| {
                let center = self.samples[rng.gen_range(0..self.samples.len())];
                let noise: f64 = StandardNormal.sample(rng);
                center + self.bandwidth * noise
            })
            .collect();
        Ok(SampleSequence::new(values))
    }
}

impl CumulativeDistribution for KernelDensity {
    /// Kernel mass between `lower_bound` and `x`.
    fn cdf(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let total: f64 = self
            .samples
            .iter()
            .map(|xi| std_normal_cdf((x - xi) / h) - std_normal_cdf((self.lower_bound - xi) / h))
            .sum();
        total / self.samples.len() as f64
    }

    fn cdf_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.par_iter().map(|&x| self.cdf(x)).collect()
    }
}
