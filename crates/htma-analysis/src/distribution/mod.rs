//! Distribution families, seeded sampling, and density evaluation.

pub mod kde;
pub mod sampler;
pub mod types;

pub use kde::KernelDensity;
pub use sampler::{rng_from_seed, sample, sample_with, Sampler};
pub use types::{
    standard_normal_quantile, CumulativeDistribution, DistributionFamily, DistributionParameters,
};
