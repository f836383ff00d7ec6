//! How likely a calibration test score is for an estimator with a known hit rate.
//!
//! A perfectly calibrated expert answering ten 90% CI questions still misses one
//! or more about 65% of the time; these helpers put numbers on that.

use htma_core::errors::StatisticsError;
use statrs::distribution::{Binomial, Discrete};

/// `P(exactly hits correct | questions asked, true hit rate target)`.
pub fn calibration_probability(
    hits: u64,
    questions: u64,
    target: f64,
) -> Result<f64, StatisticsError> {
    if hits > questions {
        return Err(StatisticsError::InvalidArgument {
            name: "hits",
            message: format!("{hits} hits exceeds {questions} questions"),
        });
    }
    Ok(binomial(questions, target)?.pmf(hits))
}

/// Probability of every score `0..=questions`, indexed by hit count.
pub fn calibration_chances(questions: u64, target: f64) -> Result<Vec<f64>, StatisticsError> {
    let dist = binomial(questions, target)?;
    Ok((0..=questions).map(|k| dist.pmf(k)).collect())
}

fn binomial(questions: u64, target: f64) -> Result<Binomial, StatisticsError> {
    if !(0.0..=1.0).contains(&target) {
        return Err(StatisticsError::InvalidArgument {
            name: "target",
            message: format!("hit rate {target} is outside [0, 1]"),
        });
    }
    Binomial::new(target, questions).map_err(|e| StatisticsError::InvalidArgument {
        name: "target",
        message: e.to_string(),
    })
}
