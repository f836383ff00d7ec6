//! Model Evaluator: aligned input sequences → output sequence.

pub mod evaluator;

pub use evaluator::{evaluate, evaluate_result};
