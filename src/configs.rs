//! Contains constants used throughout this crate

/// input size at which [crate::static_analysis::estimator::estimate_descriptor()] computes the
/// expected operations count for the declared time complexity
pub const REFERENCE_INPUT_SIZE: u32 = 100;

/// input sizes used to build the per-algorithm performance series when comparing algorithm descriptors
pub const COMPARISON_INPUT_SIZES: [u32; 5] = [10, 50, 100, 500, 1000];

/// inputs to the `O(2^n)` growth function are capped here -- larger values are computed *at* the cap,
/// never extrapolated, so callers get an approximation ceiling instead of an overflow
pub const EXPONENTIAL_INPUT_CAP: u32 = 20;

/// inputs to the `O(n!)` growth function are capped here -- same approximation ceiling rationale
/// as [EXPONENTIAL_INPUT_CAP]
pub const FACTORIAL_INPUT_CAP: u32 = 10;

/// normalized snippets longer than this are considered too big for the text heuristics
/// to remain trustworthy -- the confidence score is docked accordingly
pub const LONG_SNIPPET_THRESHOLD: usize = 1000;

/// milliseconds attributed to a single operation when deriving the synthetic `time_ms`
/// of a [crate::complexity_model::types::PerformanceDataPoint]
pub const MS_PER_OPERATION: f64 = 0.001;
