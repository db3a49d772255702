#![doc = include_str!("../README.md")]

pub mod complexity_model;
pub mod static_analysis;
pub mod catalog;
pub mod configs;
pub mod features;


// exported symbols
pub use {
    features::OUTPUT,
    complexity_model::{
        types::{
            ComplexityClass,
            ComplexityEstimate,
            AlgorithmDescriptor,
            PerformanceDataPoint,
            ComplexityComparison,
            AlgorithmComparison,
        },
        growth::operations_count,
        comparison::{dominant_complexity, compare_complexities},
        performance::performance_data,
    },
    static_analysis::estimator::{estimate_code, estimate_descriptor, compare_descriptors, report_estimate},
};
