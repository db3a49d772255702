//! Contains the performance-data generator: converts a complexity class + input sizes into a
//! series of chartable samples. Pure, total & order-preserving over the input sizes.

use crate::{
    configs::MS_PER_OPERATION,
    complexity_model::{
        growth::operations_count,
        types::{ComplexityClass, PerformanceDataPoint},
    },
};


/// Maps each of `input_sizes` to a [PerformanceDataPoint] for an algorithm of class `class`.\
/// `time_ms` is the synthetic proxy `operations ×` [MS_PER_OPERATION] -- nothing is executed
/// nor measured.
pub fn performance_data(class: ComplexityClass, input_sizes: &[u32]) -> Vec<PerformanceDataPoint> {
    input_sizes.iter()
        .map(|&input_size| {
            let operations = operations_count(class, input_size);
            PerformanceDataPoint {
                input_size,
                operations,
                time_ms: operations as f64 * MS_PER_OPERATION,
                complexity: class,
            }
        })
        .collect()
}
