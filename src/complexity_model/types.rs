//! Defines enums & structs returned / shared by this crate's functions.\
//! See [super::types_impl] as well for implementations of the structs/enums defined here.


/// The canonical time & space complexity classes, in big-O notation, recognized by this crate.\
/// The declaration order *is* the dominance order -- from cheapest to most expensive -- so the
/// derived [Ord] may be used directly to pick the "worst" class of a set.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum ComplexityClass {
    O1,
    OLogN,
    ON,
    ONLogN,
    ON2,
    ON3,
    O2PowN,
    ONFactorial,
}

impl ComplexityClass {
    /// every recognized class, in dominance order -- no other value is representable
    pub const ALL: [ComplexityClass; 8] = [
        ComplexityClass::O1,
        ComplexityClass::OLogN,
        ComplexityClass::ON,
        ComplexityClass::ONLogN,
        ComplexityClass::ON2,
        ComplexityClass::ON3,
        ComplexityClass::O2PowN,
        ComplexityClass::ONFactorial,
    ];
}

/// What the estimator hands back for every analysis -- built fresh on each call, never mutated
/// afterwards, never persisted.\
/// See [crate::static_analysis::estimator::estimate_code()] & [crate::static_analysis::estimator::estimate_descriptor()]
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityEstimate {
    pub time_complexity:  ComplexityClass,
    pub space_complexity: ComplexityClass,
    /// rough operations count backing the estimate -- an order-of-magnitude signal, deliberately
    /// decoupled from [super::growth::operations_count()] on the code-analysis path
    pub operations:       u64,
    /// human-readable description of the chosen time & space classes
    pub explanation:      String,
    pub optimization_suggestions: Vec<String>,
    /// heuristic self-assessment of how trustworthy this estimate is -- always in `[0.1, 1.0]`;
    /// not a statistical probability
    pub confidence:       f64,
}

/// Immutable reference data describing a known algorithm -- the estimator trusts these declared
/// complexities verbatim.\
/// Fixed catalogs of these live in [crate::catalog].
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmDescriptor {
    pub name:             String,
    pub description:      String,
    pub time_complexity:  ComplexityClass,
    pub space_complexity: ComplexityClass,
    /// optional reference implementation, for display purposes only -- never executed
    pub code:             Option<String>,
    /// free-form grouping -- "searching", "sorting", ... -- consulted by the suggestion rules
    pub category:         String,
}

/// A single sample of a growth curve, for charting.\
/// `time_ms` is a deterministic proxy (`operations` × [crate::configs::MS_PER_OPERATION]),
/// not a measured duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceDataPoint {
    pub input_size: u32,
    pub operations: u64,
    pub time_ms:    f64,
    pub complexity: ComplexityClass,
}

/// Outcome of pitting two complexity classes against each other at a fixed input size.\
/// See [super::comparison::compare_complexities()]
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityComparison {
    /// the class performing fewer operations -- the first argument, on ties
    pub winner:      ComplexityClass,
    /// how many times more operations the loser performs -- 1.0 on ties
    pub ratio:       f64,
    pub explanation: String,
}

/// Outcome of comparing a set of algorithm descriptors.\
/// See [crate::static_analysis::estimator::compare_descriptors()]
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmComparison {
    /// the compared descriptors, in the order given
    pub algorithms:       Vec<AlgorithmDescriptor>,
    /// the first descriptor declaring the cheapest time complexity of the set
    pub winner:           AlgorithmDescriptor,
    pub explanation:      String,
    /// one performance series per descriptor, over [crate::configs::COMPARISON_INPUT_SIZES],
    /// parallel to `algorithms`
    pub performance_data: Vec<Vec<PerformanceDataPoint>>,
}
