//! Contains the time complexity classification built on the detected snippet patterns.

use once_cell::sync::Lazy;
use regex::Regex;
use crate::{
    complexity_model::types::ComplexityClass,
    static_analysis::pattern_detection::SnippetPatterns,
};


static EXPONENTIAL_RECURSION_KEYWORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)fib|factorial")
    .expect("BUG: hardcoded exponential-recursion pattern failed to compile"));
static HALVING_RECURSION_KEYWORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)binary|divide")
    .expect("BUG: hardcoded halving-recursion pattern failed to compile"));
static LOGARITHMIC_KEYWORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)log|binary|divide|half")
    .expect("BUG: hardcoded logarithmic-keywords pattern failed to compile"));


/// Classifies the time complexity of a normalized snippet, in priority order:
/// recursion shape first, then nesting depth, then loop presence, then logarithmic keywords.\
/// Total: every snippet lands on some [ComplexityClass].
pub fn classify_time_complexity(normalized_code: &str, patterns: &SnippetPatterns) -> ComplexityClass {
    if patterns.has_recursion() {
        classify_recursion(normalized_code)
    } else if patterns.nesting_depth >= 3 {
        ComplexityClass::ON3
    } else if patterns.nesting_depth == 2 {
        ComplexityClass::ON2
    } else if patterns.loop_count > 0 {
        ComplexityClass::ON
    } else if LOGARITHMIC_KEYWORDS.is_match(normalized_code) {
        ComplexityClass::OLogN
    } else {
        ComplexityClass::O1
    }
}

/// Recursion-specific heuristic: branching classics (`fib`, `factorial`) read as exponential,
/// halving strategies (`binary`, `divide`) read as logarithmic, anything else as linear
fn classify_recursion(normalized_code: &str) -> ComplexityClass {
    if EXPONENTIAL_RECURSION_KEYWORDS.is_match(normalized_code) {
        ComplexityClass::O2PowN
    } else if HALVING_RECURSION_KEYWORDS.is_match(normalized_code) {
        ComplexityClass::OLogN
    } else {
        ComplexityClass::ON
    }
}
