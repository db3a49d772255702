//! Contains the space complexity classification -- independent of the time classification,
//! driven by the same detected patterns plus allocation-shaped keywords.

use once_cell::sync::Lazy;
use regex::Regex;
use crate::{
    complexity_model::types::ComplexityClass,
    static_analysis::pattern_detection::SnippetPatterns,
};


static COLLECTION_KEYWORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)array|vector|list")
    .expect("BUG: hardcoded collection-keywords pattern failed to compile"));
static OBJECT_LITERALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*[A-Za-z_][A-Za-z0-9_]*\s*:")
    .expect("BUG: hardcoded object-literal pattern failed to compile"));

/// more object literals than this reads as data being accumulated, not just configured
const OBJECT_LITERAL_ALLOWANCE: usize = 2;


/// Classifies the space complexity of a normalized snippet: recursion implies call-stack growth,
/// collection keywords & piles of object literals imply linear storage, everything else is
/// constant.\
/// Total: every snippet lands on some [ComplexityClass].
pub fn classify_space_complexity(normalized_code: &str, patterns: &SnippetPatterns) -> ComplexityClass {
    if patterns.has_recursion() {
        ComplexityClass::ON
    } else if COLLECTION_KEYWORDS.is_match(normalized_code) {
        ComplexityClass::ON
    } else if OBJECT_LITERALS.find_iter(normalized_code).count() > OBJECT_LITERAL_ALLOWANCE {
        ComplexityClass::ON
    } else {
        ComplexityClass::O1
    }
}
