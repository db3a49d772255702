//! Contains the explanation assembly & the optimization suggestion rules -- one set for raw
//! snippets, one set for algorithm descriptors (where the category is known).

use once_cell::sync::Lazy;
use regex::Regex;
use crate::{
    complexity_model::types::{AlgorithmDescriptor, ComplexityClass},
    static_analysis::pattern_detection::SnippetPatterns,
};


static LINEAR_LOOKUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"indexOf|\bfind\b")
    .expect("BUG: hardcoded linear-lookup pattern failed to compile"));


/// Concatenates the human-readable descriptions of the chosen time & space classes
pub fn assemble_explanation(time_complexity: ComplexityClass, space_complexity: ComplexityClass) -> String {
    format!("Time: {}. Space: {}.", time_complexity.description(), space_complexity.description())
}

/// Suggestion rules for the raw-snippet path.\
/// When no rule fires, a single "appears optimally complex" message is emitted, so the list is
/// never empty.
pub fn code_suggestions(time_complexity: ComplexityClass,
                        patterns:        &SnippetPatterns,
                        normalized_code: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    if matches!(time_complexity, ComplexityClass::ON2 | ComplexityClass::ON3) {
        suggestions.push("Nested loops dominate the cost -- consider a divide-and-conquer strategy or a hash table to avoid re-scanning the input".to_string());
    }
    if patterns.has_recursion() {
        suggestions.push("Recursive calls grow the call stack -- an iterative rewrite avoids that, and memoization removes repeated subproblems".to_string());
    }
    if time_complexity == ComplexityClass::ON && LINEAR_LOOKUPS.is_match(normalized_code) {
        suggestions.push("Linear scans like indexOf/find become O(1) with a hash-table lookup".to_string());
    }
    if suggestions.is_empty() {
        suggestions.push("The snippet appears optimally complex for what it does -- no rewrite suggested".to_string());
    }
    suggestions
}

/// Suggestion rules for the descriptor path, where the category is declared.\
/// Same never-empty guarantee as [code_suggestions()].
pub fn descriptor_suggestions(descriptor: &AlgorithmDescriptor) -> Vec<String> {
    let mut suggestions = Vec::new();
    let category = descriptor.category.to_lowercase();
    if descriptor.time_complexity == ComplexityClass::ON && category.contains("search") {
        suggestions.push("If the data is sorted, a binary search cuts lookups from O(n) to O(log n)".to_string());
    }
    if matches!(descriptor.time_complexity, ComplexityClass::ON2 | ComplexityClass::ON3) && category.contains("sort") {
        suggestions.push("Comparison sorts can reach O(n log n) -- consider merge sort or quick sort".to_string());
    }
    if descriptor.time_complexity == ComplexityClass::O2PowN {
        suggestions.push("Exponential blowup usually means repeated subproblems -- memoization or dynamic programming may bring this down to polynomial time".to_string());
    }
    if descriptor.time_complexity == ComplexityClass::ONFactorial {
        suggestions.push("Factorial growth brute-forces every permutation -- pruning (branch & bound) or an approximation usually has to replace it".to_string());
    }
    if suggestions.is_empty() {
        suggestions.push(format!("'{}' already sits at the expected complexity for its category -- no rewrite suggested", descriptor.name));
    }
    suggestions
}
