//! Contains the public estimation entry points, tying normalization, pattern detection and the
//! classifiers together into [ComplexityEstimate]s.
//!
//! [estimate_code()] never fails: any panic raised inside the heuristics is caught at this level
//! and replaced by a fixed low-confidence fallback estimate. That fallback-on-failure behavior is
//! a first-class contract of the estimator, not an edge case.

use std::panic::{self, UnwindSafe};
use crate::{
    configs::{COMPARISON_INPUT_SIZES, LONG_SNIPPET_THRESHOLD, REFERENCE_INPUT_SIZE},
    features::OUTPUT,
    complexity_model::{
        comparison::dominant_complexity,
        growth::operations_count,
        performance::performance_data,
        types::{AlgorithmComparison, AlgorithmDescriptor, ComplexityClass, ComplexityEstimate},
    },
    static_analysis::{
        normalization::normalize,
        pattern_detection::{detect_patterns, SnippetPatterns},
        space_analysis::classify_space_complexity,
        suggestions::{assemble_explanation, code_suggestions, descriptor_suggestions},
        time_analysis::classify_time_complexity,
    },
};
use once_cell::sync::Lazy;
use regex::Regex;


static DYNAMIC_EVALUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\beval\b|\bFunction\b")
    .expect("BUG: hardcoded dynamic-evaluation pattern failed to compile"));

/// confidence assigned when the heuristics blow up and the fallback estimate is returned
const FALLBACK_CONFIDENCE: f64 = 0.1;
/// confidence assigned to declared (descriptor) complexities -- metadata is treated as ground truth
const DECLARED_CONFIDENCE: f64 = 0.9;


/// Estimates the time & space complexity of `code` from its text patterns alone -- nothing is
/// parsed, executed nor timed.\
/// Never panics: on any internal failure the documented fallback estimate is returned instead.
pub fn estimate_code(code: &str) -> ComplexityEstimate {
    guarded(|| estimate_code_heuristics(code))
}

/// Builds a [ComplexityEstimate] from a descriptor's declared complexities, taken verbatim --
/// the operations count is computed at [REFERENCE_INPUT_SIZE] and the suggestions are
/// category-aware
pub fn estimate_descriptor(descriptor: &AlgorithmDescriptor) -> ComplexityEstimate {
    ComplexityEstimate {
        time_complexity:  descriptor.time_complexity,
        space_complexity: descriptor.space_complexity,
        operations:       operations_count(descriptor.time_complexity, REFERENCE_INPUT_SIZE),
        explanation:      format!("'{}' -- {}", descriptor.name,
                                  assemble_explanation(descriptor.time_complexity, descriptor.space_complexity)),
        optimization_suggestions: descriptor_suggestions(descriptor),
        confidence:       DECLARED_CONFIDENCE,
    }
}

/// Compares algorithm descriptors by their declared time complexities: the winner is the first
/// descriptor carrying the cheapest class, and each descriptor gets a performance series over
/// [COMPARISON_INPUT_SIZES] for charting.\
/// Total: an empty slice yields a degenerate comparison with a placeholder winner.
pub fn compare_descriptors(descriptors: &[AlgorithmDescriptor]) -> AlgorithmComparison {
    let Some(first) = descriptors.first() else {
        return AlgorithmComparison {
            algorithms: Vec::new(),
            winner: placeholder_descriptor(),
            explanation: "Nothing to compare -- no algorithms were given".to_string(),
            performance_data: Vec::new(),
        };
    };
    let declared: Vec<ComplexityClass> = descriptors.iter().map(|descriptor| descriptor.time_complexity).collect();
    let cheapest = declared.iter().copied()
        .reduce(|best, current| if current < best { current } else { best })
        .unwrap_or(first.time_complexity);
    let costliest = dominant_complexity(&declared);
    let winner = descriptors.iter()
        .find(|descriptor| descriptor.time_complexity == cheapest)
        .unwrap_or(first)
        .clone();
    let explanation = format!("'{}' wins: {} grows slowest of the set (the costliest contender grows as {}). {}",
                              winner.name, cheapest.notation(), costliest.notation(), cheapest.description());
    AlgorithmComparison {
        algorithms: descriptors.to_vec(),
        winner,
        explanation,
        performance_data: descriptors.iter()
            .map(|descriptor| performance_data(descriptor.time_complexity, &COMPARISON_INPUT_SIZES))
            .collect(),
    }
}

/// Sinks a printable estimation report through the feature-selected [OUTPUT] --
/// `report_stdout` (default), `report_stderr` or `no_report`
pub fn report_estimate(subject: &str, estimate: &ComplexityEstimate) {
    OUTPUT(&format!("'{}' complexity estimation:\n{}", subject, estimate));
}

/// The un-guarded heuristics pipeline -- kept panic-free by construction; [guarded()] stands
/// behind it anyway, honoring the never-fails contract
fn estimate_code_heuristics(code: &str) -> ComplexityEstimate {
    let normalized = normalize(code);
    let patterns = detect_patterns(&normalized);
    let time_complexity = classify_time_complexity(&normalized, &patterns);
    let space_complexity = classify_space_complexity(&normalized, &patterns);
    ComplexityEstimate {
        time_complexity,
        space_complexity,
        operations: rough_operations(&patterns),
        explanation: assemble_explanation(time_complexity, space_complexity),
        optimization_suggestions: code_suggestions(time_complexity, &patterns, &normalized),
        confidence: confidence_score(&normalized, &patterns),
    }
}

/// Converts any panic raised by `heuristics` into the documented fallback estimate
fn guarded(heuristics: impl FnOnce() -> ComplexityEstimate + UnwindSafe) -> ComplexityEstimate {
    panic::catch_unwind(heuristics)
        .unwrap_or_else(|_| fallback_estimate())
}

/// The fixed estimate returned whenever the heuristics encounter an internal failure
fn fallback_estimate() -> ComplexityEstimate {
    ComplexityEstimate {
        time_complexity:  ComplexityClass::ON,
        space_complexity: ComplexityClass::ON,
        operations:       100,
        explanation:      "The pattern heuristics failed on this snippet -- assuming linear time & space with low confidence".to_string(),
        optimization_suggestions: Vec::new(),
        confidence:       FALLBACK_CONFIDENCE,
    }
}

/// Order-of-magnitude operations signal for the raw-snippet path -- deliberately cruder than
/// [operations_count()]: an approximation flag, not a growth-function evaluation
fn rough_operations(patterns: &SnippetPatterns) -> u64 {
    if patterns.nesting_depth >= 2 {
        10_000
    } else if patterns.loop_count > 0 {
        1_000
    } else {
        10
    }
}

/// Heuristic self-assessment of the estimate: starts neutral at 0.5, earns credit for each
/// recognized structure, gets docked for oversized snippets & dynamic evaluation, and is always
/// clamped to `[0.1, 1.0]`
fn confidence_score(normalized_code: &str, patterns: &SnippetPatterns) -> f64 {
    let mut confidence: f64 = 0.5;
    if patterns.loop_count > 0 {
        confidence += 0.2;
    }
    if patterns.nesting_depth > 0 {
        confidence += 0.1;
    }
    if patterns.has_recursion() {
        confidence += 0.1;
    }
    if normalized_code.len() > LONG_SNIPPET_THRESHOLD {
        confidence -= 0.1;
    }
    if DYNAMIC_EVALUATION.is_match(normalized_code) {
        confidence -= 0.2;
    }
    confidence.clamp(FALLBACK_CONFIDENCE, 1.0)
}

fn placeholder_descriptor() -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        name:             "(none)".to_string(),
        description:      "placeholder winner of an empty comparison".to_string(),
        time_complexity:  ComplexityClass::O1,
        space_complexity: ComplexityClass::O1,
        code:             None,
        category:         String::new(),
    }
}
