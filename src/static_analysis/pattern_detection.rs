//! Contains the structural signal detectors the classifiers run on: loop heads, brace-nesting
//! depth and recursive call sites.
//!
//! The nesting detector conflates *any* nested braces -- object literals, conditionals -- with
//! loop nesting. That conflation is a documented trait of these heuristics and is kept as-is;
//! the confidence score is where the uncertainty shows up.

use std::collections::HashSet;
use once_cell::sync::Lazy;
use regex::Regex;


static FOR_LOOPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"for\s*\(")
    .expect("BUG: hardcoded for-loop pattern failed to compile"));
static WHILE_LOOPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"while\s*\(")
    .expect("BUG: hardcoded while-loop pattern failed to compile"));
static DO_LOOPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"do\s*\{")
    .expect("BUG: hardcoded do-loop pattern failed to compile"));
static FUNCTION_DECLARATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"function\s+([A-Za-z_][A-Za-z0-9_]*)")
    .expect("BUG: hardcoded function-declaration pattern failed to compile"));
static CALL_SITES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(")
    .expect("BUG: hardcoded call-site pattern failed to compile"));


/// The structural signals extracted from a normalized snippet -- input to
/// [super::time_analysis] & [super::space_analysis]
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SnippetPatterns {
    /// number of `for (`, `while (` & `do {` loop heads found
    pub loop_count:           usize,
    /// maximum brace-nesting depth reached anywhere in the snippet
    pub nesting_depth:        usize,
    /// number of call sites whose callee matches a `function NAME` declared in the same snippet
    pub recursive_call_count: usize,
}

impl SnippetPatterns {
    pub fn has_recursion(&self) -> bool {
        self.recursive_call_count > 0
    }
}

/// Runs every detector over the (already normalized) snippet
pub fn detect_patterns(normalized_code: &str) -> SnippetPatterns {
    SnippetPatterns {
        loop_count:           loop_count(normalized_code),
        nesting_depth:        nesting_depth(normalized_code),
        recursive_call_count: recursive_call_count(normalized_code),
    }
}

/// Counts non-overlapping `for (...)`, `while (...)` & `do { ... }` loop heads
pub fn loop_count(code: &str) -> usize {
    FOR_LOOPS.find_iter(code).count()
        + WHILE_LOOPS.find_iter(code).count()
        + DO_LOOPS.find_iter(code).count()
}

/// Maximum brace-nesting depth: a character scan incrementing on `{` and decrementing on `}`.\
/// Stray closers never push the depth below zero.
pub fn nesting_depth(code: &str) -> usize {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for character in code.chars() {
        match character {
            '{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            },
            '}' => depth = depth.saturating_sub(1),
            _ => (),
        }
    }
    max_depth
}

/// Counts call sites whose callee name matches a `function NAME` declaration found in the same
/// snippet -- a positive count signals recursion.\
/// The declaration site itself is not a call site and is excluded from the count.
pub fn recursive_call_count(code: &str) -> usize {
    let mut declared_names = HashSet::new();
    let mut declaration_offsets = HashSet::new();
    for captures in FUNCTION_DECLARATIONS.captures_iter(code) {
        if let Some(name) = captures.get(1) {
            declared_names.insert(name.as_str());
            declaration_offsets.insert(name.start());
        }
    }
    if declared_names.is_empty() {
        return 0;
    }
    CALL_SITES.captures_iter(code)
        .filter_map(|captures| captures.get(1))
        .filter(|callee| !declaration_offsets.contains(&callee.start()))
        .filter(|callee| declared_names.contains(callee.as_str()))
        .count()
}


#[cfg(test)]
mod tests {

    //! Unit tests for [pattern_detection](super) module

    use super::*;


    #[test]
    fn counts_every_loop_flavor() {
        assert_eq!(loop_count("for (let i=0;i<n;i++) {} while (x) {} do { x--; } while (x > 0);"), 4);    // `do {` + its `while (`
        assert_eq!(loop_count("for (a) for (b) for (c)"), 3);
        assert_eq!(loop_count("no loops here"), 0);
    }

    #[test]
    fn tracks_the_deepest_brace_run() {
        assert_eq!(nesting_depth("{ { } { { } } }"), 3);
        assert_eq!(nesting_depth("flat"), 0);
        // stray closers must not wrap around
        assert_eq!(nesting_depth("} } { }"), 1);
    }

    /// a call of a locally-declared function is recursion; the declaration itself is not a call
    #[test]
    fn recursion_needs_a_real_call_site() {
        assert_eq!(recursive_call_count("function fib(n) { return fib(n-1) + fib(n-2); }"), 2);
        assert_eq!(recursive_call_count("function add(a, b) { return a + b; }"), 0);
        // calling someone else's function is not recursion
        assert_eq!(recursive_call_count("function run() { return helper(1); }"), 0);
    }

    /// mutually-recursive pairs count too -- every call resolving to a declared name does
    #[test]
    fn mutual_recursion_counts() {
        let code = "function even(n) { return n == 0 || odd(n-1); } function odd(n) { return n != 0 && even(n-1); }";
        assert_eq!(recursive_call_count(code), 2);
    }

    #[test]
    fn empty_snippet_has_no_signals() {
        assert_eq!(detect_patterns(""), SnippetPatterns { loop_count: 0, nesting_depth: 0, recursive_call_count: 0 });
    }
}
