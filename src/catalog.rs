//! Contains the fixed algorithm catalogs -- read-only reference data for presentation callers
//! and ready-made inputs for [crate::static_analysis::estimator::estimate_descriptor()] &
//! [crate::static_analysis::estimator::compare_descriptors()].
//!
//! The attached snippets are display material in the language the text heuristics expect; they
//! are never executed.

use once_cell::sync::Lazy;
use crate::complexity_model::types::{AlgorithmDescriptor, ComplexityClass};


/// the classic lookup strategies, cheapest first
pub static SEARCH_ALGORITHMS: Lazy<Vec<AlgorithmDescriptor>> = Lazy::new(|| vec![
    descriptor("Hash Table Lookup",
               "Jumps straight to the bucket the key hashes to",
               ComplexityClass::O1, ComplexityClass::ON,
               Some("function lookup(table, key) { return table[hash(key)]; }"),
               "searching"),
    descriptor("Binary Search",
               "Halves a sorted range until the target is cornered",
               ComplexityClass::OLogN, ComplexityClass::O1,
               Some("function binarySearch(arr, x) { let lo = 0, hi = arr.length - 1; while (lo <= hi) { const mid = (lo + hi) >> 1; if (arr[mid] === x) return mid; if (arr[mid] < x) lo = mid + 1; else hi = mid - 1; } return -1; }"),
               "searching"),
    descriptor("Linear Search",
               "Walks the whole collection until the target turns up",
               ComplexityClass::ON, ComplexityClass::O1,
               Some("function linearSearch(arr, x) { for (let i = 0; i < arr.length; i++) { if (arr[i] === x) return i; } return -1; }"),
               "searching"),
]);

/// the sorting staples taught against each other
pub static SORT_ALGORITHMS: Lazy<Vec<AlgorithmDescriptor>> = Lazy::new(|| vec![
    descriptor("Merge Sort",
               "Splits the input in halves, sorts each, merges the results",
               ComplexityClass::ONLogN, ComplexityClass::ON,
               Some("function mergeSort(arr) { if (arr.length <= 1) return arr; const mid = arr.length >> 1; return merge(mergeSort(arr.slice(0, mid)), mergeSort(arr.slice(mid))); }"),
               "sorting"),
    descriptor("Quick Sort",
               "Partitions around a pivot, then conquers each side",
               ComplexityClass::ONLogN, ComplexityClass::OLogN,
               Some("function quickSort(arr) { if (arr.length <= 1) return arr; const [pivot, ...rest] = arr; return [...quickSort(rest.filter(v => v < pivot)), pivot, ...quickSort(rest.filter(v => v >= pivot))]; }"),
               "sorting"),
    descriptor("Bubble Sort",
               "Swaps adjacent offenders until a full pass stays quiet",
               ComplexityClass::ON2, ComplexityClass::O1,
               Some("function bubbleSort(arr) { for (let i = 0; i < arr.length; i++) { for (let j = 0; j < arr.length - i - 1; j++) { if (arr[j] > arr[j+1]) { [arr[j], arr[j+1]] = [arr[j+1], arr[j]]; } } } return arr; }"),
               "sorting"),
]);

/// the recursion classics -- the expensive end of the dominance order
pub static RECURSIVE_ALGORITHMS: Lazy<Vec<AlgorithmDescriptor>> = Lazy::new(|| vec![
    descriptor("Factorial",
               "Multiplies its way down to 1, one stack frame per step",
               ComplexityClass::ON, ComplexityClass::ON,
               Some("function factorial(n) { return n <= 1 ? 1 : n * factorial(n - 1); }"),
               "recursion"),
    descriptor("Naive Fibonacci",
               "Recomputes both branches of every call, doubling the work each level",
               ComplexityClass::O2PowN, ComplexityClass::ON,
               Some("function fib(n) { return n <= 1 ? n : fib(n - 1) + fib(n - 2); }"),
               "recursion"),
    descriptor("Traveling Salesman (brute force)",
               "Tries every permutation of the route and keeps the shortest",
               ComplexityClass::ONFactorial, ComplexityClass::ON,
               Some("function shortestRoute(cities) { let best = Infinity; for (const route of permutations(cities)) { best = Math.min(best, routeLength(route)); } return best; }"),
               "recursion"),
]);


/// Chains every catalog, in the order declared above
pub fn all_algorithms() -> impl Iterator<Item = &'static AlgorithmDescriptor> {
    SEARCH_ALGORITHMS.iter()
        .chain(SORT_ALGORITHMS.iter())
        .chain(RECURSIVE_ALGORITHMS.iter())
}

fn descriptor(name:             &str,
              description:      &str,
              time_complexity:  ComplexityClass,
              space_complexity: ComplexityClass,
              code:             Option<&str>,
              category:         &str) -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        name:        name.to_string(),
        description: description.to_string(),
        time_complexity,
        space_complexity,
        code:        code.map(str::to_string),
        category:    category.to_string(),
    }
}
