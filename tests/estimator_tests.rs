//! Applies the estimation engine to the scenarios an algorithm-visualization UI drives it through

use big_o_estimate::*;


/// two bare nested loops over a pre-existing buffer: quadratic time, constant space,
/// and an explanation that says so
#[test]
fn nested_loops_read_as_quadratic() {
    let estimate = estimate_code("for(let i=0;i<n;i++){for(let j=0;j<n;j++){ sum += arr[i][j]; }}");
    report_estimate("nested loops", &estimate);
    assert_eq!(estimate.time_complexity,  ComplexityClass::ON2);
    assert_eq!(estimate.space_complexity, ComplexityClass::O1);
    assert!(estimate.explanation.contains("quadratic"), "explanation should mention 'quadratic': {}", estimate.explanation);
}

/// an empty snippet still yields an estimate -- constant time, and nothing to be confident about
#[test]
fn empty_snippet_degrades_gracefully() {
    let estimate = estimate_code("");
    assert_eq!(estimate.time_complexity, ComplexityClass::O1);
    assert!(estimate.confidence <= 0.5, "no detected structure should not raise confidence above the 0.5 baseline: {}", estimate.confidence);
    assert!(!estimate.explanation.is_empty());
    assert!(!estimate.optimization_suggestions.is_empty());
}

/// branching recursion on the fibonacci classic: recursion detected, exponential time
#[test]
fn naive_fibonacci_reads_as_exponential() {
    let estimate = estimate_code("function fib(n){ if (n <= 1) return n; return fib(n-1)+fib(n-2); }");
    report_estimate("naive fibonacci", &estimate);
    assert_eq!(estimate.time_complexity,  ComplexityClass::O2PowN);
    assert_eq!(estimate.space_complexity, ComplexityClass::ON);
    assert!(estimate.optimization_suggestions.iter().any(|s| s.contains("memoization")),
            "recursive snippets should be pointed at memoization: {:?}", estimate.optimization_suggestions);
}

/// comparing linear & binary search: the asymptotically-cheapest declared class must win
#[test]
fn binary_search_wins_the_comparison() {
    let linear_search = AlgorithmDescriptor {
        name: "Linear Search".to_string(),
        description: "walks the whole collection".to_string(),
        time_complexity: ComplexityClass::ON,
        space_complexity: ComplexityClass::O1,
        code: None,
        category: "searching".to_string(),
    };
    let binary_search = AlgorithmDescriptor {
        name: "Binary Search".to_string(),
        description: "halves a sorted range".to_string(),
        time_complexity: ComplexityClass::OLogN,
        space_complexity: ComplexityClass::O1,
        code: None,
        category: "searching".to_string(),
    };
    let comparison = compare_descriptors(&[linear_search, binary_search]);
    assert_eq!(comparison.winner.name, "Binary Search");
    assert_eq!(comparison.algorithms.len(), 2);
    assert_eq!(comparison.performance_data.len(), 2, "one performance series per contender");
    for series in &comparison.performance_data {
        assert_eq!(series.iter().map(|point| point.input_size).collect::<Vec<_>>(),
                   vec![10, 50, 100, 500, 1000]);
    }
}

/// same input, same estimate -- no hidden state, no randomness anywhere in the engine
#[test]
fn estimation_is_idempotent() {
    let code = "function search(arr, x) { for (let i=0;i<arr.length;i++) { if (arr.indexOf(x) >= 0) return i; } return -1; }";
    assert_eq!(estimate_code(code), estimate_code(code));
    let descriptor = &catalog::SORT_ALGORITHMS[0];
    assert_eq!(estimate_descriptor(descriptor), estimate_descriptor(descriptor));
}

/// the engine is callable from any number of threads without coordination --
/// every thread must land on the single-threaded result, byte for byte
#[test]
fn concurrent_callers_agree() {
    let snippets = [
        "for(let i=0;i<n;i++){for(let j=0;j<n;j++){ sum += arr[i][j]; }}",
        "function fib(n){ return n <= 1 ? n : fib(n-1)+fib(n-2); }",
        "return lookup[key];",
        "",
    ];
    let expected: Vec<ComplexityEstimate> = snippets.iter().map(|code| estimate_code(code)).collect();
    crossbeam::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|_| {
                for (code, expected) in snippets.iter().zip(expected.iter()) {
                    assert_eq!(&estimate_code(code), expected, "concurrent estimation diverged for {:?}", code);
                }
            });
        }
    }).expect("a concurrent estimation thread panicked");
}

/// sweeps the growth functions over arbitrary sizes: the documented invariants must hold everywhere
#[test]
fn growth_invariants_hold_for_arbitrary_sizes() {
    for _ in 0..1000 {
        let n: u32 = rand::random::<u32>() % 1_000_000 + 1;
        assert_eq!(operations_count(ComplexityClass::O1, n), 1);
        assert_eq!(operations_count(ComplexityClass::ON, n), n as u64);
        for class in ComplexityClass::ALL {
            for point in performance_data(class, &[n]) {
                assert_eq!(point.time_ms, point.operations as f64 * 0.001);
            }
        }
    }
    // the caps make the expensive classes flat-line instead of overflowing
    assert_eq!(operations_count(ComplexityClass::O2PowN, 25),      operations_count(ComplexityClass::O2PowN, 20));
    assert_eq!(operations_count(ComplexityClass::ONFactorial, 15), operations_count(ComplexityClass::ONFactorial, 10));
}

/// the dominance reduction & pairwise comparison, over the public surface
#[test]
fn dominance_and_pairwise_comparison() {
    assert_eq!(dominant_complexity(&[ComplexityClass::ON, ComplexityClass::OLogN, ComplexityClass::ON2]),
               ComplexityClass::ON2);
    let comparison = compare_complexities(ComplexityClass::O1, ComplexityClass::ON, 1000);
    assert_eq!(comparison.winner, ComplexityClass::O1);
    assert_eq!(comparison.ratio, 1000.0);
}

/// the catalogs are valid estimator inputs: descriptor estimates trust them and
/// their snippets survive the text heuristics
#[test]
fn catalog_descriptors_flow_through_the_engine() {
    for entry in catalog::all_algorithms() {
        let estimate = estimate_descriptor(entry);
        assert_eq!(estimate.time_complexity,  entry.time_complexity);
        assert_eq!(estimate.space_complexity, entry.space_complexity);
        assert_eq!(estimate.confidence, 0.9);
        if let Some(code) = &entry.code {
            let from_text = estimate_code(code);
            assert!(from_text.confidence >= 0.1 && from_text.confidence <= 1.0);
        }
    }
    // the recursion classics keep their keyword-driven classifications on the raw-text path too
    let fib = &catalog::RECURSIVE_ALGORITHMS[1];
    let code = fib.code.as_deref().unwrap_or_default();
    assert_eq!(estimate_code(code).time_complexity, ComplexityClass::O2PowN);
}
