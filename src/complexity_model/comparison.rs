//! Contains functions to rank complexity classes against each other -- the "worst of a set"
//! reduction and the pairwise comparison at a fixed input size.

use crate::complexity_model::{
    growth::operations_count,
    types::{ComplexityClass, ComplexityComparison},
};


/// Reduces `classes` by the fixed dominance order, returning the worst (highest-order) class.\
/// The reduce is stable -- on ties, the first occurrence wins -- and total: an empty slice yields
/// the cheapest class, [ComplexityClass::O1].
pub fn dominant_complexity(classes: &[ComplexityClass]) -> ComplexityClass {
    classes.iter().copied()
        .reduce(|worst, current| if current > worst { current } else { worst })
        .unwrap_or(ComplexityClass::O1)
}

/// Pits `a` against `b` at input size `input_size`: the class performing fewer operations wins and
/// `ratio` tells how many times more operations the loser performs.\
/// Equal operation counts produce `ratio = 1` with `a` as the winner (first-argument tie-break).
pub fn compare_complexities(a: ComplexityClass, b: ComplexityClass, input_size: u32) -> ComplexityComparison {
    let operations_a = operations_count(a, input_size);
    let operations_b = operations_count(b, input_size);
    if operations_a == operations_b {
        return ComplexityComparison {
            winner: a,
            ratio: 1.0,
            explanation: format!("{} and {} perform the same {} operations at n={}",
                                 a.notation(), b.notation(), operations_a, input_size),
        };
    }
    let (winner, winner_operations, loser, loser_operations) = if operations_a < operations_b {
        (a, operations_a, b, operations_b)
    } else {
        (b, operations_b, a, operations_a)
    };
    // IEEE division on purpose: a 0-operations winner (e.g. O(log n) at n=1) yields an infinite ratio
    let ratio = loser_operations as f64 / winner_operations as f64;
    ComplexityComparison {
        winner,
        ratio,
        explanation: format!("{} performs {} operations at n={} against {} operations for {} -- {:.1}x fewer",
                             winner.notation(), winner_operations, input_size, loser_operations, loser.notation(), ratio),
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [comparison](super) module

    use super::*;


    /// the worst class of the set must win, regardless of position
    #[test]
    fn dominant_picks_the_worst() {
        assert_eq!(dominant_complexity(&[ComplexityClass::ON, ComplexityClass::OLogN, ComplexityClass::ON2]),
                   ComplexityClass::ON2);
        assert_eq!(dominant_complexity(&[ComplexityClass::ONFactorial, ComplexityClass::O1]),
                   ComplexityClass::ONFactorial);
        assert_eq!(dominant_complexity(&[ComplexityClass::O1]),
                   ComplexityClass::O1);
    }

    /// an empty set reduces to the cheapest class instead of panicking
    #[test]
    fn dominant_of_nothing_is_constant() {
        assert_eq!(dominant_complexity(&[]), ComplexityClass::O1);
    }

    /// comparison at n=1000: O(1) must beat O(n) by exactly the input size
    #[test]
    fn constant_beats_linear() {
        let comparison = compare_complexities(ComplexityClass::O1, ComplexityClass::ON, 1000);
        assert_eq!(comparison.winner, ComplexityClass::O1);
        assert_eq!(comparison.ratio, 1000.0);
    }

    /// argument order must not change the winner, only the tie-break
    #[test]
    fn winner_is_symmetric() {
        let comparison = compare_complexities(ComplexityClass::ON2, ComplexityClass::OLogN, 100);
        assert_eq!(comparison.winner, ComplexityClass::OLogN);
        let comparison = compare_complexities(ComplexityClass::OLogN, ComplexityClass::ON2, 100);
        assert_eq!(comparison.winner, ComplexityClass::OLogN);
    }

    /// same class on both sides: ratio 1, first argument wins
    #[test]
    fn ties_break_to_the_first_argument() {
        let comparison = compare_complexities(ComplexityClass::ON, ComplexityClass::ON, 500);
        assert_eq!(comparison.winner, ComplexityClass::ON);
        assert_eq!(comparison.ratio, 1.0);
        // distinct classes may also tie: at n=1 both O(1) and O(n) cost a single operation
        let comparison = compare_complexities(ComplexityClass::ON, ComplexityClass::O1, 1);
        assert_eq!(comparison.winner, ComplexityClass::ON);
        assert_eq!(comparison.ratio, 1.0);
    }

    /// a 0-operations winner yields an infinite ratio, not a panic
    #[test]
    fn zero_operations_winner() {
        // O(log n) at n=1 rounds to 0 operations; O(n) costs 1
        let comparison = compare_complexities(ComplexityClass::OLogN, ComplexityClass::ON, 1);
        assert_eq!(comparison.winner, ComplexityClass::OLogN);
        assert!(comparison.ratio.is_infinite());
    }
}
