//! Implementations for structs/enums defined in [super::types]
//! -- the `Display` traits and the fixed per-class lookup tables.

use super::types::*;
use std::fmt::{Display, Formatter};


impl ComplexityClass {
    /// big-O notation for each enum element
    pub fn notation(&self) -> &'static str {
        match self {
            Self::O1          => "O(1)",
            Self::OLogN       => "O(log n)",
            Self::ON          => "O(n)",
            Self::ONLogN      => "O(n log n)",
            Self::ON2         => "O(n²)",
            Self::ON3         => "O(n³)",
            Self::O2PowN      => "O(2^n)",
            Self::ONFactorial => "O(n!)",
        }
    }
    /// verbose description for each enum element
    pub fn description(&self) -> &'static str {
        match self {
            Self::O1          => "O(1) -- constant: the work doesn't grow with the input size",
            Self::OLogN       => "O(log n) -- logarithmic: each step discards half of the remaining input",
            Self::ON          => "O(n) -- linear: the work grows in direct proportion to the input size",
            Self::ONLogN      => "O(n log n) -- linearithmic: linear work with a logarithmic factor, the mark of efficient sorts",
            Self::ON2         => "O(n²) -- quadratic: the work grows with the square of the input size, the mark of doubly nested loops",
            Self::ON3         => "O(n³) -- cubic: the work grows with the cube of the input size, the mark of triply nested loops",
            Self::O2PowN      => "O(2^n) -- exponential: the work doubles with every additional input element",
            Self::ONFactorial => "O(n!) -- factorial: the work multiplies with every possible ordering of the input",
        }
    }
    /// everyday metaphor for each enum element, for presentation alongside charts
    pub fn metaphor(&self) -> &'static str {
        match self {
            Self::O1          => "Grabbing the top card of a deck",
            Self::OLogN       => "Finding a name in a phone book",
            Self::ON          => "Reading every page of a book",
            Self::ONLogN      => "Sorting a deck by splitting it and merging the halves",
            Self::ON2         => "Introducing every guest to every other guest",
            Self::ON3         => "Inspecting every cell of a cube",
            Self::O2PowN      => "Trying every combination of a binary lock",
            Self::ONFactorial => "Auditioning every possible ordering of a playlist",
        }
    }
    /// display color for each enum element -- a green-to-red ramp along the dominance order,
    /// for charting callers
    pub fn chart_color(&self) -> &'static str {
        match self {
            Self::O1          => "#22c55e",
            Self::OLogN       => "#84cc16",
            Self::ON          => "#eab308",
            Self::ONLogN      => "#f59e0b",
            Self::ON2         => "#f97316",
            Self::ON3         => "#ef4444",
            Self::O2PowN      => "#dc2626",
            Self::ONFactorial => "#991b1b",
        }
    }
}
impl Display for ComplexityClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}


impl Display for ComplexityEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "--> Estimated  Time Complexity: {}\n\
                   --> Estimated Space Complexity: {}\n\
                   --> ~{} operations; confidence: {:.2}\n\
                   --> {}\n",
               self.time_complexity.notation(),
               self.space_complexity.notation(),
               self.operations,
               self.confidence,
               self.explanation)?;
        for suggestion in &self.optimization_suggestions {
            write!(f, "    * {}\n", suggestion)?;
        }
        Ok(())
    }
}


impl Display for ComplexityComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins ({:.1}x): {}", self.winner.notation(), self.ratio, self.explanation)
    }
}


impl Display for AlgorithmComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' comparison winner among {{", self.winner.name)?;
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}' ({})", algorithm.name, algorithm.time_complexity.notation())?;
        }
        write!(f, "}}: {}", self.explanation)
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [types_impl](super) submodule

    use super::super::types::ComplexityClass;


    /// assures the per-class lookup tables are total -- no variant may yield an empty string
    #[test]
    fn lookups_are_total() {
        for class in ComplexityClass::ALL {
            assert!(!class.notation().is_empty(),    "notation() is empty for {:?}",    class);
            assert!(!class.description().is_empty(), "description() is empty for {:?}", class);
            assert!(!class.metaphor().is_empty(),    "metaphor() is empty for {:?}",    class);
            assert!(class.chart_color().starts_with('#'), "chart_color() is not a hex color for {:?}", class);
        }
    }

    /// the derived [Ord] must match the documented dominance order
    #[test]
    fn dominance_order() {
        let mut previous = ComplexityClass::O1;
        for class in ComplexityClass::ALL {
            assert!(class >= previous, "dominance order broken: {:?} should not precede {:?}", class, previous);
            previous = class;
        }
        assert!(ComplexityClass::O1     < ComplexityClass::OLogN);
        assert!(ComplexityClass::ON3    < ComplexityClass::O2PowN);
        assert!(ComplexityClass::O2PowN < ComplexityClass::ONFactorial);
    }
}
