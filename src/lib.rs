//! Equatix - A library for generating arithmetic equations with disjoint symbol sets
//!
//! This library enumerates every true equation that can be written with a fixed
//! number of distinct symbols from `0123456789+-*/` plus one equals sign, and
//! finds pairs of equations that together use each symbol at most once.

pub mod alphabet;
pub mod candidate;
pub mod expression;
pub mod iterator;
pub mod solver;

// Re-export the main public API
pub use alphabet::{AlphabetError, validate_equation_length};
pub use candidate::CandidateBuilder;
pub use expression::{Equation, Expression, ExpressionError, evaluate_candidate};
pub use iterator::PermutationIterator;
pub use solver::{CollectionStats, EquationSolver, GeneratorConfig, SolverError};

/// Generate every true equation built from `length` distinct symbols
///
/// Equations are rendered with a single `=` and returned in discovery order:
/// permutations in lexicographic alphabet order, then equals-sign position
/// from left to right.
///
/// # Arguments
///
/// * `length` - Number of non-`=` symbols in each equation
///
/// # Errors
///
/// This function will return an error if:
/// * `length` is zero
/// * `length` exceeds the 14 distinct symbols of the alphabet
///
/// # Examples
///
/// ```
/// use equatix::generate_valid_equations;
///
/// let equations = generate_valid_equations(4).unwrap_or_default();
/// assert!(equations.iter().any(|e| e == "1+2=3"));
/// ```
pub fn generate_valid_equations(length: usize) -> Result<Vec<String>, SolverError> {
    EquationSolver::new().generate_valid_equations(length)
}

/// Find every pair of equations whose symbols are disjoint apart from `=`
///
/// Pairs are ordered as discovered by scanning `equations[i]` against every
/// later `equations[j]`.
///
/// # Errors
///
/// This function will return an error if `length` is invalid or an equation
/// contains a non-ASCII character.
///
/// # Examples
///
/// ```
/// use equatix::find_disjoint_pairs;
///
/// let equations = vec!["1+2=3".to_string(), "9-5=4".to_string()];
/// let pairs = find_disjoint_pairs(&equations, 4).unwrap_or_default();
/// assert_eq!(pairs.len(), 1);
/// ```
pub fn find_disjoint_pairs(
    equations: &[String],
    length: usize,
) -> Result<Vec<(String, String)>, SolverError> {
    EquationSolver::new().find_disjoint_pairs(equations, length)
}
