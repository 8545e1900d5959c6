use log::{debug, info};
use rayon::prelude::*;

use crate::alphabet::{ALPHABET, EQUALITY_MARKER, EQUALS_SIGN, validate_equation_length};
use crate::candidate::CandidateBuilder;
use crate::expression::evaluate_candidate;
use crate::iterator::PermutationIterator;
use crate::solver::errors::SolverError;
use crate::solver::pairing;

/// Configuration for equation generation and pairing
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Fan work out across threads. Output order is identical either way.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Counters gathered while running the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollectionStats {
    pub permutations: usize,
    pub candidates: usize,
    pub equations: usize,
}

impl CollectionStats {
    fn merge(self, other: Self) -> Self {
        Self {
            permutations: self.permutations + other.permutations,
            candidates: self.candidates + other.candidates,
            equations: self.equations + other.equations,
        }
    }
}

/// Collapse the equality marker of a passing candidate to a single equals sign
fn render_equation(candidate: &str) -> String {
    candidate.replacen(EQUALITY_MARKER, &EQUALS_SIGN.to_string(), 1)
}

/// Drive permutations through the candidate builder and evaluator
fn collect_equations(permutations: PermutationIterator) -> (Vec<String>, CollectionStats) {
    let mut equations = Vec::new();
    let mut stats = CollectionStats::default();

    for permutation in permutations {
        stats.permutations += 1;
        for candidate in CandidateBuilder::build(&permutation) {
            stats.candidates += 1;
            if evaluate_candidate(&candidate) {
                debug!("Found equation: {}", candidate);
                equations.push(render_equation(&candidate));
            }
        }
    }

    stats.equations = equations.len();
    (equations, stats)
}

/// Main entry point for generating equations and disjoint pairs
pub struct EquationSolver {
    config: GeneratorConfig,
}

impl EquationSolver {
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Every true equation built from `length` distinct symbols, in discovery order
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is zero or exceeds the alphabet size.
    pub fn generate_valid_equations(&self, length: usize) -> Result<Vec<String>, SolverError> {
        self.generate_with_stats(length)
            .map(|(equations, _)| equations)
    }

    /// Like [`EquationSolver::generate_valid_equations`], also returning pipeline counters
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is zero or exceeds the alphabet size.
    pub fn generate_with_stats(
        &self,
        length: usize,
    ) -> Result<(Vec<String>, CollectionStats), SolverError> {
        validate_equation_length(length)?;
        info!(
            "Generating equations of length {} ({})",
            length,
            if self.config.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );

        let (equations, stats) = if self.config.parallel {
            // One branch per leading symbol; rayon's collect keeps branch order
            let branches = (0..ALPHABET.len())
                .into_par_iter()
                .map(|leading| {
                    PermutationIterator::with_leading(length, leading).map(collect_equations)
                })
                .collect::<Result<Vec<_>, _>>()?;

            branches.into_iter().fold(
                (Vec::new(), CollectionStats::default()),
                |(mut all, total), (equations, stats)| {
                    all.extend(equations);
                    (all, total.merge(stats))
                },
            )
        } else {
            collect_equations(PermutationIterator::new(length)?)
        };

        info!(
            "Visited {} permutations, evaluated {} candidates, found {} equations",
            stats.permutations, stats.candidates, stats.equations
        );
        Ok((equations, stats))
    }

    /// Every pair of equations whose symbols are disjoint apart from the equals sign
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is invalid or an equation contains a
    /// non-ASCII character.
    pub fn find_disjoint_pairs(
        &self,
        equations: &[String],
        length: usize,
    ) -> Result<Vec<(String, String)>, SolverError> {
        let pairs = pairing::find_pairs(equations, length, self.config.parallel)?;
        info!(
            "Found {} disjoint pairs among {} equations",
            pairs.len(),
            equations.len()
        );
        Ok(pairs)
    }
}

impl Default for EquationSolver {
    fn default() -> Self {
        Self::new()
    }
}
