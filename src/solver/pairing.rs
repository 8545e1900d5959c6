use log::debug;
use rayon::prelude::*;

use crate::alphabet::validate_equation_length;
use crate::solver::errors::SolverError;

/// Set of ASCII characters in an equation, one bit per code point
fn symbol_mask(equation: &str) -> Result<u128, SolverError> {
    equation.chars().try_fold(0_u128, |mask, character| {
        if character.is_ascii() {
            Ok(mask | (1_u128 << u32::from(character)))
        } else {
            Err(SolverError::UnsupportedCharacter {
                equation: equation.to_string(),
                character,
            })
        }
    })
}

/// Exhaustive scan over `i < j`. A pair qualifies when its combined distinct
/// characters, equals signs collapsed, number exactly `2 * length + 1`.
pub(crate) fn find_pairs(
    equations: &[String],
    length: usize,
    parallel: bool,
) -> Result<Vec<(String, String)>, SolverError> {
    validate_equation_length(length)?;
    let target = 2 * length + 1;

    let masks = equations
        .iter()
        .map(|equation| symbol_mask(equation))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Scanning {} equations for pairs with {} distinct symbols",
        equations.len(),
        target
    );

    let pairs_from = |i: usize| -> Vec<(String, String)> {
        let (Some(first), Some(&mask)) = (equations.get(i), masks.get(i)) else {
            return Vec::new();
        };
        equations
            .iter()
            .zip(&masks)
            .skip(i + 1)
            .filter(|&(_, &other)| (mask | other).count_ones() as usize == target)
            .map(|(second, _)| (first.clone(), second.clone()))
            .collect()
    };

    let pairs = if parallel {
        (0..equations.len())
            .into_par_iter()
            .flat_map_iter(&pairs_from)
            .collect()
    } else {
        (0..equations.len()).flat_map(&pairs_from).collect()
    };

    Ok(pairs)
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::symbol_mask;
    use crate::solver::errors::SolverError;

    #[test]
    fn test_symbol_mask_collapses_repeats() {
        let mask = symbol_mask("1+2==3");
        assert!(matches!(mask, Ok(m) if m.count_ones() == 5));
    }

    #[test]
    fn test_symbol_mask_rejects_non_ascii() {
        assert_eq!(
            symbol_mask("1×2=2"),
            Err(SolverError::UnsupportedCharacter {
                equation: "1×2=2".to_string(),
                character: '×'
            })
        );
    }
}
