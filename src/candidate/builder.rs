use log::trace;

use crate::alphabet::{EQUALITY_MARKER, is_operator};

pub struct CandidateBuilder;

impl CandidateBuilder {
    /// Whether the symbols can form an equation skeleton: no leading or
    /// trailing operator, no two operators in a row, and at least one operator.
    pub fn is_valid_skeleton(symbols: &[char]) -> bool {
        Self::marker_positions(symbols).is_some()
    }

    /// Interior positions where the equality marker may be inserted, or
    /// `None` when the skeleton is invalid.
    pub fn marker_positions(symbols: &[char]) -> Option<Vec<usize>> {
        let (first, last) = (symbols.first()?, symbols.last()?);
        if is_operator(*first) || is_operator(*last) {
            return None;
        }

        let mut positions = Vec::new();
        let mut previous_was_operator = false;
        let mut saw_operator = false;

        for (index, &symbol) in symbols.iter().enumerate() {
            let current_is_operator = is_operator(symbol);
            if previous_was_operator && current_is_operator {
                return None;
            }
            if index > 0 && !previous_was_operator && !current_is_operator {
                positions.push(index);
            }
            saw_operator |= current_is_operator;
            previous_was_operator = current_is_operator;
        }

        saw_operator.then_some(positions)
    }

    /// Every candidate string for one permutation, left to right over the marker position
    pub fn build(symbols: &[char]) -> Vec<String> {
        let Some(positions) = Self::marker_positions(symbols) else {
            trace!("Rejecting skeleton: {:?}", symbols);
            return Vec::new();
        };

        positions
            .into_iter()
            .map(|position| Self::insert_marker(symbols, position))
            .collect()
    }

    fn insert_marker(symbols: &[char], position: usize) -> String {
        let mut candidate = String::with_capacity(symbols.len() + EQUALITY_MARKER.len());
        let (left, right) = symbols.split_at(position.min(symbols.len()));
        candidate.extend(left);
        candidate.push_str(EQUALITY_MARKER);
        candidate.extend(right);
        candidate
    }
}
