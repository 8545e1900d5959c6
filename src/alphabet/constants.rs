/// Digit symbols in canonical order
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Operator symbols in canonical order
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Full alphabet: digits first, then operators. Permutations are enumerated in this order.
pub const ALPHABET: [char; 14] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/',
];

/// An arrangement can never use more symbols than the alphabet holds
pub const MAX_EQUATION_LENGTH: usize = ALPHABET.len();

/// Marker inserted into a permutation to split it into two sides
pub const EQUALITY_MARKER: &str = "==";

/// Single-character rendering of the equality marker
pub const EQUALS_SIGN: char = '=';

#[inline]
pub fn is_operator(symbol: char) -> bool {
    OPERATORS.contains(&symbol)
}
