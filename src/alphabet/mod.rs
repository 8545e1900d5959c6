//! Symbol alphabet shared by every pipeline stage

mod constants;
mod errors;
mod validation;

pub use constants::{
    ALPHABET, DIGITS, EQUALITY_MARKER, EQUALS_SIGN, MAX_EQUATION_LENGTH, OPERATORS, is_operator,
};
pub use errors::AlphabetError;
pub use validation::validate_equation_length;

#[cfg(test)]
mod tests;
