use thiserror::Error;

use crate::alphabet::AlphabetError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Alphabet error: {0}")]
    AlphabetError(#[from] AlphabetError),
    #[error("Equation '{equation}' contains unsupported character '{character}'")]
    UnsupportedCharacter { equation: String, character: char },
}
