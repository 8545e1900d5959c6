use thiserror::Error;

/// Errors raised when a requested equation length cannot be served by the alphabet
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlphabetError {
    #[error("Equation length must be at least 1")]
    ZeroLength,
    #[error("Equation length {length} exceeds the {max} distinct symbols available")]
    LengthTooLarge { length: usize, max: usize },
    #[error("Symbol pool of {size} exceeds the {max} symbols a permutation walk can track")]
    PoolTooLarge { size: usize, max: usize },
}
