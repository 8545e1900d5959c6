use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow")]
    Overflow,
    #[error("Non-finite intermediate result")]
    NonFinite,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Number literal has a leading zero: {0}")]
    LeadingZero(String),
    #[error("Equation has no equality sign")]
    MissingEquality,
    #[error("Equation has more than one equality sign")]
    MultipleEquality,
    #[error("Equality sign inside an expression")]
    UnexpectedEquality,
}
