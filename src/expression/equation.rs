use std::fmt;

use log::debug;

use crate::alphabet::EQUALS_SIGN;
use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::parser::{Parser, Token, tokenize_spanned};

/// Two expressions joined by an equality sign
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub lhs: Expression,
    pub rhs: Expression,
}

impl Equation {
    /// Parse `lhs==rhs` (or `lhs=rhs`).
    ///
    /// # Errors
    ///
    /// Returns an error unless the source holds exactly one equality sign
    /// with a well-formed expression on each side.
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let tokens = tokenize_spanned(source)?;

        let mut splits = tokens
            .iter()
            .enumerate()
            .filter(|(_, (_, token))| *token == Token::Equals)
            .map(|(index, _)| index);

        let split = splits.next().ok_or(ExpressionError::MissingEquality)?;
        if splits.next().is_some() {
            return Err(ExpressionError::MultipleEquality);
        }

        let (left, right) = tokens.split_at(split);
        let right = right.get(1..).unwrap_or_default();

        Ok(Self {
            lhs: Parser::new(left).parse_all()?,
            rhs: Parser::new(right).parse_all()?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if either side fails to evaluate.
    pub fn holds(&self) -> Result<bool, ExpressionError> {
        let left = self.lhs.evaluate()?;
        let right = self.rhs.evaluate()?;
        Ok(left == right)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.lhs, EQUALS_SIGN, self.rhs)
    }
}

/// Whether a candidate is a well-formed, true equality.
///
/// Any parse or evaluation error counts as "not an equation".
pub fn evaluate_candidate(candidate: &str) -> bool {
    match Equation::parse(candidate).and_then(|equation| equation.holds()) {
        Ok(holds) => holds,
        Err(e) => {
            debug!("Discarding candidate '{}': {}", candidate, e);
            false
        }
    }
}
