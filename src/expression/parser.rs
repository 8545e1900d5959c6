use log::trace;

use crate::alphabet::EQUALS_SIGN;
use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(i64),
    Plus,
    Minus,
    Star,
    Slash,
    Equals,
}

impl Token {
    fn symbol(self) -> Option<char> {
        match self {
            Token::Number(_) => None,
            Token::Plus => Some('+'),
            Token::Minus => Some('-'),
            Token::Star => Some('*'),
            Token::Slash => Some('/'),
            Token::Equals => Some(EQUALS_SIGN),
        }
    }

    /// Binding power of a binary operator token
    fn precedence(self) -> Option<u8> {
        match self {
            Token::Plus | Token::Minus => Some(1),
            Token::Star | Token::Slash => Some(2),
            Token::Number(_) | Token::Equals => None,
        }
    }

    fn combine(self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            Token::Minus => Expression::Sub(l, r),
            Token::Star => Expression::Mul(l, r),
            Token::Slash => Expression::Div(l, r),
            _ => Expression::Add(l, r),
        }
    }
}

/// Token paired with its character offset in the source
pub(crate) type Spanned = (usize, Token);

fn number_literal(literal: &str) -> Result<i64, ExpressionError> {
    if literal.len() > 1 && literal.starts_with('0') {
        trace!("Rejecting number with leading zero: '{}'", literal);
        return Err(ExpressionError::LeadingZero(literal.to_string()));
    }

    // Callers only pass runs of ASCII digits
    literal.bytes().try_fold(0_i64, |acc, digit| {
        acc.checked_mul(10)
            .and_then(|shifted| shifted.checked_add(i64::from(digit.saturating_sub(b'0'))))
            .ok_or(ExpressionError::Overflow)
    })
}

pub(crate) fn tokenize_spanned(source: &str) -> Result<Vec<Spanned>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        let token = match c {
            '0'..='9' => {
                let mut end = position + c.len_utf8();
                while let Some(&(next_position, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    end = next_position + next.len_utf8();
                    chars.next();
                }
                let literal = source.get(position..end).unwrap_or_default();
                Token::Number(number_literal(literal)?)
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '=' => {
                if let Some(&(_, '=')) = chars.peek() {
                    chars.next();
                }
                Token::Equals
            }
            character => {
                return Err(ExpressionError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
        };
        tokens.push((position, token));
    }

    Ok(tokens)
}

/// # Errors
///
/// Returns an error on characters outside the alphabet, malformed number
/// literals, or literals that do not fit in an `i64`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ExpressionError> {
    Ok(tokenize_spanned(source)?
        .into_iter()
        .map(|(_, token)| token)
        .collect())
}

/// Precedence-climbing parser over one side of an equation
pub(crate) struct Parser<'a> {
    tokens: &'a [Spanned],
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Spanned]) -> Self {
        Self { tokens, cursor: 0 }
    }

    fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.cursor).copied()
    }

    fn unexpected((position, token): Spanned) -> ExpressionError {
        match (token, token.symbol()) {
            (Token::Equals, _) => ExpressionError::UnexpectedEquality,
            (_, Some(character)) => ExpressionError::UnexpectedCharacter {
                character,
                position,
            },
            (_, None) => ExpressionError::UnexpectedEnd,
        }
    }

    /// Parse the whole token slice as a single expression
    pub(crate) fn parse_all(mut self) -> Result<Expression, ExpressionError> {
        let expression = self.parse_binary(1)?;
        match self.peek() {
            None => Ok(expression),
            Some(spanned) => Err(Self::unexpected(spanned)),
        }
    }

    fn parse_operand(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some((_, Token::Number(n))) => {
                self.cursor += 1;
                Ok(Expression::Number(n))
            }
            Some(spanned) => Err(Self::unexpected(spanned)),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_operand()?;

        while let Some((_, token)) = self.peek()
            && let Some(precedence) = token.precedence()
            && precedence >= min_precedence
        {
            self.cursor += 1;
            let right = self.parse_binary(precedence + 1)?;
            left = token.combine(left, right);
        }

        Ok(left)
    }
}

/// # Errors
///
/// Returns an error if the source is not a single well-formed arithmetic
/// expression. Unary operators are not part of the grammar.
pub fn parse_expression(source: &str) -> Result<Expression, ExpressionError> {
    let tokens = tokenize_spanned(source)?;
    Parser::new(&tokens).parse_all()
}
