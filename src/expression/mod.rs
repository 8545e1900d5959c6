//! Expression module split into submodules for clarity

mod ast;
mod display;
mod equation;
mod errors;
mod eval;
mod parser;
mod value;

pub use ast::Expression;
pub use equation::{Equation, evaluate_candidate};
pub use errors::ExpressionError;
pub use parser::{Token, parse_expression, tokenize};
pub use value::Value;
