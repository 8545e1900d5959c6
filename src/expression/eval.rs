use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::value::Value;

impl Expression {
    /// # Errors
    ///
    /// Returns an error on division by zero, integer overflow, or a
    /// non-finite floating-point intermediate.
    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        let result = match self {
            Expression::Number(n) => return Ok(Value::Int(*n)),
            Expression::Add(l, r) => l.evaluate()?.checked_add(r.evaluate()?),
            Expression::Sub(l, r) => l.evaluate()?.checked_sub(r.evaluate()?),
            Expression::Mul(l, r) => l.evaluate()?.checked_mul(r.evaluate()?),
            Expression::Div(l, r) => l.evaluate()?.checked_div(r.evaluate()?),
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}
