use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Number(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        // Left-associative: a right operand of equal precedence needs parentheses
        fn fmt_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            r: &Expression,
            symbol: char,
            own: u8,
        ) -> fmt::Result {
            write_with_parens(f, l, precedence(l) < own)?;
            write!(f, "{}", symbol)?;
            write_with_parens(f, r, precedence(r) <= own)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => fmt_binary(f, l, r, '+', 1),
                Expression::Sub(l, r) => fmt_binary(f, l, r, '-', 1),
                Expression::Mul(l, r) => fmt_binary(f, l, r, '*', 2),
                Expression::Div(l, r) => fmt_binary(f, l, r, '/', 2),
            }
        }

        fmt_expression(f, self)
    }
}
