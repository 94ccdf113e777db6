//! Formula front-end: text to tokens to tree, plus evaluation.

pub mod ast;
mod eval;
pub mod lexer;
pub mod parser;

#[cfg(test)]
mod proptests;

pub use ast::{BinaryOp, Expr, Function, UnaryOp};
pub use parser::{parse, Parser};

use crate::error::ExprError;

/// Parses `source` and checks that `x` is the only variable it uses.
pub fn compile(source: &str) -> Result<Expr, ExprError> {
    let expr = parse(source)?;
    validate(&expr)?;
    Ok(expr)
}

pub fn validate(expr: &Expr) -> Result<(), ExprError> {
    match expr.find_unknown_variable() {
        Some(name) => Err(ExprError::UnknownVariable(name.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;

    #[test]
    fn compile_accepts_formulas_in_x() {
        let e = compile("sin x + x^2").unwrap();
        assert_eq!(e.evaluate(0.0), 0.0);
    }

    #[test]
    fn compile_rejects_other_variables() {
        assert_eq!(
            compile("x + y"),
            Err(ExprError::UnknownVariable("y".to_string()))
        );
        assert_eq!(
            compile("e^x"),
            Err(ExprError::UnknownVariable("e".to_string()))
        );
    }

    #[test]
    fn compile_reports_syntax_first() {
        assert_eq!(
            compile("y +"),
            Err(ExprError::Syntax(SyntaxError::UnexpectedEnd))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            compile("2+").unwrap_err().to_string(),
            "could not parse expression: unexpected end of input"
        );
        assert_eq!(
            compile("t").unwrap_err().to_string(),
            "unknown variable 't' in expression"
        );
    }
}
