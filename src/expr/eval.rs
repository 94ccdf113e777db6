use super::ast::{BinaryOp, Expr, Function, UnaryOp};

impl Expr {
    /// Evaluates the tree with the variable bound to `x`.
    ///
    /// Arithmetic follows IEEE-754, so division by zero or `ln` of a
    /// negative number give infinities and NaN rather than errors. A call to
    /// a name outside the function registry evaluates to `0`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Variable(_) => x,
            Expr::Unary {
                op: UnaryOp::Negate,
                operand,
            } => -operand.evaluate(x),
            Expr::Binary { op, left, right } => {
                let l = left.evaluate(x);
                let r = right.evaluate(x);
                match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Sub => l - r,
                    BinaryOp::Mul => l * r,
                    BinaryOp::Div => l / r,
                    BinaryOp::Pow => l.powf(r),
                }
            }
            Expr::Call { name, arg } => match Function::from_name(name) {
                Some(function) => function.apply(arg.evaluate(x)),
                None => 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;

    fn eval(source: &str, x: f64) -> f64 {
        parse(source).unwrap().evaluate(x)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("2+3*4", 0.0), 14.0);
        assert_eq!(eval("(2+3)*4", 0.0), 20.0);
        assert_eq!(eval("2-3-4", 0.0), 3.0);
        assert_eq!(eval("8/4/2", 0.0), 4.0);
        assert_eq!(eval("2^3^2", 0.0), 512.0);
        assert_eq!(eval("-2^2", 0.0), 4.0);
    }

    #[test]
    fn variable_binding() {
        assert_eq!(eval("x*x - 1", 3.0), 8.0);
        assert_eq!(eval("-x", -1.5), 1.5);
    }

    #[test]
    fn functions() {
        assert_eq!(eval("sin(0)", 0.0), 0.0);
        assert_eq!(eval("cos 0", 0.0), 1.0);
        assert_eq!(eval("ln 1", 0.0), 0.0);
        assert!((eval("arctan 1", 0.0) - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((eval("arccos x", 0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((eval("arcsin x", 1.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((eval("tan x", 1.0) - 1.0f64.tan()).abs() < 1e-12);
    }

    #[test]
    fn unknown_function_evaluates_to_zero() {
        let e = Expr::call("foo", Expr::Number(5.0));
        assert_eq!(e.evaluate(1.0), 0.0);
    }

    #[test]
    fn ieee_semantics() {
        assert_eq!(eval("1/0", 0.0), f64::INFINITY);
        assert_eq!(eval("-1/0", 0.0), f64::NEG_INFINITY);
        assert!(eval("0/0", 0.0).is_nan());
        assert!(eval("ln x", -1.0).is_nan());
        assert!(eval("x^0.5", -4.0).is_nan());
    }
}
