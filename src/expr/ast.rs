use std::fmt;

/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Tan,
    Cos,
    Arcsin,
    Arctan,
    Arccos,
    Ln,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::Sin,
        Function::Tan,
        Function::Cos,
        Function::Arcsin,
        Function::Arctan,
        Function::Arccos,
        Function::Ln,
    ];

    /// Looks up a function by the name used in formulas.
    pub fn from_name(name: &str) -> Option<Function> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Tan => "tan",
            Function::Cos => "cos",
            Function::Arcsin => "arcsin",
            Function::Arctan => "arctan",
            Function::Arccos => "arccos",
            Function::Ln => "ln",
        }
    }

    /// Angles are in radians.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Function::Sin => value.sin(),
            Function::Tan => value.tan(),
            Function::Cos => value.cos(),
            Function::Arcsin => value.asin(),
            Function::Arctan => value.atan(),
            Function::Arccos => value.acos(),
            Function::Ln => value.ln(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<BinaryOp> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
}

/// A parsed formula. Every composite node owns its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// Any identifier that is not a function name. Only `x` survives
    /// validation.
    Variable(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        name: String,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn negate(operand: Expr) -> Expr {
        Expr::Unary {
            op: UnaryOp::Negate,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(name: impl Into<String>, arg: Expr) -> Expr {
        Expr::Call {
            name: name.into(),
            arg: Box::new(arg),
        }
    }

    /// Returns the first variable, in left-to-right order, whose name is
    /// not `x`.
    pub fn find_unknown_variable(&self) -> Option<&str> {
        match self {
            Expr::Number(_) => None,
            Expr::Variable(name) if name == "x" => None,
            Expr::Variable(name) => Some(name),
            Expr::Unary { operand, .. } => operand.find_unknown_variable(),
            Expr::Binary { left, right, .. } => left
                .find_unknown_variable()
                .or_else(|| right.find_unknown_variable()),
            Expr::Call { arg, .. } => arg.find_unknown_variable(),
        }
    }

    /// Prefix form, e.g. `(+ 2 (* 3 x))`. Negation is written `N`.
    pub fn prefix(&self) -> String {
        let mut out = String::new();
        self.write_prefix(&mut out);
        out
    }

    fn write_prefix(&self, out: &mut String) {
        match self {
            Expr::Number(n) => out.push_str(&n.to_string()),
            Expr::Variable(name) => out.push_str(name),
            Expr::Unary { operand, .. } => {
                out.push_str("(N ");
                operand.write_prefix(out);
                out.push(')');
            }
            Expr::Binary { op, left, right } => {
                out.push('(');
                out.push(op.symbol());
                out.push(' ');
                left.write_prefix(out);
                out.push(' ');
                right.write_prefix(out);
                out.push(')');
            }
            Expr::Call { name, arg } => {
                out.push('(');
                out.push_str(name);
                out.push(' ');
                arg.write_prefix(out);
                out.push(')');
            }
        }
    }
}

/// Fully parenthesised infix. Feeding the output back through the parser
/// gives an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Unary { operand, .. } => write!(f, "(-{})", operand),
            Expr::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Expr::Call { name, arg } => write!(f, "{}({})", name, arg),
        }
    }
}
