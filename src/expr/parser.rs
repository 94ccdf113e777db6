use super::ast::{BinaryOp, Expr};
use super::lexer::{Lexer, Token};
use crate::error::SyntaxError;

/// Deepest nesting of parentheses, unary minus, function calls and
/// right-hand operands accepted before parsing gives up.
pub const MAX_DEPTH: usize = 256;

/// Parses one complete formula.
pub fn parse(source: &str) -> Result<Expr, SyntaxError> {
    Parser::new(source).parse_expression()
}

/// Recursive-descent parser.
///
/// Grammar, loosest binding first:
///
/// ```text
/// expression := sum End
/// sum        := product (('+' | '-') sum)?
/// product    := power (('*' | '/') product)?
/// power      := primary ('^' power)?
/// primary    := number | variable | function primary
///             | '(' sum ')' | '-' primary
/// ```
///
/// Every binary level recurses into itself for its right operand, so all
/// operators group to the right: `2-3-4` is `2-(3-4)`. Unary minus lives in
/// `primary`, which makes `-2^2` equal to `(-2)^2`.
///
/// Nesting is limited to [`MAX_DEPTH`] levels, which also bounds the
/// recursion of evaluating and dropping the resulting tree.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            depth: 0,
        }
    }

    /// Parses up to the next `;` or the end of input. Anything else left
    /// over is an error.
    pub fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.sum()?;
        match self.lexer.next_token()? {
            Token::End => Ok(expr),
            token => Err(SyntaxError::TrailingInput(token.to_string())),
        }
    }

    fn sum(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.product()?;
        self.binary_tail(left, &['+', '-'], Self::sum)
    }

    fn product(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.power()?;
        self.binary_tail(left, &['*', '/'], Self::product)
    }

    fn power(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.primary()?;
        self.binary_tail(left, &['^'], Self::power)
    }

    /// If the next token is one of `ops`, parses the right operand with
    /// `same_level` and joins both sides. Otherwise the token goes back.
    fn binary_tail(
        &mut self,
        left: Expr,
        ops: &[char],
        same_level: fn(&mut Self) -> Result<Expr, SyntaxError>,
    ) -> Result<Expr, SyntaxError> {
        let token = self.lexer.next_token()?;
        let op = match &token {
            Token::Operator(c) if ops.contains(c) => BinaryOp::from_char(*c),
            _ => None,
        };

        match op {
            Some(op) => {
                let right = self.nested(same_level)?;
                Ok(Expr::binary(op, left, right))
            }
            None => {
                self.lexer.push_back(token)?;
                Ok(left)
            }
        }
    }

    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<Expr, SyntaxError>,
    ) -> Result<Expr, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep);
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.lexer.next_token()? {
            Token::Number(n) => Ok(Expr::Number(n)),
            Token::Identifier {
                name,
                function: None,
            } => Ok(Expr::Variable(name)),
            Token::Identifier {
                name,
                function: Some(_),
            } => {
                let arg = self.nested(Self::primary)?;
                Ok(Expr::call(name, arg))
            }
            Token::Operator('(') => self.nested(|parser| {
                let inner = parser.sum()?;
                match parser.lexer.next_token()? {
                    token if token.is_operator(')') => Ok(inner),
                    _ => Err(SyntaxError::MissingCloseParen),
                }
            }),
            Token::Operator('-') => {
                let operand = self.nested(Self::primary)?;
                Ok(Expr::negate(operand))
            }
            Token::End => Err(SyntaxError::UnexpectedEnd),
            token => Err(SyntaxError::UnexpectedToken(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    fn prefix(source: &str) -> String {
        parse(source).unwrap().prefix()
    }

    #[test]
    fn precedence() {
        assert_eq!(prefix("2+3*4"), "(+ 2 (* 3 4))");
        assert_eq!(prefix("(2+3)*4"), "(* (+ 2 3) 4)");
        assert_eq!(prefix("2*3^x"), "(* 2 (^ 3 x))");
    }

    #[test]
    fn every_binary_level_groups_right() {
        assert_eq!(prefix("2-3-4"), "(- 2 (- 3 4))");
        assert_eq!(prefix("8/4/2"), "(/ 8 (/ 4 2))");
        assert_eq!(prefix("2^3^2"), "(^ 2 (^ 3 2))");
        assert_eq!(prefix("1-2+3"), "(- 1 (+ 2 3))");
    }

    #[test]
    fn unary_minus_binds_tighter_than_power() {
        assert_eq!(prefix("-2^2"), "(^ (N 2) 2)");
        assert_eq!(prefix("--x"), "(N (N x))");
        assert_eq!(prefix("2*-x"), "(* 2 (N x))");
    }

    #[test]
    fn function_argument_is_a_primary() {
        assert_eq!(prefix("sin(0)"), "(sin 0)");
        assert_eq!(prefix("sin x^2"), "(^ (sin x) 2)");
        assert_eq!(prefix("ln -x"), "(ln (N x))");
        assert_eq!(prefix("cos sin x"), "(cos (sin x))");
    }

    #[test]
    fn unknown_identifiers_parse_as_variables() {
        assert_eq!(parse("y").unwrap(), Expr::Variable("y".to_string()));
    }

    #[test]
    fn semicolon_terminates() {
        assert_eq!(prefix("x + 1; garbage"), "(+ x 1)");
    }

    #[test]
    fn truncated_input_is_an_error() {
        assert_eq!(parse("2+"), Err(SyntaxError::UnexpectedEnd));
        assert_eq!(parse(""), Err(SyntaxError::UnexpectedEnd));
        assert_eq!(parse("sin"), Err(SyntaxError::UnexpectedEnd));
    }

    #[test]
    fn parentheses_must_match() {
        assert_eq!(parse("(1+2"), Err(SyntaxError::MissingCloseParen));
        assert_eq!(parse("(1+2]"), Err(SyntaxError::MissingCloseParen));
        assert_eq!(
            parse("1+2)"),
            Err(SyntaxError::TrailingInput("')'".to_string()))
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(
            parse("x x"),
            Err(SyntaxError::TrailingInput("'x'".to_string()))
        );
        assert_eq!(
            parse("foo(5)"),
            Err(SyntaxError::TrailingInput("'('".to_string()))
        );
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert_eq!(
            parse("2 % 3"),
            Err(SyntaxError::TrailingInput("'%'".to_string()))
        );
        assert_eq!(
            parse("*3"),
            Err(SyntaxError::UnexpectedToken("'*'".to_string()))
        );
        assert_eq!(
            parse("1 + ."),
            Err(SyntaxError::Lex(LexError::MalformedNumber(".".to_string())))
        );
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let parens = format!("{}x{}", "(".repeat(5000), ")".repeat(5000));
        assert_eq!(parse(&parens), Err(SyntaxError::TooDeep));

        let negations = format!("{}x", "-".repeat(200_000));
        assert_eq!(parse(&negations), Err(SyntaxError::TooDeep));

        let sum = vec!["1"; 5000].join("+");
        assert_eq!(parse(&sum), Err(SyntaxError::TooDeep));
    }

    #[test]
    fn nesting_below_the_limit_parses() {
        let depth = MAX_DEPTH - 1;
        let parens = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&parens), Ok(Expr::Variable("x".to_string())));

        let negations = format!("{}x", "-".repeat(depth));
        assert_eq!(parse(&negations).unwrap().evaluate(3.0), -3.0);
    }
}
