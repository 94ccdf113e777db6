use thiserror::Error;

/// Errors raised while scanning formula text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("invalid number '{0}'")]
    MalformedNumber(String),
    /// A token was pushed back while the pushback slot was still occupied.
    #[error("token pushed back twice")]
    PushbackOccupied,
}

/// Errors raised while building the expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("unexpected token {0}")]
    UnexpectedToken(String),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("missing closing parenthesis")]
    MissingCloseParen,
    #[error("unexpected {0} after expression")]
    TrailingInput(String),
    #[error("expression nested too deeply")]
    TooDeep,
}

/// Everything that can stop a formula from being plotted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("could not parse expression: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("unknown variable '{0}' in expression")]
    UnknownVariable(String),
}

/// Layout problems detected before any part of a chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("plot area must be at least 3x3")]
    GridTooSmall,
    #[error("specified number width too large")]
    LabelTooWide,
    #[error("too many x-ticks")]
    TooManyXTicks,
    #[error("too many y-ticks")]
    TooManyYTicks,
    #[error("too few x-ticks")]
    TooFewXTicks,
    #[error("too few y-ticks")]
    TooFewYTicks,
    #[error("empty x-range")]
    EmptyXRange,
    #[error("empty y-range")]
    EmptyYRange,
}
