use crate::interpreter::lexer::Token;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Identity,
    /// `-x`
    Negate,
    /// `!x`
    Not,
}

/// Infix operators, listed from the loosest to the tightest binding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `||`
    Or,
    /// `&&`
    And,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// Binding level of a binary operator; a higher level binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `==`, `!=`
    Equality,
    /// `<`, `>`, `<=`, `>=`
    Relational,
    /// `+`, `-`
    Additive,
    /// `*`, `/`
    Multiplicative,
    /// `^`
    Power,
}

impl BinaryOperator {
    /// The grammar level this operator is parsed at.
    ///
    /// # Example
    /// ```
    /// use expreval::operator::{BinaryOperator, Precedence};
    ///
    /// assert_eq!(BinaryOperator::Sub.precedence(), Precedence::Additive);
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Or => Precedence::LogicalOr,
            Self::And => Precedence::LogicalAnd,
            Self::Equal | Self::NotEqual => Precedence::Equality,
            Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual => {
                Precedence::Relational
            },
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div => Precedence::Multiplicative,
            Self::Pow => Precedence::Power,
        }
    }

    /// Only `^` groups to the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not infix operators, including `!`,
/// which is only ever a prefix operator.
///
/// # Example
/// ```
/// use expreval::{
///     interpreter::lexer::Token,
///     operator::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::PipePipe => Some(BinaryOperator::Or),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Maps a token to the prefix operator it starts, if any.
#[must_use]
pub const fn token_to_unary_operator(token: &Token<'_>) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Identity),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}
