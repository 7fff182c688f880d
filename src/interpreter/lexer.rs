use logos::Logos;

/// Represents a lexical token in the expression text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
///
/// Identifier tokens borrow their name from the source, so producing tokens
/// never allocates. End of input is represented by the lexer yielding no
/// token at all.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token<'src> {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?", malformed_number)]
    #[regex(r"\.[0-9]+[eE][+-]?", malformed_number)]
    #[token(".", malformed_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `max_value`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice())]
    Identifier(&'src str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// Reasons the lexer can fail on a piece of input.
///
/// The position and offending text are taken from the lexer span when the
/// error is converted into a [`ParseError`](crate::error::ParseError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// The input starts no token.
    #[default]
    UnrecognizedCharacter,
    /// A numeric literal is missing digits, e.g. `.` or `1e`.
    MalformedNumber,
}

impl Token<'_> {
    /// Human-readable description used in error messages.
    ///
    /// # Example
    /// ```
    /// use expreval::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::LParen.describe(), "'('");
    /// assert_eq!(Token::Identifier("x").describe(), "identifier");
    /// ```
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Identifier(_) => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::Bang => "'!'",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::AndAnd => "'&&'",
            Self::PipePipe => "'||'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Ignored => "whitespace",
        }
    }
}

/// Describes an optional token, naming the end of input for `None`.
#[must_use]
pub const fn describe(token: Option<&Token<'_>>) -> &'static str {
    match token {
        Some(token) => token.describe(),
        None => "end of input",
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::MalformedNumber)`: If the slice is not a valid float.
fn parse_number<'src>(lex: &logos::Lexer<'src, Token<'src>>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::MalformedNumber)
}

/// Rejects literals whose fraction or exponent has no digits.
const fn malformed_number<'src>(_: &logos::Lexer<'src, Token<'src>>) -> Result<f64, LexError> {
    Err(LexError::MalformedNumber)
}
