/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

/// All possible token types in Lispy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Atoms
    /// Integer literal text, `-?[0-9]+` (converted to a number by the reader)
    Number(String),
    /// Symbol name
    Symbol(String),
    /// String literal with escapes already resolved
    String(String),
    /// Line comment text without the leading `;`
    Comment(String),

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,

    // Special
    /// End of file marker
    Eof,
}

impl TokenKind {
    /// Check if the token closes a group
    pub fn is_close(&self) -> bool {
        matches!(self, TokenKind::RightParen | TokenKind::RightBrace)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Symbol(s) => write!(f, "{}", s),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::Comment(c) => write!(f, ";{}", c),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::LeftBrace => write!(f, "{{"),
            TokenKind::RightBrace => write!(f, "}}"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_classes() {
        assert!(TokenKind::RightParen.is_close());
        assert!(TokenKind::RightBrace.is_close());
        assert!(!TokenKind::LeftParen.is_close());
        assert!(!TokenKind::Eof.is_close());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::LeftBrace.to_string(), "{");
        assert_eq!(TokenKind::Number("-12".to_string()).to_string(), "-12");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }
}
