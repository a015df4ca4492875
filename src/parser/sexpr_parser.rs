use super::ast::Node;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Parser turning a token stream into tagged syntax nodes
pub struct SExprParser {
    tokens: Vec<Token>,
    current: usize,
}

impl SExprParser {
    /// Creates a new S-expression parser
    pub fn new(tokens: Vec<Token>) -> Self {
        SExprParser { tokens, current: 0 }
    }

    /// Parses every top-level form
    pub fn parse(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while !self.is_at_end() {
            nodes.push(self.parse_node()?);
        }

        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<Node> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(text) => Ok(Node::Number(text)),
            TokenKind::Symbol(name) => Ok(Node::Symbol(name)),
            TokenKind::String(s) => Ok(Node::String(s)),
            TokenKind::Comment(c) => Ok(Node::Comment(c)),
            TokenKind::LeftParen => Ok(Node::SExpr(self.parse_group(')')?)),
            TokenKind::LeftBrace => Ok(Node::QExpr(self.parse_group('}')?)),
            TokenKind::RightParen | TokenKind::RightBrace => Err(Error::SyntaxError {
                line: token.line,
                col: token.column,
                message: format!("Unexpected closing '{}'", token.kind),
            }),
            TokenKind::Eof => Err(Error::SyntaxError {
                line: token.line,
                col: token.column,
                message: "Unexpected end of input".to_string(),
            }),
        }
    }

    /// Parse children up to and including the matching `close` delimiter
    fn parse_group(&mut self, close: char) -> Result<Vec<Node>> {
        let mut children = Vec::new();

        loop {
            let token = self.peek();
            match &token.kind {
                TokenKind::Eof => return Err(Error::UnexpectedEof { expected: close }),
                kind if kind.is_close() => {
                    let found = match kind {
                        TokenKind::RightParen => ')',
                        _ => '}',
                    };
                    if found == close {
                        self.advance();
                        return Ok(children);
                    }
                    return Err(Error::SyntaxError {
                        line: token.line,
                        col: token.column,
                        message: format!("Expected '{}', found '{}'", close, found),
                    });
                }
                _ => children.push(self.parse_node()?),
            }
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
            self.tokens[self.current - 1].clone()
        } else {
            self.tokens[self.current].clone()
        }
    }
}
