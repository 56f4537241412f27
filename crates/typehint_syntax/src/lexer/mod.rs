//! Lexer for type-name hints.
//!
//! Splits a hint at the structural characters `<`, `>` and `,`. Every maximal run of other
//! characters becomes a single `Name` token, so two names are never adjacent in the output.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use typehint_core::lang::punctuation;

/// Lexer for type-name hints.
///
/// Lexing cannot fail: every character is either punctuation or part of a name. Grammar errors
/// are reported by the parser.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given hint.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire hint.
    ///
    /// The token stream always ends with an `Eof` token spanning `len..len`.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match punctuation::from_char(c) {
            Some(id) => self.add_token(TokenKind::Punctuation(id), start),
            None => self.scan_name(start),
        }
    }

    fn scan_name(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if punctuation::is_structural(c) {
                break;
            }
            self.advance();
        }

        let spelling = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Name(spelling), start);
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }
}

/// Convenience function to lex a hint.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
