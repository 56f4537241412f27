/// Token-stream helpers.
///
/// Low-level primitives used throughout parsing: peeking/consuming tokens and building errors.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// `Eof` is never consumed, so `peek` stays in bounds.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_punctuation(id)
    }

    /// If the current token is the given punctuation, consume it and return `true`.
    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    fn error(&self, reason: HintErrorReason, span: Span) -> TypeNameHintError {
        TypeNameHintError::new(self.source, reason, span)
    }

    /// Build the error for input left over after the top-level type.
    fn trailing_input(&self) -> TypeNameHintError {
        let token = self.peek();
        let reason = if token.is_punctuation(PunctuationId::RAngle) {
            HintErrorReason::UnmatchedClose
        } else {
            HintErrorReason::TrailingInput {
                found: token.kind.clone(),
            }
        };
        self.error(reason, token.span)
    }
}
