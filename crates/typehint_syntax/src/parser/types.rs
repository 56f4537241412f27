/// Type-expression parsing methods.
///
/// Per nesting level the parser expects a name, then optionally `<`, then one or more
/// comma-separated types, then `>`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<TypeTree, TypeNameHintError> {
        let name = self.name()?;

        if !self.check_punct(PunctuationId::LAngle) {
            return Ok(TypeTree::leaf(name));
        }
        let open = self.advance().span;

        let subtypes = self.type_arguments(open)?;
        Ok(TypeTree::new(name, subtypes))
    }

    /// Parse `type ("," type)* ">"` after an opening `<` at `open`.
    fn type_arguments(&mut self, open: Span) -> Result<Vec<TypeTree>, TypeNameHintError> {
        if self.depth >= self.options.max_depth() {
            return Err(self.error(
                HintErrorReason::NestingTooDeep {
                    limit: self.options.max_depth(),
                },
                open,
            ));
        }
        self.depth += 1;

        let mut subtypes = Vec::new();
        loop {
            subtypes.push(self.type_expr()?);

            if self.match_punct(PunctuationId::Comma) {
                continue;
            }
            if self.match_punct(PunctuationId::RAngle) {
                break;
            }
            if self.is_at_end() {
                return Err(self.error(HintErrorReason::UnclosedBracket, open));
            }
            return Err(self.error(
                HintErrorReason::ExpectedSeparator {
                    found: self.peek().kind.clone(),
                },
                self.current_span(),
            ));
        }

        self.depth -= 1;
        Ok(subtypes)
    }

    fn name(&mut self) -> Result<String, TypeNameHintError> {
        match &self.peek().kind {
            TokenKind::Name(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            TokenKind::Punctuation(PunctuationId::RAngle) if self.depth == 0 => {
                Err(self.error(HintErrorReason::UnmatchedClose, self.current_span()))
            }
            found => Err(self.error(
                HintErrorReason::ExpectedName { found: found.clone() },
                self.current_span(),
            )),
        }
    }
}
