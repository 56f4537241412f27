// Parser core type and entrypoint.
//
// This file is `include!`'d into `crate::parser`. The call stack of `type_expr` /
// `type_arguments` is the nesting stack: one frame pair per open `<`.

/// Parser state.
///
/// ## Notes
/// - The parser stops at the first error. There is no recovery and no partial tree.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser for `source` with default [`ParseOptions`].
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: lexer::lex(source),
            pos: 0,
            depth: 0,
            options: ParseOptions::default(),
        }
    }

    /// Replace the parser options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse the whole input as exactly one type.
    ///
    /// ## Errors
    /// Returns a [`TypeNameHintError`] describing the first grammar violation.
    pub fn parse(mut self) -> Result<TypeTree, TypeNameHintError> {
        let tree = self.type_expr()?;

        if !self.is_at_end() {
            return Err(self.trailing_input());
        }

        Ok(tree)
    }
}
