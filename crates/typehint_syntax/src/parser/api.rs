/// Parse a type-name hint with default [`ParseOptions`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns a [`TypeNameHintError`] if `source` is not exactly one well-formed type.
pub fn parse_type(source: &str) -> Result<TypeTree, TypeNameHintError> {
    parse_type_with(source, &ParseOptions::default())
}

/// Parse a type-name hint with explicit options.
///
/// ## Errors
/// Returns a [`TypeNameHintError`] if `source` is not exactly one well-formed type, or if it
/// nests deeper than `options.max_depth()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_type_with(source: &str, options: &ParseOptions) -> Result<TypeTree, TypeNameHintError> {
    Parser::new(source)
        .with_options(*options)
        .parse()
        .inspect_err(|err| tracing::debug!(reason = %err.reason(), "rejected type name hint"))
}

impl FromStr for TypeTree {
    type Err = TypeNameHintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}
