//! Parser configuration.

/// Default limit on how deeply argument lists may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Largest nesting limit a caller may configure.
///
/// The parser, [`crate::ast::TypeTree`]'s `Display` and `depth`, and dropping a tree all recurse once per level, so
/// the limit must stay well inside a default thread stack.
pub const MAX_DEPTH_CEILING: usize = 1024;

/// Options that tune a parse.
///
/// ## Notes
/// - The grammar itself is fixed; options only bound resource use.
/// - `max_depth` never exceeds [`MAX_DEPTH_CEILING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit, clamped to [`MAX_DEPTH_CEILING`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    /// Maximum number of nested `<...>` groups. `0` accepts only bare names.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
