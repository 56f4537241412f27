//! Rendering configuration for type trees

/// Rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output notation
    pub style: RenderStyle,
    /// Number of spaces per nesting level (tree style only)
    pub indent_width: usize,
}

/// Output notation for a rendered type tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderStyle {
    /// The hint itself: `mapping<FOO,set<BAR>>`
    #[default]
    Canonical,
    /// Nested tuples: `('set', (('BAR', ()),))`
    Tuple,
    /// One name per line, children indented under their parent
    Tree,
    /// `{"name": ..., "subtypes": [...]}`
    Json,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            indent_width: 2,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output notation
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}
