//! Type tree rendering
//!
//! Turns a parsed [`TypeTree`] back into text. The canonical style reproduces the hint a codec
//! would report for itself (`tuple<A,B,C>`); the other styles are for inspection.
//!
//! - Canonical: `mapping<FOO,set<BAR>>`
//! - Tuple: `('mapping', (('FOO', ()), ('set', (('BAR', ()),))))`
//! - Tree: an indented outline
//! - Json: `{"name": "mapping", "subtypes": [...]}`

mod config;
mod writer;

pub use config::{RenderConfig, RenderStyle};
pub use writer::RenderWriter;

use serde_json::{Value, json};
use typehint_syntax::ast::TypeTree;

/// Render a type tree with the given configuration.
///
/// Output never ends with a newline.
pub fn render(tree: &TypeTree, config: &RenderConfig) -> String {
    match config.style {
        RenderStyle::Canonical => tree.to_string(),
        RenderStyle::Tuple => {
            let mut out = String::new();
            write_tuple(tree, &mut out);
            out
        }
        RenderStyle::Tree => {
            let mut writer = RenderWriter::new(config.indent_width);
            write_outline(tree, &mut writer);
            let mut out = writer.finish();
            if out.ends_with('\n') {
                out.pop();
            }
            out
        }
        RenderStyle::Json => format!("{:#}", to_json(tree)),
    }
}

/// Convert a type tree into a JSON value.
pub fn to_json(tree: &TypeTree) -> Value {
    json!({
        "name": tree.name(),
        "subtypes": tree.subtypes().iter().map(to_json).collect::<Vec<_>>()
    })
}

fn write_tuple(tree: &TypeTree, out: &mut String) {
    out.push('(');
    push_quoted(tree.name(), out);
    out.push_str(", (");
    for (i, subtype) in tree.subtypes().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_tuple(subtype, out);
    }
    // A one-element tuple needs a trailing comma.
    if tree.subtypes().len() == 1 {
        out.push(',');
    }
    out.push_str("))");
}

fn push_quoted(name: &str, out: &mut String) {
    out.push('\'');
    for c in name.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
}

fn write_outline(tree: &TypeTree, writer: &mut RenderWriter) {
    writer.writeln(tree.name());
    writer.indent();
    for subtype in tree.subtypes() {
        write_outline(subtype, writer);
    }
    writer.dedent();
}
