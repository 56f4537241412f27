//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Report;
use thiserror::Error;

use crate::render::{RenderConfig, render};
use typehint_syntax::diagnostics::TypeNameHintError;
use typehint_syntax::lexer;
use typehint_syntax::options::ParseOptions;
use typehint_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Errors gathering hints before any parsing happens.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read hints from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no hints given; pass them as arguments or with --file")]
    Empty,
}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        CliError::failure(format!("Error: {e}"))
    }
}

/// Format a rejected hint with source highlighting.
fn format_diagnostic(err: TypeNameHintError) -> String {
    format!("{:?}", Report::new(err))
}

// ============================================================================
// parse
// ============================================================================

/// Parse every hint and render it, stopping at the first malformed one.
pub fn render_hints(
    hints: &[String],
    options: &ParseOptions,
    config: &RenderConfig,
) -> Result<Vec<String>, TypeNameHintError> {
    hints
        .iter()
        .map(|hint| parser::parse_type_with(hint, options).map(|tree| render(&tree, config)))
        .collect()
}

/// Parse hints and print their type trees.
pub fn parse_hints(hints: &[String], options: &ParseOptions, config: &RenderConfig) -> CliResult<ExitCode> {
    let rendered = render_hints(hints, options, config).map_err(|e| CliError::failure(format_diagnostic(e)))?;
    for line in rendered {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// check
// ============================================================================

/// Gather hints from arguments followed by the non-blank lines of `file`.
pub fn collect_hints(mut hints: Vec<String>, file: Option<&Path>) -> Result<Vec<String>, InputError> {
    if let Some(path) = file {
        tracing::debug!(path = %path.display(), "reading hints from file");
        let contents = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // Only `\n` separates hints; a `\r` before it stays part of the hint.
        hints.extend(
            contents
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string),
        );
    }

    if hints.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(hints)
}

/// Parse every hint, returning the errors of those that failed.
pub fn find_malformed(hints: &[String], options: &ParseOptions) -> Vec<TypeNameHintError> {
    hints
        .iter()
        .filter_map(|hint| parser::parse_type_with(hint, options).err())
        .collect()
}

/// Validate hints, printing a diagnostic for every malformed one.
pub fn check_hints(hints: Vec<String>, file: Option<&Path>, options: &ParseOptions) -> CliResult<ExitCode> {
    let hints = collect_hints(hints, file)?;
    let errors = find_malformed(&hints, options);
    tracing::info!(total = hints.len(), malformed = errors.len(), "checked hints");

    for err in &errors {
        eprintln!("{}", format_diagnostic(err.clone()));
    }

    if errors.is_empty() {
        println!("{} hint(s) ok", hints.len());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{} of {} hint(s) malformed", errors.len(), hints.len());
        Ok(ExitCode::FAILURE)
    }
}

// ============================================================================
// lex
// ============================================================================

/// Format each token of a hint as `start..end<TAB>kind`.
pub fn token_lines(hint: &str) -> Vec<String> {
    lexer::lex(hint)
        .into_iter()
        .map(|token| format!("{}..{}\t{}", token.span.start, token.span.end, token.kind))
        .collect()
}

/// Print the token stream of a hint.
pub fn lex_hint(hint: &str) -> CliResult<ExitCode> {
    for line in token_lines(hint) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::RenderStyle;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_hints_in_order() {
        let config = RenderConfig::new().with_style(RenderStyle::Tuple);
        let rendered = render_hints(&strings(&["set<A>", "B"]), &ParseOptions::default(), &config).unwrap();
        assert_eq!(rendered, strings(&["('set', (('A', ()),))", "('B', ())"]));
    }

    #[test]
    fn test_render_hints_stops_at_malformed() {
        let err = render_hints(
            &strings(&["A", "mapping<<>", "B<"]),
            &ParseOptions::default(),
            &RenderConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.input(), "mapping<<>");
    }

    #[test]
    fn test_find_malformed_reports_each_failure() {
        let hints = strings(&["mapping<FOO,BAR>", "mapping<>>", "set<UUID>", "a,b"]);
        let errors = find_malformed(&hints, &ParseOptions::default());
        let inputs: Vec<&str> = errors.iter().map(|e| e.input()).collect();
        assert_eq!(inputs, vec!["mapping<>>", "a,b"]);
    }

    #[test]
    fn test_collect_hints_reads_non_blank_lines() {
        let path = std::env::temp_dir().join(format!("typehint_hints_{}.txt", std::process::id()));
        fs::write(&path, "set<A>\n\n   \nmapping<B,C>\n").unwrap();

        let hints = collect_hints(strings(&["X"]), Some(&path)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(hints, strings(&["X", "set<A>", "mapping<B,C>"]));
    }

    #[test]
    fn test_collect_hints_keeps_carriage_returns() {
        let path = std::env::temp_dir().join(format!("typehint_crlf_{}.txt", std::process::id()));
        fs::write(&path, "set<A>\r\n\r\nB\r").unwrap();

        let hints = collect_hints(Vec::new(), Some(&path)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(hints, strings(&["set<A>\r", "B\r"]));
        let errors = find_malformed(&hints, &ParseOptions::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].input(), "set<A>\r");
    }

    #[test]
    fn test_collect_hints_missing_file() {
        let path = Path::new("definitely/not/a/real/hints.txt");
        let err = collect_hints(Vec::new(), Some(path)).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("hints.txt"));
    }

    #[test]
    fn test_collect_hints_requires_input() {
        assert!(matches!(collect_hints(Vec::new(), None), Err(InputError::Empty)));
    }

    #[test]
    fn test_token_lines() {
        assert_eq!(
            token_lines("a<b>"),
            strings(&["0..1\tname `a`", "1..2\t`<`", "2..3\tname `b`", "3..4\t`>`", "4..4\tend of input"])
        );
        assert_eq!(token_lines(""), strings(&["0..0\tend of input"]));
    }

    #[test]
    fn test_diagnostic_mentions_reason() {
        let err = parser::parse_type("mapping<FOO").unwrap_err();
        let text = format_diagnostic(err);
        assert!(text.contains("`<` is never closed"), "got: {text}");
    }
}
