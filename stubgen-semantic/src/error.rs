use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for stubgen-semantic operations (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(stubgen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse symbol table")]
    #[diagnostic(code(stubgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

/// Translate serde_json's 1-based line/column into a byte span.
pub(crate) fn json_span(content: &str, err: &serde_json::Error) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(err.line() - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + err.column().saturating_sub(1)).min(content.len().saturating_sub(1));
    Some(SourceSpan::new(offset.into(), 1))
}
