use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Day01Error {
    #[error("Failed to read input file {}", path.display())]
    #[diagnostic(
        code(day01::missing_input),
        help("Pass the puzzle input path as the first argument")
    )]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    #[diagnostic(
        code(day01::malformed_input),
        help("Each line must hold exactly two whitespace-separated integers, e.g. `3   4`")
    )]
    MalformedInput {
        line: usize,
        #[source_code]
        content: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: &'static str,
    },

    #[error("Left column has {left} values but right column has {right}")]
    #[diagnostic(code(day01::length_mismatch))]
    LengthMismatch { left: usize, right: usize },

    #[error("Integer overflow while computing {stage}")]
    #[diagnostic(code(day01::overflow))]
    Overflow { stage: &'static str },
}

impl Day01Error {
    pub(crate) fn malformed(
        line: usize,
        content: &str,
        span: (usize, usize),
        reason: &'static str,
    ) -> Self {
        Self::MalformedInput {
            line,
            content: content.to_string(),
            span: span.into(),
            reason,
        }
    }
}
