use std::path::Path;

use crate::error::Day01Error;

/// Reads the whole puzzle input into memory.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_input(path: impl AsRef<Path>) -> Result<String, Day01Error> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| Day01Error::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(bytes = input.len(), "read puzzle input");
    Ok(input)
}
