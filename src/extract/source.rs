use std::fs;
use std::path::Path;

use crate::error::ExtractError;

/// Read a whole SavedVariables file as UTF-8 text.
///
/// The handle is closed before returning on every path.
pub fn read_source(path: &Path) -> Result<String, ExtractError> {
    fs::read_to_string(path).map_err(|source| ExtractError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
