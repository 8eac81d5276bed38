//! Contains the errors that stop the analysis of a single source file.

use std::path::PathBuf;

use caatinga_base::source_file;
use thiserror::Error;

/// Is an enumeration of the reasons a source file couldn't be analyzed.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("a path to the source file is required")]
    EmptyPath,

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid extension `{extension}`: only `.252` files are accepted")]
    InvalidExtension { extension: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SourceFile(#[from] source_file::Error),
}
