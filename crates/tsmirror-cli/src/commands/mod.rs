pub mod dump;
pub mod generate;
pub mod map;

#[cfg(test)]
mod dump_tests;

use std::error::Error as _;
use std::path::{Path, PathBuf};

use tsmirror_compiler::{Declarations, extract_path};

/// Failures surfaced by a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Convert(#[from] tsmirror_compiler::Error),

    #[error("cannot expand '{name}': unknown record or wrong number of type arguments")]
    Expand { name: String },

    #[error("failed to serialize declarations")]
    Json(#[from] serde_json::Error),

    #[error("failed to write to stdout")]
    Io(#[from] std::io::Error),
}

/// Print `err` and its source chain to stderr.
pub fn report(err: &CommandError) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

/// Extract declarations, wrapping failures the same way a full conversion does.
fn load_declarations(input: &Path) -> Result<Declarations, CommandError> {
    extract_path(input).map_err(|source| {
        tsmirror_compiler::Error::Extraction {
            input: PathBuf::from(input),
            source,
        }
        .into()
    })
}
