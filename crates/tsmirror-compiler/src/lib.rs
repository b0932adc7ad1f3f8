//! tsmirror compiler: Go declaration extraction and TypeScript emission.
//!
//! This crate provides the conversion pipeline:
//! - `extract` - Go source discovery and tree-sitter based declaration extraction
//! - `typegen` - type expression mapping and TypeScript declaration emission
//! - `output` - atomic output file writing
//!
//! [`convert`] wires the three together for the common "directory in, file
//! out" case.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::{Path, PathBuf};

pub mod extract;
pub mod output;
pub mod typegen;


pub use extract::{ExtractError, extract_path, extract_source};
pub use tsmirror_core::{Colors, Declarations};
pub use typegen::typescript::{Config, EmptyFieldName};

/// Errors that abort a conversion run.
///
/// Type mapping itself never fails; only reading the input and writing the
/// output can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse Go files in '{}'", input.display())]
    Extraction {
        input: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("failed to generate TypeScript file '{}'", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert the declarations under `input` into a TypeScript file at `output`.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    convert_with_config(input, output, Config::default())
}

/// [`convert`] with a custom emitter configuration.
///
/// Colors are always disabled for file output.
pub fn convert_with_config(input: &Path, output: &Path, config: Config) -> Result<()> {
    let decls = extract_path(input).map_err(|source| Error::Extraction {
        input: input.to_path_buf(),
        source,
    })?;

    let text = typegen::typescript::emit_with_config(&decls, config.colored(false));

    output::write_atomic(output, &text).map_err(|source| Error::Output {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        records = decls.records.len(),
        aliases = decls.aliases.len(),
        output = %output.display(),
        "conversion finished"
    );
    Ok(())
}
