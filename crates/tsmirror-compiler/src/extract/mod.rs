//! Declaration extraction from Go sources.
//!
//! Input is a directory (walked recursively), a single `.go` file, or a
//! `.json` file holding already-extracted [`Declarations`]. Test files
//! (`*_test.go`) are never read. Directory entries are visited in file name
//! order so a run over the same tree always yields the same declarations.

mod go;


use std::fs;
use std::path::{Path, PathBuf};

use arborium_tree_sitter as tree_sitter;
use tsmirror_core::Declarations;
use walkdir::WalkDir;

pub use go::GoParser;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("input '{}' does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to walk '{}'", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error in '{}' at line {line}, column {column}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("failed to load the Go grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no tree for '{}'", path.display())]
    NoTree { path: PathBuf },

    #[error("invalid declarations JSON in '{}'", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Extract every declaration reachable from `path`.
pub fn extract_path(path: &Path) -> Result<Declarations, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::MissingInput(path.to_path_buf()));
    }

    if path.is_dir() {
        return extract_dir(path);
    }

    if path.extension().is_some_and(|ext| ext == "json") {
        let text = read(path)?;
        return Declarations::from_json(&text).map_err(|source| ExtractError::Json {
            path: path.to_path_buf(),
            source,
        });
    }

    let text = read(path)?;
    GoParser::new()?.parse_file(path, &text)
}

/// Extract declarations from one Go source text.
///
/// `path` only labels errors and log events.
pub fn extract_source(path: &Path, source: &str) -> Result<Declarations, ExtractError> {
    GoParser::new()?.parse_file(path, source)
}

fn extract_dir(dir: &Path) -> Result<Declarations, ExtractError> {
    let mut parser = GoParser::new()?;
    let mut decls = Declarations::new();
    let mut files = 0usize;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| ExtractError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_go_source(entry.path()) {
            continue;
        }

        let text = read(entry.path())?;
        decls.extend(parser.parse_file(entry.path(), &text)?);
        files += 1;
    }

    tracing::debug!(
        dir = %dir.display(),
        files,
        records = decls.records.len(),
        aliases = decls.aliases.len(),
        "extracted directory"
    );
    Ok(decls)
}

/// `*.go`, excluding `*_test.go`.
pub(crate) fn is_go_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !name.ends_with("_test.go")
}

fn read(path: &Path) -> Result<String, ExtractError> {
    fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })
}
