//! Type declaration generation from extracted declarations.
//!
//! Currently supports TypeScript.
//!
//! # Example
//!
//! ```ignore
//! use tsmirror_compiler::typegen::typescript;
//!
//! let decls = tsmirror_compiler::extract_path(Path::new("./internal/model"))?;
//! let output = typescript::emit(&decls);
//! ```

pub mod typescript;
