//! TypeScript declaration emitter.
//!
//! Layers, leaf first:
//! - `generics` - splits `Base[A, B]` into base and top-level arguments
//! - `mapper` - recursive type expression → TypeScript type text
//! - `emitter` / `render` - walks all declarations and renders `type` / `interface`
//! - `expand` - inline expansion of an instantiated generic record

mod builtins;
mod config;
mod emitter;
mod expand;
pub mod generics;
mod mapper;
mod render;
pub mod tags;

#[cfg(test)]
mod generics_tests;
#[cfg(test)]
mod mapper_tests;
#[cfg(test)]
mod tags_tests;

pub use config::{Config, EmptyFieldName};
pub use emitter::Emitter;
pub use expand::expand_record;
pub use generics::split_generic_type;
pub use mapper::{Substitutions, TypeMapper, VisitedSet};

use tsmirror_core::Declarations;

/// Emit TypeScript for all declarations.
pub fn emit(decls: &Declarations) -> String {
    Emitter::new(decls, Config::default()).emit()
}

/// Emit TypeScript for all declarations with custom config.
pub fn emit_with_config(decls: &Declarations, config: Config) -> String {
    Emitter::new(decls, config).emit()
}
