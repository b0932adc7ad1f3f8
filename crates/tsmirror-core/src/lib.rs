#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for tsmirror.
//!
//! Two layers:
//! - **Declarations**: records, aliases and their fields as handed over by
//!   source extraction (serializable, 1:1 with the extractor's JSON shape)
//! - **Type nodes**: the structural form of a single type expression, and
//!   its normalization into the canonical textual grammar the mapper reads

pub mod colors;
pub mod decl;
pub mod type_node;


pub use colors::Colors;
pub use decl::{AliasDecl, AliasTable, Declarations, FieldDecl, RecordDecl, RecordTable};
pub use type_node::{StructField, TypeNode};
