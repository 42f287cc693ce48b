//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use vulkinit::prelude::*;
//! ```

// Registry types
pub use vulkinit_registry::{
    ArrayLen, ExtractOptions, ParseError, Registry, StructDef, StructMember, derive_stype,
    parse_registry, parse_registry_file,
};

// Codegen types
pub use vulkinit_codegen::{
    CodegenError, GenConfig, Generator, generate_from_file, generate_from_xml,
};
