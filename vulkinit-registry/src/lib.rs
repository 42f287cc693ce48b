//! # Vulkinit Registry
//!
//! Vulkan XML registry parser and struct metadata extraction.
//!
//! This crate provides:
//! - Streaming parsing of the `vk.xml` registry document
//! - Reconstruction of struct member types and array bounds from the
//!   registry's loosely structured member markup
//! - Derivation of `VkStructureType` enumerant names from struct names
//! - Platform and extension guard-macro indexing

pub mod error;
pub mod naming;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use naming::derive_stype;
pub use parser::{parse_registry, parse_registry_file};
pub use types::{ArrayLen, CHAIN_FIELD, ExtractOptions, Registry, StructDef, StructMember, TAG_FIELD};
