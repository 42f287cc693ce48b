//! # Vulkinit
//!
//! Generator of typed initializer functions for Vulkan API structs.
//!
//! Vulkinit reads the Khronos `vk.xml` registry and emits a C++ header of
//! constructor functions that initialize API structs correctly, including
//! the `sType` discriminant and `pNext` extension-chain pointer every
//! extensible struct must carry.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vulkinit::{GenConfig, generate_from_file};
//!
//! let config = GenConfig::default();
//! let header = generate_from_file(std::path::Path::new("vk.xml"), &config)?;
//! print!("{header}");
//! # Ok::<(), vulkinit::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`registry`] - vk.xml parsing and struct metadata extraction
//! - [`codegen`] - initializer-header generation

pub mod prelude;

/// Registry parsing and struct metadata extraction.
pub mod registry {
    pub use vulkinit_registry::*;
}

/// Initializer-header generation.
pub mod codegen {
    pub use vulkinit_codegen::*;
}

// Re-export commonly used items at the crate root
pub use vulkinit_codegen::{CodegenError, GenConfig, Generator, generate_from_file, generate_from_xml};
pub use vulkinit_registry::{
    ArrayLen, ExtractOptions, ParseError, Registry, StructDef, StructMember, derive_stype,
    parse_registry, parse_registry_file,
};
