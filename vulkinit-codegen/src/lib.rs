//! # Vulkinit Codegen
//!
//! C++ struct-initializer generation from the Vulkan XML registry.
//!
//! This crate provides:
//! - Tag-only initializer generation for extensible structs
//! - Full-parameter initializer generation for tagged and untagged structs
//! - Platform-guard wrapping of platform-restricted functions
//! - Versioned generation configuration (skip sets, enum-code overrides)

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;
pub mod templates;

pub use config::GenConfig;
pub use error::CodegenError;
pub use generator::Generator;

/// Generates the initializer header from a registry document string.
///
/// # Arguments
/// * `xml` - Vulkan registry document content
/// * `config` - Generation configuration (skip sets, overrides)
///
/// # Returns
/// Generated C++ header as a string.
///
/// # Errors
/// Returns `CodegenError` if the document is malformed.
pub fn generate_from_xml(xml: &str, config: &GenConfig) -> Result<String, CodegenError> {
    let registry = vulkinit_registry::parse_registry(xml, &config.extract)?;
    let generator = Generator::new(&registry, config);
    Ok(generator.generate())
}

/// Generates the initializer header from a registry document file.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GenConfig,
) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, config)
}
