//! Top-level header assembly.

use crate::config::GenConfig;
use crate::cpp::{ParamsInitGenerator, SimpleInitGenerator, UntaggedInitGenerator};
use crate::templates;
use vulkinit_registry::Registry;

/// Assembles the complete generated header from extracted registry
/// metadata: file framing plus the three initializer sections, each
/// bracketed by its doc-group markers.
pub struct Generator<'a> {
    registry: &'a Registry,
    config: &'a GenConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over extracted metadata.
    #[must_use]
    pub fn new(registry: &'a Registry, config: &'a GenConfig) -> Self {
        Self { registry, config }
    }

    /// Generates the full header text.
    ///
    /// Deterministic: the same registry and configuration always produce
    /// byte-identical output, and structs appear in registry declaration
    /// order within every section.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(templates::FILE_TOP);

        output.push_str(templates::SIMPLE_TOP);
        output.push_str(&SimpleInitGenerator::new(self.registry).generate());
        output.push_str(templates::SIMPLE_BOTTOM);

        output.push_str(templates::PARAMS_TOP);
        output.push_str(&ParamsInitGenerator::new(self.registry, self.config).generate());
        output.push_str(templates::PARAMS_BOTTOM);

        output.push_str(templates::UNTAGGED_TOP);
        output.push_str(&UntaggedInitGenerator::new(self.registry, self.config).generate());
        output.push_str(templates::FILE_BOTTOM);

        output
    }

    /// Writes the generated header to a stream.
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn generate_to<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.generate().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_from_xml;

    const SMALL_REGISTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <platforms comment="">
        <platform name="xlib" protect="VK_USE_PLATFORM_XLIB_KHR" comment="X Window System"/>
    </platforms>
    <types comment="">
        <type category="struct" name="VkOffset2D">
            <member><type>int32_t</type> <name>x</name></member>
            <member><type>int32_t</type> <name>y</name></member>
        </type>
        <type category="struct" name="VkRect3D">
            <member><type>int32_t</type> <name>x</name></member>
        </type>
        <type category="struct" name="VkFenceCreateInfo">
            <member values="VK_STRUCTURE_TYPE_FENCE_CREATE_INFO"><type>VkStructureType</type> <name>sType</name></member>
            <member optional="true">const <type>void</type>* <name>pNext</name></member>
            <member optional="true"><type>VkFenceCreateFlags</type> <name>flags</name></member>
        </type>
        <type category="struct" name="VkSemaphoreCreateInfo">
            <member values="VK_STRUCTURE_TYPE_SEMAPHORE_CREATE_INFO"><type>VkStructureType</type> <name>sType</name></member>
            <member optional="true">const <type>void</type>* <name>pNext</name></member>
        </type>
        <type category="struct" name="VkBaseInStructure">
            <member><type>VkStructureType</type> <name>sType</name></member>
            <member optional="true">const <type>struct VkBaseInStructure</type>* <name>pNext</name></member>
        </type>
        <type category="struct" name="VkXlibSurfaceCreateInfoKHR">
            <member values="VK_STRUCTURE_TYPE_XLIB_SURFACE_CREATE_INFO_KHR"><type>VkStructureType</type> <name>sType</name></member>
            <member optional="true">const <type>void</type>* <name>pNext</name></member>
            <member><type>Display</type>* <name>dpy</name></member>
        </type>
    </types>
    <extensions comment="">
        <extension name="VK_KHR_xlib_surface" number="5" platform="xlib" supported="vulkan">
            <require>
                <type name="VkXlibSurfaceCreateInfoKHR"/>
            </require>
        </extension>
    </extensions>
</registry>"#;

    fn generate() -> String {
        generate_from_xml(SMALL_REGISTRY, &GenConfig::default()).expect("Failed to generate")
    }

    #[test]
    fn test_file_framing() {
        let output = generate();
        assert!(output.starts_with("#ifndef VULKINIT_STRUCT_INIT_H_INCLUDED\n"));
        assert!(output.ends_with("#endif // #ifndef VULKINIT_STRUCT_INIT_H_INCLUDED\n"));
        assert!(output.contains("#include <vulkan/vulkan.h>"));
        assert!(output.contains("namespace vulkinit\n{"));
        assert!(output.contains("} // namespace vulkinit"));
        // Three opened doc groups, three closed.
        assert_eq!(output.matches("///@{").count(), 3);
        assert_eq!(output.matches("///@}").count(), 3);
    }

    #[test]
    fn test_guards_balanced_across_file() {
        let output = generate();
        assert_eq!(
            output.matches("#ifdef VK_USE_PLATFORM_XLIB_KHR").count(),
            // Once in the tag-only pass, once in the full-parameter pass.
            2
        );
        assert_eq!(output.matches("#ifdef").count(), output.matches("#endif").count() - 1,
            "each #ifdef pairs with one #endif (the extra #endif closes the include guard)");
    }

    #[test]
    fn test_all_three_sections_emitted() {
        let output = generate();
        // Tag-only initializer for every tagged struct.
        assert!(output.contains("inline VkFenceCreateInfo FenceCreateInfo()\n"));
        assert!(output.contains("inline VkSemaphoreCreateInfo SemaphoreCreateInfo()\n"));
        // Full-parameter initializer only where there is something to set.
        assert!(output.contains("inline VkFenceCreateInfo FenceCreateInfo(\n"));
        assert!(!output.contains("inline VkSemaphoreCreateInfo SemaphoreCreateInfo(\n"));
        // Untagged initializer.
        assert!(output.contains("inline VkOffset2D Offset2D(\n"));
    }

    #[test]
    fn test_exclusions_absent_everywhere() {
        let output = generate();
        assert!(!output.contains("VkBaseInStructure"));
        assert!(!output.contains("VkRect3D"));
    }

    #[test]
    fn test_idempotent_output() {
        assert_eq!(generate(), generate());
    }

    #[test]
    fn test_write_to_stream() {
        let registry = vulkinit_registry::parse_registry(
            SMALL_REGISTRY,
            &GenConfig::default().extract,
        )
        .expect("Failed to parse");
        let config = GenConfig::default();
        let generator = Generator::new(&registry, &config);

        let mut sink = Vec::new();
        generator.generate_to(&mut sink).expect("write failed");
        assert_eq!(String::from_utf8(sink).unwrap(), generator.generate());
    }
}
