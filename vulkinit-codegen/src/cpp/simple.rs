//! Tag-only initializer generation.

use crate::cpp::format::{guard_close, guard_open};
use vulkinit_registry::{CHAIN_FIELD, Registry, TAG_FIELD};

/// Generator for zero-argument initializers that set only the type tag and
/// extension-chain pointer of tagged structs, leaving every other field in
/// its default state.
pub struct SimpleInitGenerator<'a> {
    registry: &'a Registry,
}

impl<'a> SimpleInitGenerator<'a> {
    /// Creates a new tag-only initializer generator.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Generates the section body, one function per tagged struct, in
    /// registry declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for def in &self.registry.structs {
            if !def.tagged {
                continue;
            }
            let guard = self.registry.guard_for(&def.name);
            guard_open(&mut output, guard);
            output.push_str(&format!("inline {} {}()\n", def.name, def.trimmed_name()));
            output.push_str("{\n");
            output.push_str(&format!("  {} info;\n", def.name));
            output.push_str(&format!("  info.{} = {};\n", TAG_FIELD, def.stype));
            output.push_str(&format!("  info.{} = nullptr;\n", CHAIN_FIELD));
            output.push_str("  return info;\n");
            output.push_str("}\n");
            guard_close(&mut output, guard);
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vulkinit_registry::{StructDef, StructMember};

    fn member(name: &str, ty: &str) -> StructMember {
        StructMember {
            name: name.to_string(),
            ty: ty.to_string(),
            array_len: None,
        }
    }

    fn tagged_struct(name: &str, stype: &str) -> StructDef {
        StructDef {
            name: name.to_string(),
            stype: stype.to_string(),
            members: vec![
                member(TAG_FIELD, "VkStructureType"),
                member(CHAIN_FIELD, "const void*"),
            ],
            tagged: true,
        }
    }

    #[test]
    fn test_simple_init_shape() {
        let mut registry = Registry::default();
        registry.structs.push(tagged_struct(
            "VkFenceCreateInfo",
            "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO",
        ));

        let output = SimpleInitGenerator::new(&registry).generate();
        assert_eq!(
            output,
            "inline VkFenceCreateInfo FenceCreateInfo()\n\
             {\n\
             \x20 VkFenceCreateInfo info;\n\
             \x20 info.sType = VK_STRUCTURE_TYPE_FENCE_CREATE_INFO;\n\
             \x20 info.pNext = nullptr;\n\
             \x20 return info;\n\
             }\n\n"
        );
    }

    #[test]
    fn test_untagged_struct_omitted() {
        let mut registry = Registry::default();
        registry.structs.push(StructDef {
            name: "VkOffset2D".to_string(),
            stype: "VK_STRUCTURE_TYPE_OFFSET_2D".to_string(),
            members: vec![member("x", "int32_t"), member("y", "int32_t")],
            tagged: false,
        });

        let output = SimpleInitGenerator::new(&registry).generate();
        assert!(output.is_empty());
    }

    #[test]
    fn test_guard_wraps_function() {
        let mut registry = Registry::default();
        registry.structs.push(tagged_struct(
            "VkXlibSurfaceCreateInfoKHR",
            "VK_STRUCTURE_TYPE_XLIB_SURFACE_CREATE_INFO_KHR",
        ));
        registry.type_guards.insert(
            "VkXlibSurfaceCreateInfoKHR".to_string(),
            "VK_USE_PLATFORM_XLIB_KHR".to_string(),
        );

        let output = SimpleInitGenerator::new(&registry).generate();
        assert!(output.starts_with("#ifdef VK_USE_PLATFORM_XLIB_KHR\n"));
        assert!(output.contains("}\n#endif\n"));
        assert_eq!(output.matches("#ifdef").count(), 1);
        assert_eq!(output.matches("#endif").count(), 1);
    }
}
