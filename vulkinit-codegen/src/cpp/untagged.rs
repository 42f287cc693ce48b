//! Full-parameter initializer generation for untagged structs.

use crate::config::GenConfig;
use crate::cpp::format::{guard_close, guard_open, member_assignments, parameter_list};
use vulkinit_registry::Registry;

/// Generator for initializers of small structs that carry no type tag.
/// Same parameter and assignment strategy as the tagged full-parameter
/// pass, minus the two automatic field stores.
pub struct UntaggedInitGenerator<'a> {
    registry: &'a Registry,
    config: &'a GenConfig,
}

impl<'a> UntaggedInitGenerator<'a> {
    /// Creates a new untagged initializer generator.
    #[must_use]
    pub fn new(registry: &'a Registry, config: &'a GenConfig) -> Self {
        Self { registry, config }
    }

    /// Generates the section body in registry declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for def in &self.registry.structs {
            if def.tagged {
                continue;
            }
            if self.config.untagged_ignored.contains(&def.name) {
                tracing::debug!(name = %def.name, "excluded from untagged pass");
                continue;
            }

            let guard = self.registry.guard_for(&def.name);
            guard_open(&mut output, guard);
            output.push_str(&format!("inline {} {}(\n", def.name, def.trimmed_name()));
            output.push_str(&parameter_list(&def.members));
            output.push_str("\n)\n{\n");
            output.push_str(&format!("  {} temp;\n", def.name));
            output.push_str(&member_assignments("temp", &def.members));
            output.push_str("  return temp;\n");
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

    fn offset_2d() -> StructDef {
        StructDef {
            name: "VkOffset2D".to_string(),
            stype: "VK_STRUCTURE_TYPE_OFFSET_2D".to_string(),
            members: vec![member("x", "int32_t"), member("y", "int32_t")],
            tagged: false,
        }
    }

    #[test]
    fn test_untagged_init_shape() {
        let registry = Registry {
            structs: vec![offset_2d()],
            ..Registry::default()
        };
        let config = GenConfig::default();

        let output = UntaggedInitGenerator::new(&registry, &config).generate();
        assert_eq!(
            output,
            "inline VkOffset2D Offset2D(\n\
             \x20 int32_t x,\n\
             \x20 int32_t y\n\
             )\n\
             {\n\
             \x20 VkOffset2D temp;\n\
             \x20 temp.x = x;\n\
             \x20 temp.y = y;\n\
             \x20 return temp;\n\
             }\n\n"
        );
    }

    #[test]
    fn test_untagged_exclusions_respected() {
        let mut rect = offset_2d();
        rect.name = "VkRect3D".to_string();
        let mut matrix = offset_2d();
        matrix.name = "VkTransformMatrixKHR".to_string();
        let registry = Registry {
            structs: vec![rect, offset_2d(), matrix],
            ..Registry::default()
        };
        let config = GenConfig::default();

        let output = UntaggedInitGenerator::new(&registry, &config).generate();
        assert!(!output.contains("VkRect3D"));
        assert!(!output.contains("VkTransformMatrixKHR"));
        assert!(output.contains("VkOffset2D"));
    }

    #[test]
    fn test_tagged_struct_omitted() {
        let tagged = StructDef {
            name: "VkFenceCreateInfo".to_string(),
            stype: "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO".to_string(),
            members: vec![
                member("sType", "VkStructureType"),
                member("pNext", "const void*"),
                member("flags", "VkFenceCreateFlags"),
            ],
            tagged: true,
        };
        let registry = Registry {
            structs: vec![tagged],
            ..Registry::default()
        };
        let config = GenConfig::default();

        let output = UntaggedInitGenerator::new(&registry, &config).generate();
        assert!(output.is_empty());
    }
}
