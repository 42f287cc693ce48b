//! Full-parameter initializer generation for tagged structs.

use crate::config::GenConfig;
use crate::cpp::format::{guard_close, guard_open, member_assignments, parameter_list};
use vulkinit_registry::{CHAIN_FIELD, Registry, TAG_FIELD};

/// Generator for initializers taking one parameter per non-reserved member
/// of a tagged struct. The tag and extension-chain fields are set
/// automatically; everything else is copied from the parameters.
pub struct ParamsInitGenerator<'a> {
    registry: &'a Registry,
    config: &'a GenConfig,
}

impl<'a> ParamsInitGenerator<'a> {
    /// Creates a new full-parameter initializer generator.
    #[must_use]
    pub fn new(registry: &'a Registry, config: &'a GenConfig) -> Self {
        Self { registry, config }
    }

    /// Generates the section body in registry declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for def in &self.registry.structs {
            if !def.tagged {
                continue;
            }
            if self.config.params_ignored.contains(&def.name) {
                tracing::debug!(name = %def.name, "excluded from full-parameter pass");
                continue;
            }
            // Nothing to parametrize beyond the two reserved fields.
            if def.settable_members() == 0 {
                continue;
            }

            let guard = self.registry.guard_for(&def.name);
            guard_open(&mut output, guard);
            output.push_str(&format!("inline {} {}(\n", def.name, def.trimmed_name()));
            output.push_str(&parameter_list(&def.members));
            output.push_str("\n)\n{\n");
            output.push_str(&format!("  {} temp;\n", def.name));
            output.push_str(&format!("  temp.{} = {};\n", TAG_FIELD, def.stype));
            output.push_str(&format!("  temp.{} = nullptr;\n", CHAIN_FIELD));
            output.push_str(&member_assignments("temp", &def.members));
            output.push_str("  return temp;\n");
            output.push_str("}\n");
            guard_close(&mut output, guard);
            output.push('\n');
        }

        output
    }
}
