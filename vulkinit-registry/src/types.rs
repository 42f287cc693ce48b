//! Data model for extracted registry metadata.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::naming;

/// Name of the type-tag field every extensible Vulkan struct starts with.
pub const TAG_FIELD: &str = "sType";

/// Name of the extension-chain pointer field paired with [`TAG_FIELD`].
pub const CHAIN_FIELD: &str = "pNext";

/// Fixed-size array bound of a struct member.
///
/// Symbolic bounds are carried by name and emitted verbatim; they are never
/// resolved to their numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayLen {
    /// Literal element count, e.g. `[4]`.
    Literal(u64),
    /// Named API constant, e.g. `[VK_UUID_SIZE]`.
    Named(String),
}

impl std::fmt::Display for ArrayLen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(n) => write!(f, "{n}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// One field of a struct declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMember {
    /// Field name, unique within the owning struct.
    pub name: String,
    /// Declared type, including any const/pointer decoration reconstructed
    /// from the markup surrounding the type element.
    pub ty: String,
    /// Fixed array bound, `None` for scalar fields.
    pub array_len: Option<ArrayLen>,
}

impl StructMember {
    /// True for the two reserved fields the generator initializes itself.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.name == TAG_FIELD || self.name == CHAIN_FIELD
    }
}

/// One struct the generator can emit initializers for.
#[derive(Debug, Clone)]
pub struct StructDef {
    /// Registry-declared type name, e.g. `VkImageCreateInfo`.
    pub name: String,
    /// Derived `VkStructureType` enumerant, overrides already applied.
    /// Present for every struct even when `tagged` is false.
    pub stype: String,
    /// Members in declaration order. The order is meaningful: it becomes
    /// the parameter order of generated functions.
    pub members: Vec<StructMember>,
    /// True iff the member set carries both [`TAG_FIELD`] and
    /// [`CHAIN_FIELD`]. When true those are the first two declared members
    /// by registry convention; the emitter relies on that without
    /// re-checking.
    pub tagged: bool,
}

impl StructDef {
    /// Struct name with the `Vk` namespace prefix removed, used as the
    /// generated function name.
    #[must_use]
    pub fn trimmed_name(&self) -> &str {
        self.name
            .strip_prefix(naming::TYPE_PREFIX)
            .unwrap_or(&self.name)
    }

    /// Number of members excluding the two reserved fields.
    #[must_use]
    pub fn settable_members(&self) -> usize {
        self.members.iter().filter(|m| !m.is_reserved()).count()
    }
}

/// Everything extracted from one registry document.
///
/// Built once per run, immutable afterwards. `structs` preserves registry
/// declaration order so generated output is diff-stable across runs.
#[derive(Debug, Default)]
pub struct Registry {
    /// Platform name to guard macro, from the `<platforms>` section.
    pub platforms: HashMap<String, String>,
    /// Extension-owned type name to guard macro, from platform-restricted
    /// extensions.
    pub type_guards: HashMap<String, String>,
    /// Generatable structs in declaration order.
    pub structs: Vec<StructDef>,
}

impl Registry {
    /// Returns the guard macro gating a type, if any.
    #[must_use]
    pub fn guard_for(&self, type_name: &str) -> Option<&str> {
        self.type_guards.get(type_name).map(String::as_str)
    }
}

/// Extraction-side configuration: the full-exclusion set and the enum-code
/// exception table.
///
/// These are versioned data tracking vk.xml, not algorithm. Updating to a
/// new registry release means updating these tables (typically from a JSON
/// file), not the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Structs excluded from generation entirely.
    pub ignored_structs: HashSet<String>,
    /// Derived-code to documented-code corrections for names where the
    /// registry's own enumerant deviates from the naming convention.
    pub stype_overrides: HashMap<String, String>,
}

impl ExtractOptions {
    /// Derives the `VkStructureType` enumerant for a struct name and applies
    /// any documented irregular-name correction.
    #[must_use]
    pub fn stype_for(&self, struct_name: &str) -> String {
        let derived = naming::derive_stype(struct_name);
        match self.stype_overrides.get(&derived) {
            Some(corrected) => corrected.clone(),
            None => derived,
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        let ignored_structs = [
            // Never constructed directly: abstract chain heads.
            "VkBaseInStructure",
            "VkBaseOutStructure",
            // Queried from the implementation and sent back edited, so a
            // constructor taking every field is not useful.
            "VkPhysicalDeviceFeatures",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let stype_overrides = [
            (
                "VK_STRUCTURE_TYPE_DEBUG_REPORT_CALLBACK_CREATE_INFO_EXT",
                "VK_STRUCTURE_TYPE_DEBUG_REPORT_CREATE_INFO_EXT",
            ),
            (
                "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_WS_STATE_CREATE_INFO_NV",
                "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_W_SCALING_STATE_CREATE_INFO_NV",
            ),
            (
                "VK_STRUCTURE_TYPE_TEXTURE_LODG_FORMAT_PROPERTIES_AMD",
                "VK_STRUCTURE_TYPE_TEXTURE_LOD_GATHER_FORMAT_PROPERTIES_AMD",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_PCIB_INFO_PROPERTIES_EXT",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_PCI_BUS_INFO_PROPERTIES_EXT",
            ),
            (
                "VK_STRUCTURE_TYPE_IMAGE_VIEW_ASTCD_MODE_EXT",
                "VK_STRUCTURE_TYPE_IMAGE_VIEW_ASTC_DECODE_MODE_EXT",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_ASTCD_FEATURES_EXT",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_ASTC_DECODE_FEATURES_EXT",
            ),
            (
                "VK_STRUCTURE_TYPE_GEOMETRY_AABBNV",
                "VK_STRUCTURE_TYPE_GEOMETRY_AABB_NV",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_TEXTURE_COMPRESSION_ASTCHDRF_EXT",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_TEXTURE_COMPRESSION_ASTC_HDR_FEATURES_EXT",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_SMB_PROPERTIES_NV",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_SM_BUILTINS_PROPERTIES_NV",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_SMB_FEATURES_NV",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_SM_BUILTINS_FEATURES_NV",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_11_FEATURES",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_12_FEATURES",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_2_FEATURES",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_11_PROPERTIES",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES",
            ),
            (
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_12_PROPERTIES",
                "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES",
            ),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

        Self {
            ignored_structs,
            stype_overrides,
        }
    }
}
