//! Derivation of `VkStructureType` enumerant names from struct names.

use lazy_static::lazy_static;
use regex::Regex;

/// Namespace prefix carried by every registry type name.
pub const TYPE_PREFIX: &str = "Vk";

/// Prefix of every `VkStructureType` enumerant.
pub const STYPE_PREFIX: &str = "VK_STRUCTURE_TYPE_";

lazy_static! {
    // Ordered alternation, matched greedily left to right. Priority matters:
    // known acronyms and bit-width tokens must win over the generic
    // capital-word shapes, and digit runs must be taken whole so version
    // numbers like "11" stay one piece. The token list is tuned against the
    // registry's naming quirks and is a contract; reordering it changes the
    // derived code for edge-case names.
    static ref NAME_PIECES: Regex = Regex::new(
        r"(ID|8Bit|16Bit|Float16|Int8|Int64|Uint8|[1-9][1-9]*|[A-Z][a-z]+|[A-Z][^A-Z\d]+|[A-Z][A-Z]+)"
    )
    .unwrap();
}

/// Derives the `VkStructureType` enumerant for a struct name.
///
/// Strips the `Vk` prefix, segments the remainder into lexical pieces,
/// upper-cases each piece and joins them with underscores under
/// [`STYPE_PREFIX`].
///
/// Pure and deterministic. Registry names whose documented enumerant breaks
/// the convention are corrected afterwards by the caller's override table,
/// not here.
///
/// ```
/// use vulkinit_registry::derive_stype;
///
/// assert_eq!(
///     derive_stype("VkImageCreateInfo"),
///     "VK_STRUCTURE_TYPE_IMAGE_CREATE_INFO"
/// );
/// ```
#[must_use]
pub fn derive_stype(struct_name: &str) -> String {
    let trimmed = struct_name.strip_prefix(TYPE_PREFIX).unwrap_or(struct_name);

    let pieces: Vec<String> = NAME_PIECES
        .find_iter(trimmed)
        .map(|m| m.as_str().to_ascii_uppercase())
        .collect();

    format!("{}{}", STYPE_PREFIX, pieces.join("_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_camel_case() {
        assert_eq!(
            derive_stype("VkImageCreateInfo"),
            "VK_STRUCTURE_TYPE_IMAGE_CREATE_INFO"
        );
        assert_eq!(
            derive_stype("VkSubmitInfo"),
            "VK_STRUCTURE_TYPE_SUBMIT_INFO"
        );
    }

    #[test]
    fn test_vendor_suffix() {
        assert_eq!(
            derive_stype("VkSwapchainCreateInfoKHR"),
            "VK_STRUCTURE_TYPE_SWAPCHAIN_CREATE_INFO_KHR"
        );
        assert_eq!(
            derive_stype("VkDebugUtilsLabelEXT"),
            "VK_STRUCTURE_TYPE_DEBUG_UTILS_LABEL_EXT"
        );
    }

    #[test]
    fn test_acronym_tokens_win_over_capital_runs() {
        // "ID" must segment as one piece, not get glued onto a capital run.
        assert_eq!(
            derive_stype("VkPhysicalDeviceIDPropertiesKHR"),
            "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_ID_PROPERTIES_KHR"
        );
    }

    #[test]
    fn test_bit_width_tokens() {
        assert_eq!(
            derive_stype("VkPhysicalDevice8BitStorageFeaturesKHR"),
            "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_8BIT_STORAGE_FEATURES_KHR"
        );
        assert_eq!(
            derive_stype("VkPhysicalDeviceShaderFloat16Int8FeaturesKHR"),
            "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SHADER_FLOAT16_INT8_FEATURES_KHR"
        );
    }

    #[test]
    fn test_digit_runs_stay_whole() {
        assert_eq!(
            derive_stype("VkPhysicalDeviceVulkan11Features"),
            "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_11_FEATURES"
        );
    }

    #[test]
    fn test_irregular_names_need_overrides() {
        // These derivations are deliberately "wrong": the registry's own
        // enumerants break the convention and the override table corrects
        // them downstream.
        assert_eq!(
            derive_stype("VkGeometryAABBNV"),
            "VK_STRUCTURE_TYPE_GEOMETRY_AABBNV"
        );
        assert_eq!(
            derive_stype("VkDebugReportCallbackCreateInfoEXT"),
            "VK_STRUCTURE_TYPE_DEBUG_REPORT_CALLBACK_CREATE_INFO_EXT"
        );
    }

    #[test]
    fn test_determinism() {
        let a = derive_stype("VkPipelineViewportWScalingStateCreateInfoNV");
        let b = derive_stype("VkPipelineViewportWScalingStateCreateInfoNV");
        assert_eq!(a, b);
    }
}
