//! Literal text framing the generated header.

/// Opens the include guard and the file preamble.
pub const FILE_TOP: &str = r#"#ifndef VULKINIT_STRUCT_INIT_H_INCLUDED
#define VULKINIT_STRUCT_INIT_H_INCLUDED

// Copyright (c) The Vulkinit authors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/// @note Do not edit this file. It is generated from the Vulkan XML
/// registry by the vulkinit generator.

/**
 * @file Three sets of functions used to initialize Vulkan API structs.
 * 1. Functions to initialize the type ID enum and pNext extension pointer
 *    of Vulkan API structures which require those as their first two fields.
 * 2. Functions to initialize all members of Vulkan API structures,
 *    automatically supplying the type ID and pNext extension pointer while
 *    requiring all other fields to be supplied by the user.
 * 3. Functions to initialize all members of small Vulkan structures from
 *    parameters supplied by the user.
 */

// External includes:
#include <vulkan/vulkan.h>

namespace vulkinit
{
"#;

/// Opens the tag-only initializer section.
pub const SIMPLE_TOP: &str = r#"/**
 * @name VulkanTaggedStructSimpleInit For each Vulkan API struct tagged with a
 * type enum and possessing an extension pointer, a function to initialize the
 * first two fields of that struct.
 *
 * The use of these functions saves some code and makes sure the type
 * and the extension field of each struct are set correctly and reliably.
 *
 * Usage:
 *
 *     auto info = vulkinit::ImageCreateInfo();
 *     info.flags = 0;
 *     info.imageType = VK_IMAGE_TYPE_2D;
 *     // ...
 */
///@{
"#;

/// Closes the tag-only initializer section.
pub const SIMPLE_BOTTOM: &str = "///@}\n";

/// Opens the full-parameter tagged initializer section.
pub const PARAMS_TOP: &str = r#"
/**
 * @name VulkanTaggedStructParamsInit For each Vulkan API struct tagged with a
 * type enum and possessing an extension pointer, a function to initialize the
 * members of the struct without having to set the first two fields.
 *
 * The use of these functions saves some code and makes sure the type
 * and the extension field of each struct are set correctly and reliably.
 * It also ensures no member is forgotten by the user.
 *
 * Usage:
 *
 *     auto info = vulkinit::ImageCreateInfo(
 *       0,
 *       VK_IMAGE_TYPE_2D,
 *       // ...
 *     );
 */
///@{
"#;

/// Closes the full-parameter tagged initializer section.
pub const PARAMS_BOTTOM: &str = "///@}\n";

/// Opens the untagged initializer section.
pub const UNTAGGED_TOP: &str = r#"
/**
 * @name VulkanUntaggedStructParamsInit For each small Vulkan API struct,
 * a function to initialize the members of the struct.
 *
 * The use of these functions ensures no member is forgotten by the user.
 *
 * Usage:
 *
 *     auto offset = vulkinit::Offset2D(64, 128);
 */
///@{
"#;

/// Closes the last section, the namespace, and the include guard.
pub const FILE_BOTTOM: &str = r#"///@}

} // namespace vulkinit

#endif // #ifndef VULKINIT_STRUCT_INIT_H_INCLUDED
"#;
