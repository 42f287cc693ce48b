//! Vulkan XML registry parser.
//!
//! One streaming pass over the document builds the platform/extension guard
//! index and the ordered struct metadata. The registry embeds type
//! qualifiers and array bounds in the free text around member child
//! elements rather than in attributes, so member reconstruction tracks
//! which child element each text node follows.
//!
//! A malformed document is fatal. A malformed individual declaration is
//! not: the registry corpus is large and heterogeneous, and one odd entry
//! must not block generation for the rest, so such entries are skipped
//! with a log line.

use crate::error::ParseError;
use crate::types::{ArrayLen, CHAIN_FIELD, ExtractOptions, Registry, StructDef, StructMember, TAG_FIELD};
use lazy_static::lazy_static;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;

lazy_static! {
    static ref CONST_KEYWORD: Regex = Regex::new(r"\bconst\b").unwrap();
    static ref ARRAY_BOUND: Regex = Regex::new(r"\[(\d+)\]").unwrap();
}

/// Parses a Vulkan registry document from a string.
///
/// # Arguments
/// * `xml` - Registry document content
/// * `opts` - Full-exclusion set and enum-code override table
///
/// # Returns
/// Extracted registry metadata, structs in declaration order.
///
/// # Errors
/// Returns `ParseError` if the document is not well-formed XML.
pub fn parse_registry(xml: &str, opts: &ExtractOptions) -> Result<Registry, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut registry = Registry::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"platforms" => parse_platforms(&mut reader, &mut registry)?,
                b"types" => parse_types(&mut reader, &mut registry, opts)?,
                b"extensions" => parse_extensions(&mut reader, &mut registry)?,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(registry)
}

/// Parses a Vulkan registry document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or is not well-formed.
pub fn parse_registry_file(
    path: &std::path::Path,
    opts: &ExtractOptions,
) -> Result<Registry, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_registry(&xml, opts)
}

/// Reads a single attribute value from an element.
fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return Ok(Some(std::str::from_utf8(&attr.value)?.to_string()));
        }
    }
    Ok(None)
}

/// Parses the `<platforms>` section into the platform-to-macro map.
fn parse_platforms(reader: &mut Reader<&[u8]>, registry: &mut Registry) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                if e.name().as_ref() == b"platform" {
                    record_platform(e, registry)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"platform" {
                    record_platform(e, registry)?;
                }
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(
                    "unexpected end of document",
                ));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn record_platform(e: &BytesStart<'_>, registry: &mut Registry) -> Result<(), ParseError> {
    let name = attr_value(e, b"name")?;
    let protect = attr_value(e, b"protect")?;
    match (name, protect) {
        (Some(name), Some(protect)) => {
            registry.platforms.insert(name, protect);
        }
        (name, _) => {
            tracing::warn!(platform = ?name, "platform declaration without name/protect, skipping");
        }
    }
    Ok(())
}

/// Parses the `<extensions>` section, recording the guard macro of every
/// type introduced by a platform-restricted extension.
fn parse_extensions(reader: &mut Reader<&[u8]>, registry: &mut Registry) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;
    // Guard macro of the extension currently being walked, if it is
    // platform-restricted. Cleared when its end tag closes.
    let mut protect: Option<String> = None;
    let mut ext_depth = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                if e.name().as_ref() == b"extension" {
                    protect = extension_guard(e, registry)?;
                    ext_depth = depth;
                } else if e.name().as_ref() == b"type" {
                    // Both the self-closing and the start/end forms occur
                    // in the registry.
                    record_extension_type(e, &protect, registry)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"type" {
                    record_extension_type(e, &protect, registry)?;
                }
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth < ext_depth {
                    protect = None;
                    ext_depth = 0;
                }
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(
                    "unexpected end of document",
                ));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Records one extension-owned type under the enclosing extension's guard
/// macro, if it has one.
fn record_extension_type(
    e: &BytesStart<'_>,
    protect: &Option<String>,
    registry: &mut Registry,
) -> Result<(), ParseError> {
    if let Some(macro_name) = protect
        && let Some(type_name) = attr_value(e, b"name")?
    {
        registry.type_guards.insert(type_name, macro_name.clone());
    }
    Ok(())
}

/// Resolves an extension's platform attribute to its guard macro.
fn extension_guard(
    e: &BytesStart<'_>,
    registry: &Registry,
) -> Result<Option<String>, ParseError> {
    let Some(platform) = attr_value(e, b"platform")? else {
        return Ok(None);
    };
    match registry.platforms.get(&platform) {
        Some(macro_name) => Ok(Some(macro_name.clone())),
        None => {
            tracing::warn!(%platform, "extension references undeclared platform, leaving unguarded");
            Ok(None)
        }
    }
}

/// Parses the `<types>` section, extracting metadata for every generatable
/// struct declaration in order.
fn parse_types(
    reader: &mut Reader<&[u8]>,
    registry: &mut Registry,
    opts: &ExtractOptions,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if e.name().as_ref() == b"type" {
                    let name = attr_value(e, b"name")?;
                    if struct_candidate(e, name.as_deref(), opts)? {
                        // Attribute checks guarantee the name is present here.
                        let name = name.unwrap_or_default();
                        let def = parse_struct(reader, name, opts)?;
                        registry.structs.push(def);
                    } else {
                        skip_element(reader)?;
                    }
                    // Both branches consume the matching end tag.
                } else {
                    depth += 1;
                }
            }
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(
                    "unexpected end of document",
                ));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Filtering policy for one `<type>` declaration. All conditions must hold:
/// struct category, named, not excluded, not an alias, not output-only.
fn struct_candidate(
    e: &BytesStart<'_>,
    name: Option<&str>,
    opts: &ExtractOptions,
) -> Result<bool, ParseError> {
    if attr_value(e, b"category")?.as_deref() != Some("struct") {
        return Ok(false);
    }
    let Some(name) = name else {
        tracing::warn!("struct declaration without a name attribute, skipping");
        return Ok(false);
    };
    if opts.ignored_structs.contains(name) {
        tracing::debug!(%name, "struct is in the exclusion set, skipping");
        return Ok(false);
    }
    if attr_value(e, b"alias")?.is_some() {
        tracing::debug!(%name, "struct is an alias, skipping");
        return Ok(false);
    }
    if attr_value(e, b"returnedonly")?.as_deref() == Some("true") {
        tracing::debug!(%name, "struct is output-only, skipping");
        return Ok(false);
    }
    Ok(true)
}

/// Parses the body of one struct declaration into a [`StructDef`].
fn parse_struct(
    reader: &mut Reader<&[u8]>,
    name: String,
    opts: &ExtractOptions,
) -> Result<StructDef, ParseError> {
    let mut members = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if e.name().as_ref() == b"member" {
                    match parse_member(reader)? {
                        Some(member) => members.push(member),
                        None => {
                            tracing::warn!(
                                %name,
                                "member without type or name, skipping member"
                            );
                        }
                    }
                } else {
                    skip_element(reader)?;
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(
                    "unexpected end of document",
                ));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let tagged = members.iter().any(|m| m.name == TAG_FIELD)
        && members.iter().any(|m| m.name == CHAIN_FIELD);
    let stype = opts.stype_for(&name);

    Ok(StructDef {
        name,
        stype,
        members,
        tagged,
    })
}

/// Which child element of a `<member>` the current free text follows.
/// The registry puts meaning in exactly three positions: the leading text
/// (const qualifier), the text after `<type>` (pointer decoration), and
/// the text after `<name>` (array bound).
enum TextSlot {
    Leading,
    AfterType,
    AfterName,
    Dead,
}

/// Reconstructs one member's name, qualified type, and array bound.
///
/// Returns `None` when the declaration lacks a type or name element.
fn parse_member(reader: &mut Reader<&[u8]>) -> Result<Option<StructMember>, ParseError> {
    let mut ty: Option<String> = None;
    let mut name: Option<String> = None;
    let mut len_constant: Option<String> = None;
    let mut leading = String::new();
    let mut type_tail = String::new();
    let mut name_tail = String::new();
    let mut slot = TextSlot::Leading;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"type" => {
                    ty = Some(read_element_text(reader)?);
                    slot = TextSlot::AfterType;
                }
                b"name" => {
                    name = Some(read_element_text(reader)?);
                    slot = TextSlot::AfterName;
                }
                b"enum" => {
                    len_constant = Some(read_element_text(reader)?);
                    slot = TextSlot::Dead;
                }
                _ => {
                    skip_element(reader)?;
                    slot = TextSlot::Dead;
                }
            },
            Ok(Event::Empty(_)) => {
                slot = TextSlot::Dead;
            }
            Ok(Event::Text(ref t)) => {
                let text = std::str::from_utf8(t.as_ref())?;
                match slot {
                    TextSlot::Leading => leading.push_str(text),
                    TextSlot::AfterType => type_tail.push_str(text),
                    TextSlot::AfterName => name_tail.push_str(text),
                    TextSlot::Dead => {}
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(
                    "unexpected end of document",
                ));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let (Some(mut ty), Some(name)) = (ty, name) else {
        return Ok(None);
    };

    // Qualifier keyword floats in the member's leading text, not inside
    // the type element.
    if CONST_KEYWORD.is_match(&leading) {
        ty = format!("const {ty}");
    }
    // Pointer decoration trails the type element as free text.
    let suffix = type_tail.trim();
    if !suffix.is_empty() {
        ty.push_str(suffix);
    }

    // A nested length-constant reference wins over a bracketed literal in
    // the text after the name.
    let array_len = match len_constant {
        Some(constant) => Some(ArrayLen::Named(constant)),
        None => ARRAY_BOUND
            .captures(&name_tail)
            .and_then(|c| c[1].parse().ok())
            .map(ArrayLen::Literal),
    };

    Ok(Some(StructMember {
        name,
        ty,
        array_len,
    }))
}

/// Reads the text content of the current element and consumes its end tag.
fn read_element_text(reader: &mut Reader<&[u8]>) -> Result<String, ParseError> {
    let mut text = String::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => {
                text.push_str(std::str::from_utf8(t.as_ref())?);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(
                    "unexpected end of document",
                ));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }
    Ok(text.trim().to_string())
}

/// Skips to the end of the current element.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::invalid_structure(
                    "unexpected end of document",
                ));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}
