//! Shared text-formatting helpers for the generator passes.

use vulkinit_registry::StructMember;

/// Formats the non-reserved members as a C++ parameter list, one per line,
/// without the trailing comma. Array members become fixed-length array
/// parameters with the recorded bound emitted verbatim.
pub fn parameter_list(members: &[StructMember]) -> String {
    let mut params = String::new();
    for member in members.iter().filter(|m| !m.is_reserved()) {
        params.push_str("  ");
        params.push_str(&member.ty);
        params.push(' ');
        params.push_str(&member.name);
        if let Some(len) = &member.array_len {
            params.push('[');
            params.push_str(&len.to_string());
            params.push(']');
        }
        params.push_str(",\n");
    }
    // Trim the trailing ",\n".
    params.truncate(params.len().saturating_sub(2));
    params
}

/// Formats assignments of every non-reserved parameter into the local
/// variable. Scalars assign directly; arrays copy element-wise with the
/// recorded bound as the loop limit.
pub fn member_assignments(local: &str, members: &[StructMember]) -> String {
    let mut assignments = String::new();
    for member in members.iter().filter(|m| !m.is_reserved()) {
        let name = &member.name;
        match &member.array_len {
            Some(len) => {
                assignments.push_str(&format!("  for(size_t i = 0; i < {len}; ++i){{\n"));
                assignments.push_str(&format!("    {local}.{name}[i] = {name}[i];\n"));
                assignments.push_str("  }\n");
            }
            None => {
                assignments.push_str(&format!("  {local}.{name} = {name};\n"));
            }
        }
    }
    assignments
}

/// Opens a platform `#ifdef` guard when the struct has one.
/// Every open is paired with a [`guard_close`] call after the function.
pub fn guard_open(output: &mut String, guard: Option<&str>) {
    if let Some(macro_name) = guard {
        output.push_str("#ifdef ");
        output.push_str(macro_name);
        output.push('\n');
    }
}

/// Closes a platform guard opened by [`guard_open`].
pub fn guard_close(output: &mut String, guard: Option<&str>) {
    if guard.is_some() {
        output.push_str("#endif\n");
    }
}
