//! Swift `CodingKeys` enum rendering from a key mapping.

use wirekey_core::KeyMapping;

/// Render a key mapping as a Swift `CodingKeys` enum.
///
/// Remapped members render as `case name = "key"`; members whose wire key
/// equals their name render as a bare `case name`, letting the host
/// language's default raw value apply. An empty mapping renders nothing:
/// the caller gets `None` instead of an empty enum.
pub fn render_coding_keys(mapping: &KeyMapping) -> Option<String> {
    if mapping.is_empty() {
        return None;
    }

    let mut code = String::new();
    code.push_str("enum CodingKeys: String, CodingKey {\n");

    for entry in mapping.entries() {
        if entry.is_remapped() {
            code.push_str(&format!(
                "    case {} = \"{}\"\n",
                entry.name, entry.wire_key
            ));
        } else {
            code.push_str(&format!("    case {}\n", entry.name));
        }
    }

    code.push('}');
    Some(code)
}
