//! YAML-style config encoding.
//!
//! Nested mapping keyed by the class name. Unlike the JSON and TOML forms,
//! this one leaves passwords out; it is the shareable variant of the config
//! exports. Values are inserted verbatim, without YAML escaping.

use rosterforge_models::Roster;

/// Renders the roster as YAML-style text.
pub fn to_yaml(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", roster.class_name));
    out.push_str("  groups:\n");
    for group in &roster.groups {
        out.push_str(&format!("    - name: \"{}\"\n", group.name));
        out.push_str("      students:\n");
        for student in &group.students {
            out.push_str(&format!("        - fullName: \"{}\"\n", student.full_name));
            out.push_str(&format!("          userName: \"{}\"\n", student.user_name));
            out.push_str(&format!("          email: \"{}\"\n", student.email));
        }
    }
    out
}
