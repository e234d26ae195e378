//! TOML-style config encoding.
//!
//! One `[[{class}.groups]]` block per group with an inline student table per
//! entry. Passwords are included, making this, like the JSON form, a
//! clear-text credential export.
//!
//! Values are inserted verbatim: quotes or brackets inside a name survive
//! unescaped, so text containing TOML delimiters yields malformed output.

use rosterforge_models::Roster;

/// Renders the roster as TOML-style text.
pub fn to_toml(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}]\n", roster.class_name));
    for group in &roster.groups {
        out.push_str(&format!("[[{}.groups]]\n", roster.class_name));
        out.push_str(&format!("name = \"{}\"\n", group.name));
        out.push_str("students = [\n");
        for student in &group.students {
            out.push_str(&format!(
                "  {{ fullName = \"{}\", userName = \"{}\", password = \"{}\", email = \"{}\" }},\n",
                student.full_name, student.user_name, student.password, student.email
            ));
        }
        out.push_str("]\n\n");
    }
    out
}
