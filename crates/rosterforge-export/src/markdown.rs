//! Markdown tabular encoding.
//!
//! A top-level heading for the class, one second-level heading per group, and
//! a Full Name / Username / Email table for every group that has students.
//! Passwords never appear in this form.

use rosterforge_models::Roster;

/// Placeholder line emitted for a group with no students.
const EMPTY_GROUP_PLACEHOLDER: &str = "No students in this group.";

/// Renders the roster as a Markdown document.
pub fn to_markdown(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", roster.class_name));
    for group in &roster.groups {
        out.push_str(&format!("## {}\n\n", group.name));
        if group.students.is_empty() {
            out.push_str(&format!("{EMPTY_GROUP_PLACEHOLDER}\n\n"));
        } else {
            out.push_str("| Full Name | Username | Email |\n");
            out.push_str("| --- | --- | --- |\n");
            for student in &group.students {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    student.full_name, student.user_name, student.email
                ));
            }
            out.push('\n');
        }
    }
    out
}
