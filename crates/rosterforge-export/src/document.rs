//! Printable rendition of a roster.
//!
//! [`RenderableDocument`] is the typed page model: a title, then one section
//! per group holding the same Full Name / Username / Email rows the Markdown
//! encoder emits. `to_html` renders it as a self-contained page suitable for
//! print-to-PDF or rasterization by whatever tool consumes it. Unlike the
//! config encoders, every value here is HTML-escaped.

use rosterforge_models::Roster;

/// One table row of the printable document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    pub full_name: String,
    pub user_name: String,
    pub email: String,
}

/// A per-group section: heading plus rows, or no rows for an empty group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSection {
    pub heading: String,
    pub rows: Vec<DocumentRow>,
}

/// A printable page model built from a roster snapshot.
///
/// Passwords never appear in this rendition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDocument {
    pub title: String,
    pub sections: Vec<DocumentSection>,
}

impl RenderableDocument {
    /// Builds the page model for a roster snapshot.
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            title: roster.class_name.clone(),
            sections: roster
                .groups
                .iter()
                .map(|group| DocumentSection {
                    heading: group.name.clone(),
                    rows: group
                        .students
                        .iter()
                        .map(|student| DocumentRow {
                            full_name: student.full_name.clone(),
                            user_name: student.user_name.clone(),
                            email: student.email.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Renders the document as a self-contained HTML page.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        out.push_str("<style>\n");
        out.push_str(
            "body { font-family: Arial, sans-serif; font-size: 12px; margin: 20px; color: #000; }\n\
             .header { text-align: center; margin-bottom: 20px; border-bottom: 2px solid #333; padding-bottom: 10px; }\n\
             .group-title { font-size: 14px; font-weight: bold; margin: 15px 0 5px 0; color: #333; }\n\
             table { width: 100%; border-collapse: collapse; margin-bottom: 15px; }\n\
             th, td { border: 1px solid #666; padding: 4px; text-align: left; font-size: 10px; }\n\
             th { background-color: #f0f0f0; font-weight: bold; }\n\
             .no-students { font-style: italic; color: #666; margin: 10px 0; }\n",
        );
        out.push_str("</style>\n</head>\n<body>\n");
        out.push_str(&format!(
            "<div class=\"header\"><h1>{}</h1></div>\n",
            escape_html(&self.title)
        ));

        for section in &self.sections {
            out.push_str(&format!(
                "<div class=\"group-title\">{} ({} students)</div>\n",
                escape_html(&section.heading),
                section.rows.len()
            ));
            if section.rows.is_empty() {
                out.push_str("<p class=\"no-students\">No students in this group.</p>\n");
                continue;
            }
            out.push_str(
                "<table>\n<thead>\n<tr><th>Full Name</th><th>Username</th><th>Email</th></tr>\n</thead>\n<tbody>\n",
            );
            for row in &section.rows {
                out.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&row.full_name),
                    escape_html(&row.user_name),
                    escape_html(&row.email)
                ));
            }
            out.push_str("</tbody>\n</table>\n");
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
