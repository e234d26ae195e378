//! Collision-free identities for groups and usernames.
//!
//! Both resolvers run the same suffix search: try the candidate as-is, then
//! append `-0`, `-1`, `-2`, … until an unused name appears. The search always
//! terminates because the roster is finite and each suffixed candidate is
//! distinct from every earlier one.

use rosterforge_models::Roster;

/// Builds the canonical `{className}-{label}-{number}` group name.
pub fn group_name(class_name: &str, label: &str, number: u32) -> String {
    format!("{class_name}-{label}-{number}")
}

/// Resolves a candidate group name against the roster.
///
/// When the requested name is taken, candidates `{className}-{label}-{i}` are
/// tried for i = 0, 1, 2, … and the first unused one wins. The resolved
/// suffix then no longer reflects the requested number; that is intentional
/// and surfaced to the caller through the returned name.
pub fn resolve_group_name(roster: &Roster, class_name: &str, label: &str, number: u32) -> String {
    let mut candidate = group_name(class_name, label, number);
    let mut i = 0u32;
    while roster.has_group(&candidate) {
        candidate = group_name(class_name, label, i);
        i += 1;
    }
    candidate
}

/// Resolves a raw username against every student in the roster.
///
/// Collisions are answered with `{raw}-{i}` for i = 0, 1, 2, …; the first
/// unused candidate wins. This never fails: some suffix is always free.
pub fn resolve_user_name(roster: &Roster, raw: &str) -> String {
    let mut candidate = raw.to_string();
    let mut i = 0u32;
    while roster.user_name_in_use(&candidate) {
        candidate = format!("{raw}-{i}");
        i += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterforge_models::{Group, Student};

    fn roster_with_groups(names: &[&str]) -> Roster {
        Roster {
            class_name: "CS101".to_string(),
            groups: names
                .iter()
                .map(|n| Group {
                    name: n.to_string(),
                    students: vec![],
                })
                .collect(),
        }
    }

    fn roster_with_user_names(names: &[&str]) -> Roster {
        let mut roster = roster_with_groups(&["CS101-lab-1"]);
        roster.groups[0].students = names
            .iter()
            .enumerate()
            .map(|(i, n)| Student {
                full_name: format!("Student {i}"),
                user_name: n.to_string(),
                password: "p".repeat(8),
                email: format!("student{i}@example.com"),
            })
            .collect();
        roster
    }

    #[test]
    fn test_free_group_name_is_kept() {
        let roster = roster_with_groups(&["CS101-lab-1"]);
        assert_eq!(
            resolve_group_name(&roster, "CS101", "lab", 2),
            "CS101-lab-2"
        );
    }

    #[test]
    fn test_taken_group_name_restarts_suffix_at_zero() {
        let roster = roster_with_groups(&["CS101-lab-1"]);
        assert_eq!(
            resolve_group_name(&roster, "CS101", "lab", 1),
            "CS101-lab-0"
        );
    }

    #[test]
    fn test_group_suffix_search_skips_taken_suffixes() {
        let roster = roster_with_groups(&["CS101-lab-1", "CS101-lab-0", "CS101-lab-2"]);
        assert_eq!(
            resolve_group_name(&roster, "CS101", "lab", 1),
            "CS101-lab-3"
        );
    }

    #[test]
    fn test_free_user_name_is_kept() {
        let roster = roster_with_user_names(&["al"]);
        assert_eq!(resolve_user_name(&roster, "bob"), "bob");
    }

    #[test]
    fn test_taken_user_name_gets_numeric_suffix() {
        let roster = roster_with_user_names(&["al"]);
        assert_eq!(resolve_user_name(&roster, "al"), "al-0");
    }

    #[test]
    fn test_user_name_suffix_search_skips_taken_suffixes() {
        let roster = roster_with_user_names(&["al", "al-0", "al-1"]);
        assert_eq!(resolve_user_name(&roster, "al"), "al-2");
    }
}
