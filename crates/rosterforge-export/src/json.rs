//! Structured-data encoding.
//!
//! This is the canonical interchange form: the roster serialized with 2-space
//! indentation, fields in declaration order, passwords included. It is also
//! the only format that decodes back into a [`Roster`].

use rosterforge_models::Roster;

use crate::ExportError;

/// Pretty-prints the roster as JSON.
pub fn to_json(roster: &Roster) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(roster)?)
}

/// Parses the structured-data form back into a roster.
pub fn from_json(input: &str) -> Result<Roster, ExportError> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_roster;

    #[test]
    fn test_uses_two_space_indentation() {
        let json = to_json(&sample_roster()).unwrap();
        assert!(json.starts_with("{\n  \"className\": \"CS101\","));
    }

    #[test]
    fn test_includes_passwords() {
        let json = to_json(&sample_roster()).unwrap();
        assert!(json.contains("\"password\": \"pw12345678\""));
    }

    #[test]
    fn test_empty_student_lists_are_emitted() {
        let json = to_json(&sample_roster()).unwrap();
        assert!(json.contains("\"students\": []"));
    }

    #[test]
    fn test_round_trip_preserves_the_roster() {
        let roster = sample_roster();
        let decoded = from_json(&to_json(&roster).unwrap()).unwrap();
        assert_eq!(decoded, roster);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(from_json("{\"className\": }").is_err());
    }
}
