//! Throwaway initial passwords.
//!
//! Credentials are meant to be changed on first login; they need to be
//! unpredictable, not archival-grade.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::errors::RosterError;

/// Every symbol a generated password may contain.
pub const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: u32 = 8;

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: u32 = 128;

/// Generates a random password of `requested_length` symbols.
///
/// The length is clamped into `[MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH]`
/// without error; user-facing range validation happens in the controller, so
/// the clamp here is a second line of defense for direct callers.
///
/// Bytes come from the operating system's secure random source and each byte
/// selects one symbol of [`PASSWORD_ALPHABET`]. Fails with
/// [`RosterError::EntropyUnavailable`] when the platform cannot supply secure
/// randomness; there is no insecure fallback.
pub fn generate_password(requested_length: u32) -> Result<String, RosterError> {
    let length = requested_length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH) as usize;

    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| RosterError::EntropyUnavailable)?;

    Ok(bytes
        .iter()
        .map(|b| PASSWORD_ALPHABET[*b as usize % PASSWORD_ALPHABET.len()] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length_matches_request_in_range() {
        for length in [8u32, 12, 64, 128] {
            let password = generate_password(length).unwrap();
            assert_eq!(password.len(), length as usize);
        }
    }

    #[test]
    fn test_length_is_clamped_to_bounds() {
        assert_eq!(generate_password(200).unwrap().len(), 128);
        assert_eq!(generate_password(3).unwrap().len(), 8);
        assert_eq!(generate_password(0).unwrap().len(), 8);
    }

    #[test]
    fn test_output_stays_within_alphabet() {
        let password = generate_password(128).unwrap();
        for byte in password.bytes() {
            assert!(
                PASSWORD_ALPHABET.contains(&byte),
                "unexpected symbol {:?}",
                byte as char
            );
        }
    }

    #[test]
    fn test_consecutive_calls_are_independent() {
        let first = generate_password(32).unwrap();
        let second = generate_password(32).unwrap();
        // 72^32 possibilities; a collision here means the generator is broken.
        assert_ne!(first, second);
    }
}
