//! Random short id generation.
//!
//! Ids are 3 bytes of operating-system randomness rendered as 6 lowercase
//! hex characters, giving a space of 2^24 values. Unpredictability matters:
//! a guessable sequence would let anyone enumerate unlisted links.

use crate::domain::repositories::IdGenerator;

/// Number of random bytes per id before hex encoding.
pub const ID_LENGTH_BYTES: usize = 3;

/// Length of a generated id in characters.
pub const ID_LENGTH: usize = ID_LENGTH_BYTES * 2;

/// Generates a cryptographically secure random short id.
///
/// Uses `getrandom` for entropy and encodes the result as lowercase hex,
/// producing a 6-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_id();
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Default [`IdGenerator`] backed by [`generate_id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHexGenerator;

impl IdGenerator for RandomHexGenerator {
    fn generate(&self) -> String {
        generate_id()
    }
}
