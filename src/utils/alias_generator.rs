//! Random alias candidate generation.
//!
//! Candidates are not guaranteed to be unique; collisions surface as
//! [`crate::error::AppError::AliasExists`] from the store and are retried by
//! [`crate::application::services::MappingService`].

use rand::Rng;

/// Alphabet aliases are drawn from: mixed-case ASCII letters and digits.
pub const ALIAS_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Accepted range for the generated alias length.
pub const MIN_GENERATED_ALIAS_LENGTH: usize = 4;
pub const MAX_GENERATED_ALIAS_LENGTH: usize = 32;

/// Source of alias candidates.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Produces a candidate of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Generator backed by the thread-local RNG.
///
/// Holds no state, so a single instance can be shared between tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        generate_alias(length)
    }
}

/// Generates a random alias of `length` characters from [`ALIAS_CHARSET`].
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALIAS_CHARSET.len());
            ALIAS_CHARSET[idx] as char
        })
        .collect()
}
