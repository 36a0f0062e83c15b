//! Random reference codes (order `tx_ref`) checked against persisted values.
//!
//! The uniqueness probe is supplied by the caller so it can run on whatever
//! connection or transaction the caller is writing with.

use rand::Rng;
use std::{fmt::Display, future::Future};

pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789";
pub const CODE_LENGTH: usize = 12;
pub const MAX_CODE_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniqueCodeError {
    #[error("No unique code found after {attempts} attempts")]
    Exhausted { attempts: usize },

    #[error("Uniqueness lookup failed: {0}")]
    Lookup(String),
}

pub fn random_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Draws codes until `is_taken` reports a free one, giving up after
/// [`MAX_CODE_ATTEMPTS`].
pub async fn generate_unique_code<F, Fut, E>(is_taken: F) -> Result<String, UniqueCodeError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: Display,
{
    generate_from(random_code, is_taken, MAX_CODE_ATTEMPTS).await
}

async fn generate_from<G, F, Fut, E>(
    mut candidate: G,
    mut is_taken: F,
    max_attempts: usize,
) -> Result<String, UniqueCodeError>
where
    G: FnMut() -> String,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: Display,
{
    for attempt in 1..=max_attempts {
        let code = candidate();

        let taken = is_taken(code.clone())
            .await
            .map_err(|e| UniqueCodeError::Lookup(e.to_string()))?;

        if !taken {
            return Ok(code);
        }

        tracing::warn!(attempt, "Generated code collided with an existing value");
    }

    Err(UniqueCodeError::Exhausted {
        attempts: max_attempts,
    })
}
