use regex::Regex;
use std::{fmt::Display, future::Future, sync::OnceLock};

use crate::shared::unique_code::random_code;

pub const MAX_SLUG_ATTEMPTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("No free slug for '{base}' after {attempts} attempts")]
    Exhausted { base: String, attempts: usize },

    #[error("Slug lookup failed: {0}")]
    Lookup(String),
}

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static slug pattern"))
}

/// Lowercase ASCII slug: runs of anything else collapse into a single `-`.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    separators()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Derives a slug from `source` that `is_taken` does not report, appending
/// `-2`, `-3`, ... on collision. Names with no ASCII letters or digits get
/// a random base.
pub async fn unique_slug<F, Fut, E>(source: &str, mut is_taken: F) -> Result<String, SlugError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: Display,
{
    let mut base = slugify(source);
    if base.is_empty() {
        base = random_code().to_lowercase();
    }

    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        let candidate = if attempt == 1 {
            base.clone()
        } else {
            format!("{}-{}", base, attempt)
        };

        let taken = is_taken(candidate.clone())
            .await
            .map_err(|e| SlugError::Lookup(e.to_string()))?;

        if !taken {
            return Ok(candidate);
        }
    }

    Err(SlugError::Exhausted {
        base,
        attempts: MAX_SLUG_ATTEMPTS,
    })
}
