//! Short identifier generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Identifier length, fixed at 6. Together with the 62-symbol alphanumeric
/// alphabet this gives an identifier space of 62^6 (~5.7 * 10^10).
pub const SHORT_ID_LEN: usize = 6;

/// Generates a short identifier: exactly [`SHORT_ID_LEN`] characters, each
/// drawn independently and uniformly from {A-Z, a-z, 0-9}.
///
/// The generator consults no external state and makes no uniqueness
/// guarantee. The store's unique constraint arbitrates collisions;
/// [`crate::application::services::UrlService::create_short_url`] owns the
/// retry policy.
pub fn generate_short_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHORT_ID_LEN)
        .map(char::from)
        .collect()
}
