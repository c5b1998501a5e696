//! Timestamp-prefixed unique id generation.
//!
//! An id is the current Unix time in milliseconds, written in base 36,
//! followed by a random base-36 tail. Optional prefix and suffix are joined
//! with `_`.

use rand::rngs::OsRng;
use tracing::{debug, trace};

use crate::error::{Result, StrkitError};
use crate::id::base36::{byte_to_base36, to_base36};
use crate::id::source::{Clock, RandomSource, SystemClock};

/// Random tail length used when the caller has no preference.
pub const DEFAULT_UNIQUE_ID_LENGTH: usize = 16;

/// Largest random tail accepted; longer requests fail with
/// [`StrkitError::InvalidLength`] before anything is allocated.
pub const MAX_UNIQUE_ID_LENGTH: usize = 4096;

const PART_SEPARATOR: &str = "_";

/// Generate a unique id from the system clock and OS entropy.
///
/// `length` is the number of random characters appended to the timestamp.
/// It must be at least as long as the base-36 timestamp itself and at most
/// [`MAX_UNIQUE_ID_LENGTH`].
///
/// # Examples
///
/// ```
/// use strkit::generate_unique_id;
///
/// let id = generate_unique_id(16, Some("user"), None)?;
/// assert!(id.starts_with("user_"));
/// assert!(!id.ends_with('_'));
/// # Ok::<(), strkit::StrkitError>(())
/// ```
///
/// # Errors
///
/// Returns [`StrkitError::InvalidLength`] if `length` is shorter than the
/// timestamp or longer than [`MAX_UNIQUE_ID_LENGTH`].
pub fn generate_unique_id(
    length: usize,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Result<String> {
    generate_unique_id_with(&SystemClock, &mut OsRng, length, prefix, suffix)
}

/// Generate a unique id with an explicit clock and random source.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use strkit::{generate_unique_id_with, FixedClock};
///
/// let clock = FixedClock(1_700_000_000_000);
/// let id = generate_unique_id_with(&clock, &mut StdRng::seed_from_u64(1), 8, None, None)?;
/// assert!(id.starts_with("loyw3v28"));
/// assert_eq!(id.len(), 16);
/// # Ok::<(), strkit::StrkitError>(())
/// ```
pub fn generate_unique_id_with<C, R>(
    clock: &C,
    rng: &mut R,
    length: usize,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Result<String>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    let timestamp = to_base36(clock.now_millis());
    let invalid = StrkitError::InvalidLength {
        length,
        minimum: timestamp.len(),
        maximum: MAX_UNIQUE_ID_LENGTH,
    };
    if length < timestamp.len() || length > MAX_UNIQUE_ID_LENGTH {
        debug!(length, minimum = timestamp.len(), "unique id length out of range");
        return Err(invalid);
    }
    // Two base-36 characters per random byte
    let encoded_len = length.checked_mul(2).ok_or(invalid)?;

    let mut bytes = vec![0u8; length];
    rng.fill(&mut bytes);

    let mut random_part = String::with_capacity(encoded_len);
    for &byte in &bytes {
        random_part.push_str(&byte_to_base36(byte));
    }
    random_part.truncate(length);

    let core = format!("{timestamp}{random_part}");
    let id = [prefix.unwrap_or(""), core.as_str(), suffix.unwrap_or("")]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR);

    trace!(len = id.len(), "generated unique id");
    Ok(id)
}

/// Unique id generator owning its clock and random source.
#[derive(Debug, Clone)]
pub struct UniqueIdGenerator<C = SystemClock, R = OsRng> {
    clock: C,
    rng: R,
}

impl<C: Clock, R: RandomSource> UniqueIdGenerator<C, R> {
    /// Create a generator from the given sources.
    pub fn new(clock: C, rng: R) -> Self {
        Self { clock, rng }
    }

    /// Generate an id; see [`generate_unique_id`].
    pub fn generate(
        &mut self,
        length: usize,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<String> {
        generate_unique_id_with(&self.clock, &mut self.rng, length, prefix, suffix)
    }

    /// Generate an id of [`DEFAULT_UNIQUE_ID_LENGTH`] with no prefix or suffix.
    pub fn generate_default(&mut self) -> Result<String> {
        self.generate(DEFAULT_UNIQUE_ID_LENGTH, None, None)
    }
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new(SystemClock, OsRng)
    }
}
