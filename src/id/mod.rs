//! Identifier generation.
//!
//! - Timestamp-prefixed unique ids
//! - Namespaced ids pairing a v5 name hash with a v4 UUID
//! - Injectable clock and entropy sources
//! - Base-36 helpers

pub mod base36;
pub mod namespaced;
pub mod source;
pub mod unique;

pub use base36::{byte_to_base36, to_base36};
pub use namespaced::{namespace_hash, namespace_uuid, uuid_generator, uuid_generator_with};
pub use source::{Clock, FixedClock, RandomSource, SystemClock};
pub use unique::{
    generate_unique_id, generate_unique_id_with, UniqueIdGenerator, DEFAULT_UNIQUE_ID_LENGTH,
    MAX_UNIQUE_ID_LENGTH,
};
