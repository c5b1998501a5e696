//! strkit - small string and identifier helpers
//!
//! Four independent utilities, each a plain function over its own inputs:
//!
//! - **Unique ids**: base-36 millisecond timestamp followed by a random
//!   base-36 tail, optionally framed by a prefix and suffix
//! - **Query strings**: serialize a JSON object to `key=value` pairs with
//!   configurable array and object handling
//! - **Masking**: hide the middle of a string, with email and phone
//!   policies that keep domains and punctuation intact
//! - **Namespaced ids**: a stable v5 name hash next to a fresh v4 UUID
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use strkit::{
//!     generate_unique_id, mask_email, mask_phone, stringify_params_as_string,
//!     uuid_generator, ArrayFormat, NamespacedIdOptions, StringifyOptions,
//! };
//!
//! // Unique id with a prefix
//! let id = generate_unique_id(16, Some("order"), None)?;
//! assert!(id.starts_with("order_"));
//!
//! // Query string
//! let options = StringifyOptions::default().with_array_format(ArrayFormat::Bracket);
//! let params = json!({"q": "rust lang", "tag": ["a", "b"]});
//! let query = stringify_params_as_string(&params, &options)?;
//! assert_eq!(query, "q=rust%20lang&tag[]=a&tag[]=b");
//!
//! // Masking
//! assert_eq!(mask_email("example@gmail.com"), "ex***le@gmail.com");
//! assert_eq!(mask_phone("+1234567890"), "+1*******90");
//!
//! // Namespaced id
//! let options = NamespacedIdOptions::default().with_separator("_");
//! let nid = uuid_generator("invoice-42", "billing", &options);
//! assert_eq!(nid.len(), 36 + 1 + 36);
//! # Ok::<(), strkit::StrkitError>(())
//! ```
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, StrkitError>`:
//!
//! - id length shorter than the timestamp
//! - stringify params that are not an object, or a bad separator
//! - negative visible counts for masking
//!
//! # Logging
//!
//! Events are emitted through `tracing`; the library never installs a
//! subscriber. Masking events never include the unmasked input.

// Re-export id generation
pub use id::{
    byte_to_base36, generate_unique_id, generate_unique_id_with, namespace_hash, namespace_uuid,
    to_base36, uuid_generator, uuid_generator_with, Clock, FixedClock, RandomSource, SystemClock,
    UniqueIdGenerator, DEFAULT_UNIQUE_ID_LENGTH, MAX_UNIQUE_ID_LENGTH,
};

// Re-export query serialization
pub use query::{
    encode_component, get_param, normalize_value, pairs_to_string, parse_params,
    stringify_params, stringify_params_as_pairs, stringify_params_as_string,
};

// Re-export masking
pub use mask::{mask, mask_email, mask_phone, obscure, MaskPolicy};

// Re-export public types
pub use error::{Result, StrkitError};
pub use types::{ArrayFormat, NamespacedIdOptions, ReturnType, Stringified, StringifyOptions};

// Module declarations
pub mod error;
pub mod id;
pub mod mask;
pub mod query;
pub mod types;
