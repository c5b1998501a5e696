//! Query-string serialization.
//!
//! - Percent-encoding and value normalization
//! - Serializing JSON objects to query strings or pair lists
//! - Decoding query strings back into pairs

pub mod encode;
pub mod parse;
pub mod stringify;

pub use encode::{encode_component, normalize_value};
pub use parse::{get_param, pairs_to_string, parse_params};
pub use stringify::{stringify_params, stringify_params_as_pairs, stringify_params_as_string};
