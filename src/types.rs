//! Option and result types shared by the public helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StrkitError;

/// How array values are written into a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrayFormat {
    /// Repeat the key for every element: `a=1&a=2`.
    #[default]
    None,
    /// One pair with comma-joined elements: `a=1%2C2`.
    Comma,
    /// Repeat the key with a `[]` suffix: `a[]=1&a[]=2`.
    Bracket,
    /// Drop array entries entirely.
    Exclude,
}

impl FromStr for ArrayFormat {
    type Err = StrkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ArrayFormat::None),
            "comma" => Ok(ArrayFormat::Comma),
            "bracket" => Ok(ArrayFormat::Bracket),
            "exclude" => Ok(ArrayFormat::Exclude),
            other => Err(StrkitError::InvalidArrayFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArrayFormat::None => "none",
            ArrayFormat::Comma => "comma",
            ArrayFormat::Bracket => "bracket",
            ArrayFormat::Exclude => "exclude",
        };
        f.pad(name)
    }
}

/// Output shape requested from [`stringify_params`](crate::stringify_params).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnType {
    /// A single `key=value` string.
    #[default]
    String,
    /// An ordered list of encoded `(key, value)` pairs.
    PairList,
}

/// Options for query-string serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringifyOptions {
    /// Joins pairs in string output. Defaults to `&`.
    pub separator: String,
    /// Array handling. Defaults to [`ArrayFormat::None`].
    pub array_format: ArrayFormat,
    /// Write objects as JSON instead of an empty value.
    pub serialize_objects: bool,
    /// Output shape. Defaults to [`ReturnType::String`].
    pub return_type: ReturnType,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            separator: "&".to_string(),
            array_format: ArrayFormat::None,
            serialize_objects: false,
            return_type: ReturnType::String,
        }
    }
}

impl StringifyOptions {
    /// Set the pair separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the array format.
    pub fn with_array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// Enable or disable JSON output for object values.
    pub fn with_serialize_objects(mut self, serialize_objects: bool) -> Self {
        self.serialize_objects = serialize_objects;
        self
    }

    /// Set the output shape.
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }
}

/// Serialized params in the shape chosen by [`ReturnType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stringified {
    /// Pairs rendered as `key=value` and joined by the separator.
    String(String),
    /// Encoded pairs in processing order; keys may repeat.
    Pairs(Vec<(String, String)>),
}

impl Stringified {
    /// The string form, if that is what was produced.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Stringified::String(s) => Some(s),
            Stringified::Pairs(_) => None,
        }
    }

    /// The pair list, if that is what was produced.
    pub fn as_pairs(&self) -> Option<&[(String, String)]> {
        match self {
            Stringified::String(_) => None,
            Stringified::Pairs(pairs) => Some(pairs),
        }
    }
}

/// Framing for [`uuid_generator`](crate::uuid_generator) output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespacedIdOptions {
    /// Text placed before the hash.
    pub prefix: String,
    /// Text placed after the random id.
    pub suffix: String,
    /// Placed between every non-empty part.
    pub separator: String,
}

impl NamespacedIdOptions {
    /// Set the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
