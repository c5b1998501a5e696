//! String obscuring.
//!
//! - Generic edge-preserving masking with an immutable [`MaskPolicy`]
//! - Email masking that keeps the domain
//! - Phone masking that keeps the punctuation layout

pub mod contact;
pub mod policy;

pub use contact::{mask_email, mask_phone};
pub use policy::{mask, obscure, MaskPolicy, DEFAULT_MASK_CHAR, DEFAULT_VISIBLE};
