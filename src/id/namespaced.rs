//! Namespaced ids: a stable name hash paired with a fresh random UUID.

use rand::rngs::OsRng;
use tracing::trace;
use uuid::{Builder, Uuid};

use crate::id::source::RandomSource;
use crate::types::NamespacedIdOptions;

/// Resolve a namespace string to the UUID used as the v5 salt.
///
/// A string that already is a UUID is used as-is. Anything else is hashed
/// under the nil namespace, so every string names a stable namespace.
pub fn namespace_uuid(namespace: &str) -> Uuid {
    Uuid::parse_str(namespace).unwrap_or_else(|_| Uuid::new_v5(&Uuid::nil(), namespace.as_bytes()))
}

/// Deterministic v5 UUID of `name` within `namespace`.
///
/// # Examples
///
/// ```
/// use strkit::namespace_hash;
///
/// let dns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
/// assert_eq!(namespace_hash("python.org", dns), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn namespace_hash(name: &str, namespace: &str) -> String {
    Uuid::new_v5(&namespace_uuid(namespace), name.as_bytes()).to_string()
}

/// Build `prefix, hash, id, suffix` joined by the configured separator.
///
/// The hash part is stable for a given `(name, namespace)`; the id part is
/// a new v4 UUID on every call.
///
/// # Examples
///
/// ```
/// use strkit::{uuid_generator, NamespacedIdOptions};
///
/// let options = NamespacedIdOptions::default().with_prefix("u").with_separator("-");
/// let first = uuid_generator("n", "ns", &options);
/// let second = uuid_generator("n", "ns", &options);
///
/// assert_ne!(first, second);
/// assert_eq!(first[..38], second[..38]);
/// ```
pub fn uuid_generator(name: &str, namespace: &str, options: &NamespacedIdOptions) -> String {
    uuid_generator_with(&mut OsRng, name, namespace, options)
}

/// Same as [`uuid_generator`] with an explicit random source for the v4 part.
pub fn uuid_generator_with<R>(
    rng: &mut R,
    name: &str,
    namespace: &str,
    options: &NamespacedIdOptions,
) -> String
where
    R: RandomSource + ?Sized,
{
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    let id = Builder::from_random_bytes(bytes).into_uuid().to_string();
    let hash = namespace_hash(name, namespace);

    let separator = options.separator.as_str();
    let joined = [options.prefix.as_str(), hash.as_str(), id.as_str(), options.suffix.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator);

    let result = if separator.is_empty() {
        joined
    } else {
        let trimmed = joined.strip_prefix(separator).unwrap_or(&joined);
        trimmed.strip_suffix(separator).unwrap_or(trimmed).to_string()
    };

    trace!(len = result.len(), "generated namespaced id");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    const HASH_LEN: usize = 36;

    #[test]
    fn test_namespace_uuid_parses_uuid_strings() {
        assert_eq!(
            namespace_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            Uuid::NAMESPACE_DNS
        );
    }

    #[test]
    fn test_namespace_uuid_hashes_plain_strings() {
        let ns = namespace_uuid("orders");
        assert_eq!(ns, namespace_uuid("orders"));
        assert_ne!(ns, namespace_uuid("invoices"));
        assert_eq!(ns.get_version_num(), 5);
    }

    #[test]
    fn test_default_options_concatenate() {
        let out = uuid_generator("n", "ns", &NamespacedIdOptions::default());
        assert_eq!(out.len(), HASH_LEN * 2);
        assert!(out.starts_with(&namespace_hash("n", "ns")));
    }

    #[test]
    fn test_all_parts_with_separator() {
        let options = NamespacedIdOptions::default()
            .with_prefix("pre")
            .with_suffix("suf")
            .with_separator(":");
        let out = uuid_generator_with(&mut StdRng::seed_from_u64(5), "n", "ns", &options);
        let parts: Vec<&str> = out.split(':').collect();

        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "pre");
        assert_eq!(parts[1], namespace_hash("n", "ns"));
        assert_eq!(Uuid::parse_str(parts[2]).unwrap().get_version_num(), 4);
        assert_eq!(parts[3], "suf");
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let options = NamespacedIdOptions::default().with_separator("-");
        let a = uuid_generator_with(&mut StdRng::seed_from_u64(11), "n", "ns", &options);
        let b = uuid_generator_with(&mut StdRng::seed_from_u64(11), "n", "ns", &options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_leading_separator_remnant_trimmed() {
        let options = NamespacedIdOptions::default()
            .with_prefix("-x")
            .with_separator("-");
        let out = uuid_generator("n", "ns", &options);
        assert!(out.starts_with("x-"));
        assert!(!out.ends_with('-'));
    }

    #[test]
    fn test_trailing_separator_remnant_trimmed() {
        let options = NamespacedIdOptions::default()
            .with_suffix("x-")
            .with_separator("-");
        let out = uuid_generator("n", "ns", &options);
        assert!(out.ends_with("-x"), "unexpected id {}", out);
        assert!(!out.ends_with('-'));
        assert!(out.starts_with(&namespace_hash("n", "ns")));
    }

    #[test]
    fn test_both_edges_trimmed_exact_layout() {
        let options = NamespacedIdOptions::default()
            .with_prefix("-a")
            .with_suffix("b-")
            .with_separator("-");
        let out = uuid_generator_with(&mut StdRng::seed_from_u64(5), "n", "ns", &options);

        let mut bytes = [0u8; 16];
        StdRng::seed_from_u64(5).fill_bytes(&mut bytes);
        let id = Builder::from_random_bytes(bytes).into_uuid();
        let hash = namespace_hash("n", "ns");

        assert_eq!(out, format!("a-{hash}-{id}-b"));
    }
}
