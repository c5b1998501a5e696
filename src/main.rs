use serde_json::json;
use tracing_subscriber::EnvFilter;

use strkit::{
    generate_unique_id, mask_email, mask_phone, obscure, stringify_params_as_pairs,
    stringify_params_as_string, uuid_generator, ArrayFormat, NamespacedIdOptions,
    StringifyOptions,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("strkit samples");
    println!("==============");

    println!("\n1. Unique ids:");
    for (prefix, suffix) in [(None, None), (Some("user"), None), (Some("ord"), Some("eu"))] {
        match generate_unique_id(16, prefix, suffix) {
            Ok(id) => println!("  {:?}/{:?} → {}", prefix, suffix, id),
            Err(e) => println!("  ✗ Error: {}", e),
        }
    }
    match generate_unique_id(4, None, None) {
        Ok(id) => println!("  length 4 ✗ Unexpectedly succeeded: {}", id),
        Err(e) => println!("  length 4 ✓ Correctly rejected: {}", e),
    }

    println!("\n2. Query strings:");
    let params = json!({
        "q": "rust & friends",
        "page": 2,
        "tags": ["cli", "text"],
        "filter": {"lang": "en"},
    });
    for format in [
        ArrayFormat::None,
        ArrayFormat::Comma,
        ArrayFormat::Bracket,
        ArrayFormat::Exclude,
    ] {
        let options = StringifyOptions::default().with_array_format(format);
        match stringify_params_as_string(&params, &options) {
            Ok(query) => println!("  {:<8} → {}", format, query),
            Err(e) => println!("  {:<8} ✗ Error: {}", format, e),
        }
    }
    let options = StringifyOptions::default().with_serialize_objects(true);
    match stringify_params_as_pairs(&params, &options) {
        Ok(pairs) => println!("  pairs    → {:?}", pairs),
        Err(e) => println!("  pairs    ✗ Error: {}", e),
    }
    let bad = StringifyOptions::default().with_separator("=");
    match stringify_params_as_string(&params, &bad) {
        Ok(_) => println!("  separator '=' ✗ Unexpectedly succeeded"),
        Err(e) => println!("  separator '=' ✓ Correctly rejected: {}", e),
    }

    println!("\n3. Masking:");
    for email in ["example@gmail.com", "jo@x.io", "no-at-sign"] {
        println!("  {} → {}", email, mask_email(email));
    }
    for phone in ["+1234567890", "+44 20-7946 0958", "012-345"] {
        println!("  {} → {}", phone, mask_phone(phone));
    }
    match obscure("4111111111111111", Some(4), Some(4), Some('#')) {
        Ok(card) => println!("  card → {}", card),
        Err(e) => println!("  card ✗ Error: {}", e),
    }

    println!("\n4. Namespaced ids:");
    let options = NamespacedIdOptions::default()
        .with_prefix("u")
        .with_separator("-");
    let first = uuid_generator("alice", "accounts", &options);
    let second = uuid_generator("alice", "accounts", &options);
    println!("  {}", first);
    println!("  {}", second);
    println!("  Same hash segment: {} ✓", first[..38] == second[..38]);
}
