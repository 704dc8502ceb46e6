//! Cache-key composition.
//!
//! A cache key is the canonical URL, optionally namespaced by a caller-chosen
//! identifier: `<identifier>__<canonical url>`.

mod lookup;
mod request;

pub use lookup::LookupOptions;
pub use request::{storage_key, RequestDescriptor};

/// Joins an identifier and a canonical URL.
pub const UID_SEPARATOR: &str = "__";

/// Prefixes `canonical_url` with `identifier` and [`UID_SEPARATOR`].
///
/// An absent or empty identifier leaves the URL as is.
pub fn compose_key(identifier: Option<&str>, canonical_url: &str) -> String {
    match identifier {
        Some(id) if !id.is_empty() => format!("{id}{UID_SEPARATOR}{canonical_url}"),
        _ => canonical_url.to_string(),
    }
}
