//! Cache-key derivation and key matching for client-side HTTP response
//! caches.
//!
//! [`rearrange_url`] turns a request URL plus its parameter sources into one
//! canonical URL; [`storage_key`] namespaces it into the key a response is
//! stored under; [`matched_keys`] finds the stored keys compatible with a
//! (possibly partial) lookup. All three are pure functions of their
//! arguments.

pub mod config;
pub mod logging;

pub mod key;
pub mod matcher;
pub mod params;
pub mod rearrange;
pub mod store;

pub use key::{compose_key, storage_key, LookupOptions, RequestDescriptor, UID_SEPARATOR};
pub use matcher::matched_keys;
pub use params::{ParamValue, Params};
pub use rearrange::{rearrange_url, MergeStrategy};
pub use store::{KeySnapshot, StoreDump};
