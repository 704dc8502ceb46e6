//! Query parameter model.
//!
//! A request can carry parameters from three places (the URL's own query
//! string, per-request defaults, and an explicit params object). Every one of
//! them is represented as a [`Params`] source mapping names to optional
//! scalar [`ParamValue`]s. The filter decides which merged entries make it
//! into a canonical URL.

mod error;
mod filter;
mod pair;
mod source;
mod value;

pub use error::ParamError;
pub use filter::{is_retained, FILLER_TOKENS};
pub use pair::parse_pair;
pub use source::Params;
pub use value::ParamValue;
