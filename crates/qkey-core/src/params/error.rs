//! Errors raised while reading parameters from user input.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// A `name=value` pair whose name part is empty.
    #[error("parameter pair {0:?} has an empty name")]
    EmptyName(String),
}
