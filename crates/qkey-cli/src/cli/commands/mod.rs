//! CLI command handlers. Each command is in its own file.

mod config;
mod key;
mod matches;
mod params;
mod rearrange;

pub use self::config::run_config;
pub use key::run_key;
pub use matches::run_match;
pub use rearrange::run_rearrange;
