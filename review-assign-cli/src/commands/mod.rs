//! CLI command implementations

pub mod check_config;
pub mod handle;

pub use check_config::CheckConfigArgs;
pub use handle::HandleArgs;
