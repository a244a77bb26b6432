//! Configuration loading and resolution.
//!
//! `load` layers default config files, explicit `--config` files,
//! `RCOUNTRIES__*` environment variables, and CLI flags, then validates the
//! result into [`Settings`].

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use errors::ConfigError;
pub use loader::load;
pub use resolved::Settings;
pub(crate) use sources::SettingSource;
