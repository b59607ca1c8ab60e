//! StudyHub settings.
//!
//! This crate provides:
//! - Environment sources (process env, env files, maps)
//! - Casts for booleans, integers and comma-separated lists
//! - The immutable `Settings` struct loaded once at process start
//! - Optional adapters handing values to sea-orm (`database`) and
//!   tower-http (`http`)
//!
//! # Usage
//!
//! ```no_run
//! let settings = settings::Settings::from_env().expect("invalid configuration");
//! println!("{}", settings.database.addr());
//! ```

pub mod cast;
pub mod constants;
pub mod env;
pub mod error;
pub mod secret;
mod settings;

#[cfg(feature = "http")]
pub mod cors;
#[cfg(feature = "database")]
pub mod database;

pub use env::{DotenvFile, EnvSource, Layered, ProcessEnv};
pub use error::{ConfigError, ConfigResult};
pub use secret::Secret;
pub use settings::{AllowedHosts, CorsSettings, DatabaseSettings, Settings};
