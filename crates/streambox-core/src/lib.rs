//! # streambox-core - Core Domain Types
//!
//! Foundation crate for streambox. Provides the settings data model,
//! error handling, and logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SettingsState`] - Root aggregate for all device-mock settings
//! - [`NetworkState`], [`WifiState`], [`WifiNetwork`], [`SignalStrength`]
//! - [`AccountState`], [`GoogleAccount`]
//! - [`AppsState`], [`AppRecord`]
//! - [`RemoteState`], [`RemoteDevice`]
//! - [`DisplayState`], [`Resolution`], [`AudioOutput`]
//! - [`StorageState`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use streambox_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all streambox crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    AccountState, AppRecord, AppsState, AudioOutput, DisplayState, EthernetState, GoogleAccount,
    NetworkState, RemoteDevice, RemoteState, Resolution, SettingsState, SignalStrength,
    StorageState, WifiNetwork, WifiState, ZERO_SIZE,
};
