//! Core driver components for the XGBE PHY.
//!
//! - [`config`] - Speed, mode and link configuration types
//! - [`error`] - Error types and result aliases
//! - [`properties`] - Firmware property lookup used at probe
//!
//! # Example
//!
//! ```ignore
//! use xgbe_phy::driver::{LinkConfig, Speed, Duplex};
//!
//! let forced = LinkConfig::new().with_forced(Speed::Gbps10, Duplex::Full);
//! ```

// Submodules
pub mod config;
pub mod error;
pub mod properties;

// Re-exports for convenience
pub use config::{Duplex, LinkConfig, LinkMode, Mode, Speed, SpeedSet, SupportedFeatures};
pub use error::{
    ConfigError, ConfigResult, Error, IoError, IoResult, ResourceError, ResourceResult, Result,
};
pub use properties::{PropertySource, ProbeConfig, SERDES_CHANNEL_PROPERTY, SPEED_SET_PROPERTY};
