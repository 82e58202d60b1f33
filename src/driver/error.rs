//! Error types for the XGBE PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Rejected configuration, detected before hardware is touched
//! - [`IoError`]: Runtime register access failures
//! - [`ResourceError`]: Register block mapping failures during probe
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.
//!
//! SerDes rate-change readiness timeouts are deliberately *not* errors; they
//! are logged and reported through
//! [`RateChangeStatus`](crate::hal::serdes::RateChangeStatus).

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
///
/// These errors are raised at the entry of an operation. No register has been
/// read or written when one of them is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid configuration parameter
    InvalidConfig,
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// SerDes channel outside the 8 lanes served by one CMU
    InvalidSerdesChannel,
    /// Speed-set property is neither 0 (1G/10G) nor 1 (2.5G/10G)
    InvalidSpeedSet,
    /// A required firmware property is absent
    MissingProperty,
    /// Requested forced speed is not available with this speed set
    UnsupportedSpeed,
    /// Requested forced duplex is not full duplex
    UnsupportedDuplex,
    /// The auto-negotiation MMD is not present in the package
    MissingAnDevice,
    /// PCS device identifier does not belong to this PHY
    UnknownPhy,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidSerdesChannel => "invalid SerDes channel",
            ConfigError::InvalidSpeedSet => "invalid speed set",
            ConfigError::MissingProperty => "missing firmware property",
            ConfigError::UnsupportedSpeed => "unsupported speed",
            ConfigError::UnsupportedDuplex => "unsupported duplex",
            ConfigError::MissingAnDevice => "auto-negotiation MMD not present",
            ConfigError::UnknownPhy => "unknown PHY identifier",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Runtime register access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// PHY communication error (MDIO/MMD access failed)
    PhyError,
    /// Operation timed out
    Timeout,
    /// PCS type register no longer matches the mode last programmed
    ModeMismatch,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::PhyError => "PHY communication error",
            IoError::Timeout => "operation timed out",
            IoError::ModeMismatch => "PCS type does not match programmed mode",
        }
    }
}

// =============================================================================
// Resource Errors
// =============================================================================

/// Register block mapping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// Base address is null
    NullBase,
    /// Base address is not 16-bit aligned
    Misaligned,
    /// Region has zero length
    EmptyRegion,
}

impl core::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResourceError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceError::NullBase => "null register base",
            ResourceError::Misaligned => "misaligned register base",
            ResourceError::EmptyRegion => "empty register region",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnsupportedSpeed)) => { /* ... */ }
///     Err(Error::Io(IoError::PhyError)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
    /// Resource error
    Resource(ResourceError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
            Error::Resource(e) => write!(f, "resource: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

impl From<ResourceError> for Error {
    fn from(e: ResourceError) -> Self {
        Error::Resource(e)
    }
}

/// Result type alias for PHY operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

/// Result type alias for resource mapping
pub type ResourceResult<T> = core::result::Result<T, ResourceError>;

// =============================================================================
// Unit Tests
// =============================================================================
