//! AMD XGBE Backplane PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver for the 10GBASE-KR / 1000BASE-KX /
//! 2500BASE-KX backplane PHY of the AMD 10 Gigabit Ethernet controller.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): [`XgbePhy`] with its mode engine and the
//!    cooperative auto-negotiation task
//! 2. **Driver Layer** ([`driver`]): Configuration, errors and firmware
//!    property lookup
//! 3. **HAL Layer** ([`hal`]): Clause 45 MMD access, memory-mapped SerDes
//!    blocks and the shared CMU clock domain
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 45**: MMD register access, PCS/PMA/AN register layout
//! - **IEEE 802.3 Clause 73**: Backplane base page and next page exchange
//!
//! # Features
//!
//! - `log`: Route driver diagnostics to the `log` facade
//! - `defmt`: Enable defmt formatting for public types and diagnostics
//!
//! A `critical-section` implementation must be provided by the platform (for
//! example by the HAL crate, or `critical-section/std` on hosted targets).
//!
//! # Example
//!
//! ```ignore
//! use xgbe_phy::{AnSession, PhyDriver, XgbePhy};
//! use xgbe_phy::hal::{ClockDomain, IndirectMmd, MmioRegion};
//!
//! static AN: AnSession = AnSession::new();
//!
//! // SAFETY: addresses come from the platform's resource table
//! let cmu = unsafe { MmioRegion::new(cmu_base, cmu_len)? };
//! let rxtx = unsafe { MmioRegion::new(lane_base, lane_len)? };
//! let clock = ClockDomain::new(cmu);
//!
//! let mut bus = IndirectMmd::new(mdio);
//! let mut phy = XgbePhy::probe(&mut bus, 0, &props, rxtx, &clock, &AN)?;
//! phy.config_init(&mut bus)?;
//! phy.config_aneg(&mut bus, &mut delay)?;
//!
//! if let Some(outcome) = phy.run_autoneg(&mut bus, &mut delay) {
//!     let status = phy.read_status(&mut bus, &mut delay)?;
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;
pub mod phy;
pub mod sync;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{Duplex, LinkConfig, LinkMode, Mode, Speed, SpeedSet, SupportedFeatures};
pub use driver::error::{
    ConfigError, ConfigResult, Error, IoError, IoResult, ResourceError, ResourceResult, Result,
};
pub use driver::properties::{PropertySource, ProbeConfig};

// Re-export PHY types
pub use phy::{
    AnFailure, AnSession, AnState, AnStep, LinkStatus, NegotiationOutcome, PhyDriver, Provenance,
    XgbePhy,
};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Auto-negotiation
        AN_EVENT_POLL_US,
        // Mode switching
        PCS_POWER_CYCLE_US,
        // SerDes
        RATECHANGE_POLL_COUNT,
        RATECHANGE_POLL_US,
        SERDES_LANES,
        // Reset
        SOFT_RESET_POLL_COUNT,
        SOFT_RESET_POLL_MS,
        // Identity
        XGBE_PHY_ID,
        XGBE_PHY_ID_MASK,
    };
}
