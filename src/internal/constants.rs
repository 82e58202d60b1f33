//! Centralized Constants
//!
//! Timing and retry constants used by the PHY driver.
//!
//! # Note
//!
//! Register addresses and bit definitions live in
//! [`phy_regs`](super::phy_regs).

// =============================================================================
// PHY Identity
// =============================================================================

/// PCS device identifier of the AMD XGBE PHY
pub const XGBE_PHY_ID: u32 = 0x7996_ced0;

/// PHY ID mask (ignores revision bits)
pub const XGBE_PHY_ID_MASK: u32 = 0xffff_fff0;

// =============================================================================
// Timing
// =============================================================================

/// Rate-change ready polls before giving up
pub const RATECHANGE_POLL_COUNT: u32 = 500;

/// Delay before each rate-change ready poll (microseconds)
pub const RATECHANGE_POLL_US: u32 = 50;

/// Time the PCS is held in low power during a power cycle (microseconds)
pub const PCS_POWER_CYCLE_US: u32 = 75;

/// Sleep between AN interrupt status polls (microseconds)
pub const AN_EVENT_POLL_US: u32 = 20;

/// Soft reset completion polls
pub const SOFT_RESET_POLL_COUNT: u32 = 50;

/// Delay between soft reset polls (milliseconds)
pub const SOFT_RESET_POLL_MS: u32 = 20;

// =============================================================================
// SerDes Topology
// =============================================================================

/// Number of lanes one CMU serves (two strobe bits per lane in CMU_REG16)
pub const SERDES_LANES: u32 = 8;
