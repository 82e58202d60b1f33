//! Hardware Abstraction Layer
//!
//! This module provides the register access seams the PHY driver is built
//! on, keeping it independent of any particular MAC or bus controller.
//!
//! # Modules
//!
//! - [`mdio`]: Clause 45 MMD access and the Clause 22 indirect adapter
//! - [`mmio`]: Memory-mapped 16-bit register blocks
//! - [`serdes`]: Shared CMU clock domain and the lane rate-change handshake
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod mdio;
pub mod mmio;
pub mod serdes;

// Re-export commonly used types
pub use mdio::{IndirectMmd, MdioBus, Mmd, MmdBus};
pub use mmio::{Field, MmioRegion, RegisterSpace};
pub use serdes::{
    ClockDomain, ClockLock, CriticalSectionLock, LaneSettings, RateChangeStatus, SerdesLane,
};
