//! Generic PHY Driver Trait
//!
//! This module defines the common interface for Clause 45 Ethernet PHY
//! drivers, modelled on the callbacks a PHY framework invokes: reset, init,
//! (re)negotiate, poll status, and power management.

use embedded_hal::delay::DelayNs;

use crate::driver::config::{Duplex, Speed};
use crate::driver::error::Result;
use crate::hal::mdio::MmdBus;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// `speed` and `duplex` are `None` while a negotiated link has not resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Physical link up
    pub link: bool,
    /// Resolved speed
    pub speed: Option<Speed>,
    /// Resolved duplex
    pub duplex: Option<Duplex>,
    /// Symmetric PAUSE resolved
    pub pause: bool,
    /// Asymmetric PAUSE resolved
    pub asym_pause: bool,
}

impl LinkStatus {
    /// Link state only, nothing resolved
    pub const fn unresolved(link: bool) -> Self {
        Self {
            link,
            speed: None,
            duplex: None,
            pause: false,
            asym_pause: false,
        }
    }

    /// Full duplex at `speed`, no flow control
    pub const fn full_duplex(link: bool, speed: Speed) -> Self {
        Self {
            link,
            speed: Some(speed),
            duplex: Some(Duplex::Full),
            pause: false,
            asym_pause: false,
        }
    }

    /// Set the resolved flow control
    #[must_use]
    pub const fn with_pause(mut self, pause: bool, asym_pause: bool) -> Self {
        self.pause = pause;
        self.asym_pause = asym_pause;
        self
    }

    /// Whether speed and duplex are known
    pub const fn is_resolved(&self) -> bool {
        self.speed.is_some() && self.duplex.is_some()
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Clause 45 Ethernet PHY drivers
///
/// The bus and delay provider are passed per call so one MDIO controller can
/// serve several PHYs.
///
/// # Example Implementation
///
/// ```ignore
/// impl PhyDriver for MyPhy {
///     fn address(&self) -> u8 { self.addr }
///
///     fn soft_reset<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<()> {
///         clause45::soft_reset(bus, self.addr, delay, 50, 20)
///     }
///
///     // ... other methods
/// }
/// ```
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Perform a soft reset
    ///
    /// Sets PCS CTRL1.RESET and waits for it to self-clear.
    fn soft_reset<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<()>;

    /// Initialize supported/advertised features and quiesce interrupts
    fn config_init<M: MmdBus>(&mut self, bus: &mut M) -> Result<()>;

    /// Apply the link configuration
    ///
    /// Forced links are programmed immediately; negotiated links restart
    /// auto-negotiation.
    fn config_aneg<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<()>;

    /// Whether the last negotiation completed successfully
    fn aneg_done(&self) -> bool;

    /// Refresh and report the link status
    fn read_status<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
    ) -> Result<LinkStatus>;

    /// Enter low power
    fn suspend<M: MmdBus>(&mut self, bus: &mut M) -> Result<()>;

    /// Leave low power
    fn resume<M: MmdBus>(&mut self, bus: &mut M) -> Result<()>;

    /// Read the PHY identifier from the PCS MMD
    ///
    /// Returns a 32-bit value: `(DEVID1 << 16) | DEVID2`
    fn phy_id<M: MmdBus>(&self, bus: &mut M) -> Result<u32>;
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 Clause 45 registers
pub mod clause45 {
    use super::*;
    use crate::driver::error::IoError;
    use crate::hal::mdio::{self, Mmd};
    use crate::internal::phy_regs::clause45::{ctrl1, mmd_reg, stat1};

    /// Read STAT1 twice (latched low) and report the current link bit
    pub fn read_link<M: MmdBus + ?Sized>(bus: &mut M, phy_addr: u8, mmd: Mmd) -> Result<bool> {
        mdio::read(bus, phy_addr, mmd, mmd_reg::STAT1)?;
        let stat = mdio::read(bus, phy_addr, mmd, mmd_reg::STAT1)?;
        Ok(stat & stat1::LSTATUS != 0)
    }

    /// Read the device identifier of an MMD
    pub fn read_phy_id<M: MmdBus + ?Sized>(bus: &mut M, phy_addr: u8, mmd: Mmd) -> Result<u32> {
        let id1 = u32::from(mdio::read(bus, phy_addr, mmd, mmd_reg::DEVID1)?);
        let id2 = u32::from(mdio::read(bus, phy_addr, mmd, mmd_reg::DEVID2)?);
        Ok((id1 << 16) | id2)
    }

    /// Read the devices-in-package mask of an MMD
    pub fn read_devices<M: MmdBus + ?Sized>(bus: &mut M, phy_addr: u8, mmd: Mmd) -> Result<u32> {
        let devs1 = u32::from(mdio::read(bus, phy_addr, mmd, mmd_reg::DEVS1)?);
        let devs2 = u32::from(mdio::read(bus, phy_addr, mmd, mmd_reg::DEVS2)?);
        Ok((devs2 << 16) | devs1)
    }

    /// Set or clear CTRL1 low power
    pub fn set_low_power<M: MmdBus + ?Sized>(
        bus: &mut M,
        phy_addr: u8,
        mmd: Mmd,
        enable: bool,
    ) -> Result<()> {
        let (clear, set) = if enable {
            (0, ctrl1::LPOWER)
        } else {
            (ctrl1::LPOWER, 0)
        };
        mdio::modify(bus, phy_addr, mmd, mmd_reg::CTRL1, clear, set)
    }

    /// Perform soft reset via CTRL1
    ///
    /// Polls up to `max_attempts` times, `poll_ms` apart. A reset bit that
    /// never clears is a timeout.
    pub fn soft_reset<M: MmdBus + ?Sized, D: DelayNs>(
        bus: &mut M,
        phy_addr: u8,
        mmd: Mmd,
        delay: &mut D,
        max_attempts: u32,
        poll_ms: u32,
    ) -> Result<()> {
        mdio::modify(bus, phy_addr, mmd, mmd_reg::CTRL1, 0, ctrl1::RESET)?;

        for _ in 0..max_attempts {
            delay.delay_ms(poll_ms);
            let ctrl = mdio::read(bus, phy_addr, mmd, mmd_reg::CTRL1)?;
            if ctrl & ctrl1::RESET == 0 {
                return Ok(());
            }
        }

        Err(IoError::Timeout.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
