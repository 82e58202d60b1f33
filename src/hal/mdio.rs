//! MDIO (Management Data Input/Output) HAL
//!
//! Register access traits for the PHY. The backplane PHY is a Clause 45
//! device: every register lives inside an MMD (MDIO Manageable Device) and
//! is addressed as `(phy_addr, mmd, reg)` through an [`MmdBus`].
//!
//! MACs that only drive Clause 22 frames can still reach the MMDs through
//! [`IndirectMmd`], which tunnels each access through the MMD access control
//! and data registers (13 and 14).

use crate::driver::error::{ConfigError, Result};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid MMD device address (5-bit field)
pub const MAX_MMD: u8 = 31;

/// Clause 22 MMD access control register
pub const MMD_CTRL: u8 = 13;

/// Clause 22 MMD access address/data register
pub const MMD_DATA: u8 = 14;

/// MMD access control function bits
pub mod mmd_ctrl {
    /// Function: address
    pub const FUNC_ADDRESS: u16 = 0x0000;
    /// Function: data, no post increment
    pub const FUNC_DATA: u16 = 0x4000;
    /// Device address field
    pub const DEVAD_MASK: u16 = 0x001f;
}

// =============================================================================
// MMD Identifiers
// =============================================================================

/// MMD devices used by the backplane PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mmd {
    /// PMA/PMD
    PmaPmd = 1,
    /// PCS
    Pcs = 3,
    /// Auto-negotiation
    An = 7,
}

impl Mmd {
    /// Device address for the bus
    pub const fn devad(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// Bus Traits
// =============================================================================

/// Trait for Clause 22 MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with various MDIO implementations.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

/// Trait for Clause 45 MMD register access
///
/// Implementations report transport failures as
/// [`IoError::PhyError`](crate::driver::error::IoError::PhyError). No retries
/// are performed by the driver.
pub trait MmdBus {
    /// Read a register of an MMD
    fn read(&mut self, phy_addr: u8, mmd: u8, reg: u16) -> Result<u16>;

    /// Write a register of an MMD
    fn write(&mut self, phy_addr: u8, mmd: u8, reg: u16, value: u16) -> Result<()>;
}

impl<T: MmdBus + ?Sized> MmdBus for &mut T {
    fn read(&mut self, phy_addr: u8, mmd: u8, reg: u16) -> Result<u16> {
        (**self).read(phy_addr, mmd, reg)
    }

    fn write(&mut self, phy_addr: u8, mmd: u8, reg: u16, value: u16) -> Result<()> {
        (**self).write(phy_addr, mmd, reg, value)
    }
}

// =============================================================================
// Typed Helpers
// =============================================================================

/// Read a register of a typed MMD
#[inline]
pub fn read<M: MmdBus + ?Sized>(bus: &mut M, phy_addr: u8, mmd: Mmd, reg: u16) -> Result<u16> {
    bus.read(phy_addr, mmd.devad(), reg)
}

/// Write a register of a typed MMD
#[inline]
pub fn write<M: MmdBus + ?Sized>(
    bus: &mut M,
    phy_addr: u8,
    mmd: Mmd,
    reg: u16,
    value: u16,
) -> Result<()> {
    bus.write(phy_addr, mmd.devad(), reg, value)
}

/// Read-modify-write: clear `clear`, then set `set`
///
/// Nothing is written if the read fails.
pub fn modify<M: MmdBus + ?Sized>(
    bus: &mut M,
    phy_addr: u8,
    mmd: Mmd,
    reg: u16,
    clear: u16,
    set: u16,
) -> Result<()> {
    let value = read(bus, phy_addr, mmd, reg)?;
    write(bus, phy_addr, mmd, reg, (value & !clear) | set)
}

// =============================================================================
// Indirect MMD Access
// =============================================================================

/// Clause 45 access tunnelled through Clause 22 registers 13/14
///
/// Each access costs four Clause 22 frames: select the device, latch the
/// register address, switch to data mode, then move the data.
#[derive(Debug)]
pub struct IndirectMmd<M: MdioBus> {
    bus: M,
}

impl<M: MdioBus> IndirectMmd<M> {
    /// Wrap a Clause 22 bus
    pub const fn new(bus: M) -> Self {
        Self { bus }
    }

    /// Borrow the underlying bus
    pub fn bus_mut(&mut self) -> &mut M {
        &mut self.bus
    }

    /// Release the underlying bus
    pub fn into_inner(self) -> M {
        self.bus
    }

    fn select(&mut self, phy_addr: u8, mmd: u8, reg: u16) -> Result<()> {
        if phy_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress.into());
        }
        if mmd > MAX_MMD {
            return Err(ConfigError::InvalidConfig.into());
        }

        let devad = u16::from(mmd) & mmd_ctrl::DEVAD_MASK;
        self.bus
            .write(phy_addr, MMD_CTRL, mmd_ctrl::FUNC_ADDRESS | devad)?;
        self.bus.write(phy_addr, MMD_DATA, reg)?;
        self.bus.write(phy_addr, MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
    }
}

impl<M: MdioBus> MmdBus for IndirectMmd<M> {
    fn read(&mut self, phy_addr: u8, mmd: u8, reg: u16) -> Result<u16> {
        self.select(phy_addr, mmd, reg)?;
        self.bus.read(phy_addr, MMD_DATA)
    }

    fn write(&mut self, phy_addr: u8, mmd: u8, reg: u16, value: u16) -> Result<()> {
        self.select(phy_addr, mmd, reg)?;
        self.bus.write(phy_addr, MMD_DATA, value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
