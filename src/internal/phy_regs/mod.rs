//! PHY Register Definitions
//!
//! This module contains register definitions for the PHY, split by how they
//! are reached.
//!
//! # Module Organization
//!
//! - [`clause45`] - IEEE 802.3 Clause 45 MMD registers (PMA/PMD, PCS, AN)
//! - [`xgbe`] - XGBE vendor AN registers and memory-mapped SerDes CSRs
//!
//! # Access Method
//!
//! Clause 45 registers are accessed through an [`MmdBus`](crate::hal::mdio::MmdBus).
//! SerDes registers are memory mapped and accessed through a
//! [`RegisterSpace`](crate::hal::mmio::RegisterSpace).

pub mod clause45;
pub mod xgbe;
