//! Ethernet PHY Drivers
//!
//! This module provides a generic Clause 45 PHY driver trait and the AMD XGBE
//! backplane PHY built on it.
//!
//! # Architecture
//!
//! The PHY layer is independent of the MAC implementation and communicates
//! only through the [`MmdBus`](crate::hal::MmdBus) seam and the SerDes
//! register blocks. This allows:
//!
//! - Reuse with any MDIO controller (direct Clause 45 or indirect via
//!   [`IndirectMmd`](crate::hal::IndirectMmd))
//! - Testing with mock buses and register blocks
//!
//! # Modules
//!
//! - [`generic`]: [`PhyDriver`] trait, [`LinkStatus`] and Clause 45 helpers
//! - [`autoneg`]: Auto-negotiation session, states and outcomes
//! - [`xgbe`]: [`XgbePhy`], the KR/KX mode engine and AN task
//!
//! # Example
//!
//! ```ignore
//! use xgbe_phy::phy::{AnSession, AnStep, PhyDriver, XgbePhy};
//!
//! static AN: AnSession = AnSession::new();
//!
//! let mut phy = XgbePhy::probe(&mut bus, 0, &props, rxtx, &CMU, &AN)?;
//! phy.soft_reset(&mut bus, &mut delay)?;
//! phy.config_init(&mut bus)?;
//! phy.config_aneg(&mut bus, &mut delay)?;
//!
//! // Drive the negotiation from a cooperative task
//! loop {
//!     match phy.step_autoneg(&mut bus, &mut delay) {
//!         AnStep::Finished(outcome) => break outcome,
//!         AnStep::Idle => break None,
//!         AnStep::Continue(_) => yield_now(),
//!     }
//! }
//! ```

pub mod autoneg;
pub mod generic;
pub mod xgbe;

pub use autoneg::{
    AnFailure, AnSession, AnState, AnStep, NegotiationOutcome, Provenance, RxState, RxStates,
};
pub use generic::{LinkStatus, PhyDriver};
pub use xgbe::XgbePhy;
