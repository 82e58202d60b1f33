//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Timing constants and PHY identity
//! - [`phy_regs`]: Clause 45 and XGBE vendor register definitions
//! - [`logging`]: `log`/`defmt` dispatch macros
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code. They are subject to change
//! without notice.

pub(crate) mod constants;
pub(crate) mod logging;
pub(crate) mod phy_regs;
