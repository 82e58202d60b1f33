//! Synchronization and Concurrency Support
//!
//! - [`CriticalSectionCell`] - ISR-safe interior mutability, used for the
//!   auto-negotiation session shared between the AN task and other contexts
//!
//! The CMU lock lives with the clock domain in
//! [`hal::serdes`](crate::hal::serdes).
//!
//! # Example
//!
//! ```ignore
//! use xgbe_phy::sync::CriticalSectionCell;
//!
//! static LINK_FLAG: CriticalSectionCell<bool> = CriticalSectionCell::new(false);
//!
//! #[interrupt]
//! fn PHY_IRQ() {
//!     LINK_FLAG.with(|flag| *flag = true);
//! }
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;
