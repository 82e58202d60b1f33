//! XGBE Vendor Register Definitions
//!
//! Vendor auto-negotiation interrupt registers, reached through the AN MMD,
//! and the memory-mapped SerDes CSR blocks: the per-lane RxTx block and the
//! CMU block shared by every lane on the controller.

// Complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Vendor AN Registers (AN MMD)
// =============================================================================

/// Vendor auto-negotiation registers
pub mod an_vendor {
    /// AN interrupt mask
    pub const INTMASK: u16 = 0x8001;
    /// AN interrupt status (write 0 to clear)
    pub const INT: u16 = 0x8002;
}

/// AN interrupt bits
pub mod an_int {
    /// Auto-negotiation complete
    pub const COMPLETE: u16 = 0x01;
    /// Incompatible link detected
    pub const INCOMPATIBLE_LINK: u16 = 0x02;
    /// Page received
    pub const PAGE_RECEIVED: u16 = 0x04;
    /// All status bits
    pub const ALL: u16 = COMPLETE | INCOMPATIBLE_LINK | PAGE_RECEIVED;
}

// =============================================================================
// SerDes CMU Registers (shared)
// =============================================================================

/// CMU register offsets
pub mod cmu {
    /// Per-lane Rx/Tx ready status
    pub const REG15: u16 = 0x003c;
    /// Per-lane Rx/Tx rate change strobes
    pub const REG16: u16 = 0x0040;

    /// Tx rate change bit for lane 0
    pub const TX_RATE_CHANGE_BASE: u32 = 15;
    /// Rx rate change bit for lane 0
    pub const RX_RATE_CHANGE_BASE: u32 = 14;
    /// Bit distance between lanes
    pub const RATE_CHANGE_DECR: u32 = 2;
    /// Tx ready bit offset above the Rx ready bit
    pub const TX_READY_OFFSET: u32 = 8;
}

// =============================================================================
// SerDes RxTx Registers (per lane)
// =============================================================================

/// RxTx register offsets
pub mod rxtx {
    /// Reset
    pub const REG2: u16 = 0x0008;
    /// Tx data rate / word mode
    pub const REG3: u16 = 0x000c;
    /// Tx amplitude
    pub const REG5: u16 = 0x0014;
    /// Rx data rate / word mode
    pub const REG6: u16 = 0x0018;
    /// Baseline wander correction
    pub const REG20: u16 = 0x0050;
    /// PLL select / CDR phase interpolator
    pub const REG53: u16 = 0x00d4;
    /// PQ calibration
    pub const REG114: u16 = 0x01c8;
    /// Calibration start
    pub const REG115: u16 = 0x01cc;
    /// Calibration status
    pub const REG142: u16 = 0x0238;
}

/// RxTx field values
pub mod rxtx_val {
    /// Full data rate
    pub const FULL_RATE: u16 = 0x0;
    /// Half data rate
    pub const HALF_RATE: u16 = 0x1;
    /// Fifth data rate
    pub const FIFTH_RATE: u16 = 0x3;
    /// 66-bit word mode
    pub const WORD_66BIT: u16 = 0x7;
    /// 10-bit word mode
    pub const WORD_10BIT: u16 = 0x1;
    /// 10G Tx amplitude
    pub const TX_AMP_10G: u16 = 0xa;
    /// 1G Tx amplitude
    pub const TX_AMP_1G: u16 = 0xf;
    /// 10G CDR phase interpolator speed
    pub const CDR_10G: u16 = 0x7;
    /// 1G CDR phase interpolator speed
    pub const CDR_1G: u16 = 0x2;
    /// 10G PLL select
    pub const PLL_10G: u16 = 0x1;
    /// 1G PLL select
    pub const PLL_1G: u16 = 0x0;
    /// 10G PQ calibration target
    pub const PQ_10G: u16 = 0x1e;
    /// 1G PQ calibration target
    pub const PQ_1G: u16 = 0xa;
}
