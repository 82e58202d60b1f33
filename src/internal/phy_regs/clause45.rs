//! IEEE 802.3 Clause 45 Register Definitions
//!
//! Register addresses and bits within the PMA/PMD (1), PCS (3) and
//! auto-negotiation (7) MMDs used by the backplane PHY.

// Complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Common MMD Registers
// =============================================================================

/// Registers present in every MMD
pub mod mmd_reg {
    /// Control 1
    pub const CTRL1: u16 = 0;
    /// Status 1
    pub const STAT1: u16 = 1;
    /// Device identifier 1
    pub const DEVID1: u16 = 2;
    /// Device identifier 2
    pub const DEVID2: u16 = 3;
    /// Devices in package, low word
    pub const DEVS1: u16 = 5;
    /// Devices in package, high word
    pub const DEVS2: u16 = 6;
    /// Control 2
    pub const CTRL2: u16 = 7;
}

/// Control 1 bits
pub mod ctrl1 {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Low power
    pub const LPOWER: u16 = 1 << 11;
    /// Speed selection mask (bits 13, 6 and 5:2)
    pub const SPEEDSEL: u16 = 0x2040 | 0x003c;
    /// 10 Gb/s speed selection
    pub const SPEED10G: u16 = 0x2040;
    /// 1 Gb/s speed selection (legacy bits)
    pub const SPEED1G: u16 = 0x0040;
}

/// Status 1 bits
pub mod stat1 {
    /// Link status (latched low)
    pub const LSTATUS: u16 = 1 << 2;
}

/// Devices-in-package bits
pub mod devs {
    /// PMA/PMD present
    pub const PMAPMD: u32 = 1 << 1;
    /// PCS present
    pub const PCS: u32 = 1 << 3;
    /// Auto-negotiation present
    pub const AN: u32 = 1 << 7;
}

// =============================================================================
// PMA/PMD MMD
// =============================================================================

/// 10GBASE-R PMA/PMD registers
pub mod pma {
    /// 10GBASE-KR PMD control
    pub const KR_PMD_CTRL: u16 = 0x0096;
    /// 10GBASE-R FEC control
    pub const KR_FEC_CTRL: u16 = 0x00ab;
}

/// 10GBASE-KR PMD control bits
pub mod kr_pmd_ctrl {
    /// Restart (start) training
    pub const RESTART_TRAINING: u16 = 1 << 0;
    /// Training enable
    pub const TRAINING_ENABLE: u16 = 1 << 1;
}

/// 10GBASE-R FEC control bits
pub mod kr_fec_ctrl {
    /// FEC enable
    pub const FEC_ENABLE: u16 = 1 << 0;
}

// =============================================================================
// PCS MMD
// =============================================================================

/// PCS control 2 bits
pub mod pcs_ctrl2 {
    /// PCS type selection mask
    pub const TYPE: u16 = 0x0003;
    /// 10GBASE-R
    pub const TYPE_10GBR: u16 = 0x0000;
    /// 10GBASE-X (used for KX)
    pub const TYPE_10GBX: u16 = 0x0001;
}

// =============================================================================
// Auto-Negotiation MMD
// =============================================================================

/// Auto-negotiation registers
pub mod an_reg {
    /// AN control 1
    pub const CTRL1: u16 = 0;
    /// Base page advertisement, word 1
    pub const ADVERTISE: u16 = 16;
    /// Base page advertisement, word 2
    pub const ADVERTISE2: u16 = 17;
    /// Base page advertisement, word 3
    pub const ADVERTISE3: u16 = 18;
    /// Link partner base page ability, word 1
    pub const LPA: u16 = 19;
    /// Link partner base page ability, word 2
    pub const LPA2: u16 = 20;
    /// Link partner base page ability, word 3
    pub const LPA3: u16 = 21;
    /// Extended next page transmit, word 1
    pub const XNP: u16 = 0x0016;
    /// Extended next page transmit, word 2
    pub const XNP2: u16 = 0x0017;
    /// Extended next page transmit, word 3
    pub const XNP3: u16 = 0x0018;
}

/// AN control 1 bits
pub mod an_ctrl1 {
    /// Auto-negotiation enable
    pub const ENABLE: u16 = 1 << 12;
    /// Restart auto-negotiation
    pub const RESTART: u16 = 1 << 9;
}

/// Base page word 1 bits
pub mod adv1 {
    /// Next page exchange requested
    pub const NEXT_PAGE: u16 = 1 << 15;
    /// Asymmetric pause
    pub const ASYM_PAUSE: u16 = 1 << 11;
    /// Symmetric pause
    pub const PAUSE: u16 = 1 << 10;
}

/// Base page word 2 bits
pub mod adv2 {
    /// 10GBASE-KR
    pub const KR_10G: u16 = 1 << 7;
    /// 1000BASE-KX (also advertised for 2500BASE-KX)
    pub const KX: u16 = 1 << 5;
}

/// Base page word 3 bits
pub mod adv3 {
    /// FEC ability and FEC requested
    pub const FEC: u16 = 0xc000;
}

/// Extended next page word 1 bits
pub mod xnp {
    /// Null message code
    pub const MCF_NULL_MESSAGE: u16 = 0x001;
    /// Acknowledge 2 / processed
    pub const ACK_PROCESSED: u16 = 1 << 12;
    /// Message page (formatted)
    pub const MP_FORMATTED: u16 = 1 << 13;
    /// Next page follows
    pub const NP_EXCHANGE: u16 = 1 << 15;
}
