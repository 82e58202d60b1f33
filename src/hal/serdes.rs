//! SerDes rate-change controller
//!
//! Every lane on the controller is clocked by one CMU (clock management
//! unit). Changing a lane's data rate is a strobe handshake on the CMU:
//! assert the lane's Tx/Rx rate-change bits, reprogram the lane's RxTx
//! fields, release the strobes, then wait for the CMU to report the lane
//! ready again.
//!
//! The CMU registers are shared, so the whole handshake runs under a
//! [`ClockLock`] owned by the [`ClockDomain`]. Only one rate change is in
//! flight across the controller at any time.
//!
//! A lane that never reports ready is logged and reported through
//! [`RateChangeStatus::NotReady`]; it does not fail the caller.

use embedded_hal::delay::DelayNs;

use super::mmio::{Field, RegisterSpace};
use crate::driver::config::LinkMode;
use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::{RATECHANGE_POLL_COUNT, RATECHANGE_POLL_US, SERDES_LANES};
use crate::internal::logging::phy_debug;
use crate::internal::phy_regs::xgbe::{cmu, rxtx, rxtx_val};

// =============================================================================
// Lane Identifier
// =============================================================================

/// A SerDes lane served by the shared CMU (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerdesLane(u8);

impl SerdesLane {
    /// Validate a lane number
    pub const fn new(channel: u32) -> ConfigResult<Self> {
        if channel >= SERDES_LANES {
            return Err(ConfigError::InvalidSerdesChannel);
        }
        Ok(Self(channel as u8))
    }

    /// Lane number
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Tx rate-change strobe in CMU_REG16
    pub const fn tx_strobe(self) -> u16 {
        1 << (cmu::TX_RATE_CHANGE_BASE - cmu::RATE_CHANGE_DECR * self.0 as u32)
    }

    /// Rx rate-change strobe in CMU_REG16
    pub const fn rx_strobe(self) -> u16 {
        1 << (cmu::RX_RATE_CHANGE_BASE - cmu::RATE_CHANGE_DECR * self.0 as u32)
    }

    /// Both strobes
    pub const fn strobes(self) -> u16 {
        self.tx_strobe() | self.rx_strobe()
    }

    /// Rx and Tx ready bits in CMU_REG15
    pub const fn ready_mask(self) -> u16 {
        (1 << self.0) | (1 << (self.0 as u32 + cmu::TX_READY_OFFSET))
    }
}

// =============================================================================
// Lane Field Tables
// =============================================================================

/// RxTx fields touched by a rate change, in programming order
pub mod fields {
    use super::{Field, rxtx};

    /// Tx data rate
    pub const TX_DATA_RATE: Field = Field::new(rxtx::REG3, 14, 2);
    /// Tx word mode
    pub const TX_WORD_MODE: Field = Field::new(rxtx::REG3, 11, 3);
    /// Tx amplitude control
    pub const TXAMP_CNTL: Field = Field::new(rxtx::REG5, 7, 4);
    /// Rx data rate
    pub const RX_DATA_RATE: Field = Field::new(rxtx::REG6, 9, 2);
    /// Rx word mode
    pub const RX_WORD_MODE: Field = Field::new(rxtx::REG6, 11, 3);
    /// Baseline wander correction enable
    pub const BLWC_ENA: Field = Field::new(rxtx::REG20, 2, 1);
    /// Rx PLL select
    pub const RX_PLLSELECT: Field = Field::new(rxtx::REG53, 15, 1);
    /// Tx PLL select
    pub const TX_PLLSELECT: Field = Field::new(rxtx::REG53, 14, 1);
    /// CDR phase interpolator speed
    pub const PI_SPD_SEL_CDR: Field = Field::new(rxtx::REG53, 10, 4);
    /// PQ calibration
    pub const PQ_REG: Field = Field::new(rxtx::REG114, 9, 7);
}

/// Per-rate lane settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaneSettings {
    /// Tx and Rx data rate divider
    pub data_rate: u16,
    /// Tx and Rx word mode
    pub word_mode: u16,
    /// Tx amplitude
    pub tx_amp: u16,
    /// Baseline wander correction
    pub blwc: bool,
    /// PLL select (Tx and Rx)
    pub pll_select: u16,
    /// CDR phase interpolator speed
    pub cdr_rate: u16,
    /// PQ calibration target
    pub pq: u16,
}

impl LaneSettings {
    /// 10GBASE-KR
    pub const KR_10G: Self = Self {
        data_rate: rxtx_val::FULL_RATE,
        word_mode: rxtx_val::WORD_66BIT,
        tx_amp: rxtx_val::TX_AMP_10G,
        blwc: false,
        pll_select: rxtx_val::PLL_10G,
        cdr_rate: rxtx_val::CDR_10G,
        pq: rxtx_val::PQ_10G,
    };

    /// 2500BASE-KX
    pub const KX_2500: Self = Self {
        data_rate: rxtx_val::HALF_RATE,
        word_mode: rxtx_val::WORD_10BIT,
        tx_amp: rxtx_val::TX_AMP_1G,
        blwc: true,
        pll_select: rxtx_val::PLL_1G,
        cdr_rate: rxtx_val::CDR_1G,
        pq: rxtx_val::PQ_1G,
    };

    /// 1000BASE-KX
    pub const KX_1G: Self = Self {
        data_rate: rxtx_val::FIFTH_RATE,
        ..Self::KX_2500
    };

    /// Table for a register programming target
    pub const fn for_link_mode(mode: LinkMode) -> Self {
        match mode {
            LinkMode::Kr10G => Self::KR_10G,
            LinkMode::Kx2500 => Self::KX_2500,
            LinkMode::Kx1G => Self::KX_1G,
        }
    }

    /// The field writes in programming order
    pub const fn writes(&self) -> [(Field, u16); 10] {
        [
            (fields::TX_DATA_RATE, self.data_rate),
            (fields::TX_WORD_MODE, self.word_mode),
            (fields::TXAMP_CNTL, self.tx_amp),
            (fields::RX_DATA_RATE, self.data_rate),
            (fields::RX_WORD_MODE, self.word_mode),
            (fields::BLWC_ENA, self.blwc as u16),
            (fields::RX_PLLSELECT, self.pll_select),
            (fields::TX_PLLSELECT, self.pll_select),
            (fields::PI_SPD_SEL_CDR, self.cdr_rate),
            (fields::PQ_REG, self.pq),
        ]
    }

    /// Program the lane's RxTx block
    pub fn apply<R: RegisterSpace + ?Sized>(&self, rxtx: &R) {
        for (field, value) in self.writes() {
            rxtx.write_field(field, value);
        }
    }
}

// =============================================================================
// Clock Lock
// =============================================================================

/// Mutual exclusion for the whole CMU handshake
///
/// Implementations must exclude every other holder for the duration of `f`,
/// across all PHY instances sharing the CMU.
pub trait ClockLock {
    /// Run `f` while holding the lock
    fn with_lock<T>(&self, f: impl FnOnce() -> T) -> T;
}

/// Global critical section as the clock lock
///
/// On single-core bare-metal targets this masks interrupts for the whole
/// handshake, including the ready poll of up to `RATECHANGE_POLL_COUNT` x
/// `RATECHANGE_POLL_US` (25 ms) of busy delay. Where that latency matters,
/// build the domain with [`ClockDomain::with_lock`] and a spinlock or mutex
/// that leaves interrupts enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct CriticalSectionLock;

impl ClockLock for CriticalSectionLock {
    #[inline]
    fn with_lock<T>(&self, f: impl FnOnce() -> T) -> T {
        critical_section::with(|_| f())
    }
}

// =============================================================================
// Clock Domain
// =============================================================================

/// Outcome of a rate change handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RateChangeStatus {
    /// The lane reported Rx and Tx ready
    Ready,
    /// The lane never reported ready within the poll budget
    NotReady {
        /// Last CMU_REG15 value read
        status: u16,
    },
}

impl RateChangeStatus {
    /// Whether the lane came ready
    pub const fn is_ready(self) -> bool {
        matches!(self, RateChangeStatus::Ready)
    }
}

/// The CMU shared by every lane of one controller
///
/// Create one per controller (usually a `static`) and hand every PHY a
/// shared reference.
///
/// ```ignore
/// static CMU: ClockDomain<MmioRegion> = ClockDomain::new(cmu_region);
/// ```
#[derive(Debug)]
pub struct ClockDomain<C: RegisterSpace, L: ClockLock = CriticalSectionLock> {
    cmu: C,
    lock: L,
}

impl<C: RegisterSpace> ClockDomain<C, CriticalSectionLock> {
    /// Domain guarded by the global critical section
    pub const fn new(cmu: C) -> Self {
        Self {
            cmu,
            lock: CriticalSectionLock,
        }
    }
}

impl<C: RegisterSpace, L: ClockLock> ClockDomain<C, L> {
    /// Domain guarded by a caller-supplied lock
    pub const fn with_lock(cmu: C, lock: L) -> Self {
        Self { cmu, lock }
    }

    /// CMU register space
    pub fn cmu(&self) -> &C {
        &self.cmu
    }

    /// The lock guarding the handshake
    pub fn lock(&self) -> &L {
        &self.lock
    }

    /// Run the rate change handshake for `lane`
    pub fn change_rate<R, D>(
        &self,
        lane: SerdesLane,
        rxtx: &R,
        settings: &LaneSettings,
        delay: &mut D,
    ) -> RateChangeStatus
    where
        R: RegisterSpace + ?Sized,
        D: DelayNs,
    {
        self.lock.with_lock(|| {
            self.cmu.modify16(cmu::REG16, |v| v | lane.strobes());

            settings.apply(rxtx);

            self.cmu.modify16(cmu::REG16, |v| v & !lane.strobes());

            let mask = lane.ready_mask();
            let mut status = 0;
            for _ in 0..RATECHANGE_POLL_COUNT {
                delay.delay_us(RATECHANGE_POLL_US);
                status = self.cmu.read16(cmu::REG15);
                if status & mask == mask {
                    return RateChangeStatus::Ready;
                }
            }

            phy_debug!(
                "SerDes rx/tx not ready (lane {}, status {:#x})",
                lane.index(),
                status
            );
            RateChangeStatus::NotReady { status }
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]
mod tests {
    extern crate std;
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    use super::*;
    use crate::test_utils::{CmuEvent, MockDelay, MockRegisterSpace, MutexLock};

    #[test]
    fn lane_rejects_out_of_range() {
        assert!(SerdesLane::new(7).is_ok());
        assert_eq!(SerdesLane::new(8), Err(ConfigError::InvalidSerdesChannel));
    }

    #[test]
    fn lane_bit_positions() {
        let lane0 = SerdesLane::new(0).unwrap();
        assert_eq!(lane0.tx_strobe(), 1 << 15);
        assert_eq!(lane0.rx_strobe(), 1 << 14);
        assert_eq!(lane0.ready_mask(), 0x0101);

        let lane3 = SerdesLane::new(3).unwrap();
        assert_eq!(lane3.tx_strobe(), 1 << 9);
        assert_eq!(lane3.rx_strobe(), 1 << 8);
        assert_eq!(lane3.ready_mask(), 0x0808);

        let lane7 = SerdesLane::new(7).unwrap();
        assert_eq!(lane7.strobes(), 0x0003);
        assert_eq!(lane7.ready_mask(), 0x8080);
    }

    #[test]
    fn kx_tables_differ_only_in_rate() {
        assert_eq!(LaneSettings::KX_1G.data_rate, 3);
        assert_eq!(LaneSettings::KX_2500.data_rate, 1);
        assert_eq!(
            LaneSettings { data_rate: 1, ..LaneSettings::KX_1G },
            LaneSettings::KX_2500
        );
        assert_eq!(LaneSettings::for_link_mode(LinkMode::Kr10G), LaneSettings::KR_10G);
    }

    #[test]
    fn apply_kr_programs_every_field() {
        let rxtx = MockRegisterSpace::new();
        rxtx.set_register(rxtx::REG20, 0x0004);

        LaneSettings::KR_10G.apply(&rxtx);

        assert_eq!(rxtx.get_register(rxtx::REG3), 0x3800);
        assert_eq!(rxtx.get_register(rxtx::REG5), 0x0500);
        assert_eq!(rxtx.get_register(rxtx::REG6), 0x3800);
        assert_eq!(rxtx.get_register(rxtx::REG20), 0x0000);
        assert_eq!(rxtx.get_register(rxtx::REG53), 0xdc00);
        assert_eq!(rxtx.get_register(rxtx::REG114), 0x3c00);
    }

    #[test]
    fn apply_kx_1g_programs_every_field() {
        let rxtx = MockRegisterSpace::new();

        LaneSettings::KX_1G.apply(&rxtx);

        assert_eq!(rxtx.get_register(rxtx::REG3), 0xc800);
        assert_eq!(rxtx.get_register(rxtx::REG5), 0x0780);
        assert_eq!(rxtx.get_register(rxtx::REG6), 0x0e00);
        assert_eq!(rxtx.get_register(rxtx::REG20), 0x0004);
        assert_eq!(rxtx.get_register(rxtx::REG53), 0x0800);
        assert_eq!(rxtx.get_register(rxtx::REG114), 0x1400);
    }

    #[test]
    fn change_rate_strobes_then_waits_ready() {
        let domain = ClockDomain::new(MockRegisterSpace::new());
        domain.cmu().set_register(cmu::REG15, 0x0202);
        domain.cmu().set_register(cmu::REG16, 0x0001);
        let rxtx = MockRegisterSpace::new();
        let mut delay = MockDelay::new();
        let lane = SerdesLane::new(1).unwrap();

        let status = domain.change_rate(lane, &rxtx, &LaneSettings::KR_10G, &mut delay);

        assert_eq!(status, RateChangeStatus::Ready);
        // Strobes released, unrelated bits untouched
        assert_eq!(domain.cmu().get_register(cmu::REG16), 0x0001);
        assert_eq!(
            domain.cmu().events(),
            [CmuEvent::Assert(lane.strobes()), CmuEvent::Release(lane.strobes())]
        );
        assert_eq!(delay.total_ns(), 50_000);
    }

    #[test]
    fn change_rate_not_ready_is_reported_not_failed() {
        let domain = ClockDomain::new(MockRegisterSpace::new());
        // Rx ready only
        domain.cmu().set_register(cmu::REG15, 0x0001);
        let rxtx = MockRegisterSpace::new();
        let mut delay = MockDelay::new();

        let status = domain.change_rate(
            SerdesLane::new(0).unwrap(),
            &rxtx,
            &LaneSettings::KX_1G,
            &mut delay,
        );

        assert_eq!(status, RateChangeStatus::NotReady { status: 0x0001 });
        assert!(!status.is_ready());
        assert_eq!(delay.total_ns(), 500 * 50_000);
        // Lane still programmed
        assert_eq!(rxtx.get_register(rxtx::REG114), 0x1400);
    }

    #[test]
    fn concurrent_rate_changes_never_overlap() {
        let domain = Arc::new(ClockDomain::with_lock(MockRegisterSpace::new(), MutexLock::new()));
        domain.cmu().set_register(cmu::REG15, 0xffff);

        let handles: Vec<_> = (0..4u32)
            .map(|n| {
                let domain = Arc::clone(&domain);
                thread::spawn(move || {
                    let lane = SerdesLane::new(n).unwrap();
                    let rxtx = MockRegisterSpace::new();
                    let mut delay = MockDelay::new();
                    for i in 0..25 {
                        let settings = if i % 2 == 0 {
                            LaneSettings::KR_10G
                        } else {
                            LaneSettings::KX_2500
                        };
                        domain.change_rate(lane, &rxtx, &settings, &mut delay);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let events = domain.cmu().events();
        assert_eq!(events.len(), 4 * 25 * 2);
        // Every assert is immediately followed by its own release
        for pair in events.chunks(2) {
            match pair {
                [CmuEvent::Assert(a), CmuEvent::Release(r)] => assert_eq!(a, r),
                other => panic!("overlapping strobe window: {other:?}"),
            }
        }
        assert_eq!(domain.lock().max_holders(), 1);
        assert_eq!(domain.lock().acquisitions(), 100);
    }
}
