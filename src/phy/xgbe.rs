//! AMD XGBE Backplane PHY Driver
//!
//! Driver for the 10GBASE-KR / 1000BASE-KX / 2500BASE-KX backplane PHY
//! integrated with the AMD 10 Gigabit Ethernet controller.
//!
//! # Line modes
//!
//! The PHY runs in one of two line modes at a time:
//! - **KR**: 10GBASE-KR, 64b/66b, PCS type 10GBASE-R
//! - **KX**: 1000BASE-KX or 2500BASE-KX (chosen by the board's speed set),
//!   8b/10b, PCS type 10GBASE-X
//!
//! Switching mode reprograms the PCS and then the SerDes lane through the
//! shared CMU (see [`ClockDomain`]).
//!
//! # Resources
//!
//! | Resource | Sharing | Held as |
//! |----------|---------|---------|
//! | Lane RxTx registers | one per PHY | owned `R` |
//! | CMU registers + lock | one per controller | `&'a ClockDomain` |
//! | AN session | one per PHY, watched by others | `&'a AnSession` |
//!
//! # Example
//!
//! ```ignore
//! use xgbe_phy::phy::{AnSession, PhyDriver, XgbePhy};
//! use xgbe_phy::hal::{ClockDomain, MmioRegion};
//!
//! static CMU: ClockDomain<MmioRegion> = ClockDomain::new(cmu_region);
//! static AN: AnSession = AnSession::new();
//!
//! let mut phy = XgbePhy::probe(&mut bus, 0, &props, rxtx_region, &CMU, &AN)?;
//! phy.config_init(&mut bus)?;
//! phy.config_aneg(&mut bus, &mut delay)?;
//!
//! // The AN task
//! let outcome = phy.run_autoneg(&mut bus, &mut delay);
//!
//! let status = phy.read_status(&mut bus, &mut delay)?;
//! ```

use embedded_hal::delay::DelayNs;

use super::autoneg::{
    AnFailure, AnSession, AnState, AnStep, NegotiationOutcome, RxState, RxStates, StepSnapshot,
    ability_bit, advertise_word1, advertise_word2, advertise_word3, classify_event, fec_agreed,
    wants_next_page,
};
use super::generic::{LinkStatus, PhyDriver, clause45};
use crate::driver::config::{LinkConfig, LinkMode, Mode, SpeedSet, SupportedFeatures};
use crate::driver::error::{ConfigError, IoError, Result};
use crate::driver::properties::{ProbeConfig, PropertySource};
use crate::hal::mdio::{self, MAX_PHY_ADDR, Mmd, MmdBus};
use crate::hal::mmio::RegisterSpace;
use crate::hal::serdes::{
    ClockDomain, ClockLock, CriticalSectionLock, LaneSettings, RateChangeStatus, SerdesLane,
};
use crate::internal::constants::{
    AN_EVENT_POLL_US, PCS_POWER_CYCLE_US, SOFT_RESET_POLL_COUNT, SOFT_RESET_POLL_MS,
    XGBE_PHY_ID, XGBE_PHY_ID_MASK,
};
use crate::internal::logging::{phy_debug, phy_error, phy_info};
use crate::internal::phy_regs::clause45::{
    adv1, an_ctrl1, an_reg, ctrl1, devs, kr_fec_ctrl, kr_pmd_ctrl, mmd_reg, pcs_ctrl2, pma, xnp,
};
use crate::internal::phy_regs::xgbe::{an_int, an_vendor};

// =============================================================================
// Driver
// =============================================================================

/// AMD XGBE backplane PHY
pub struct XgbePhy<'a, R, C, L = CriticalSectionLock>
where
    R: RegisterSpace,
    C: RegisterSpace,
    L: ClockLock,
{
    /// PHY address on the MDIO bus
    addr: u8,
    /// Current line mode
    mode: Mode,
    /// Board speed pairing, fixed at probe
    speed_set: SpeedSet,
    /// SerDes lane within the CMU
    lane: SerdesLane,
    /// Last observed physical link
    link: bool,
    /// Requested link configuration
    config: LinkConfig,
    /// Devices-in-package mask of the PCS
    devices: u32,
    /// Lane RxTx registers
    rxtx: R,
    /// Shared CMU
    clock: &'a ClockDomain<C, L>,
    /// Negotiation progress
    session: &'a AnSession,
}

impl<'a, R, C, L> XgbePhy<'a, R, C, L>
where
    R: RegisterSpace,
    C: RegisterSpace,
    L: ClockLock,
{
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to the PHY at `addr`
    ///
    /// Resolves the SerDes channel and speed set from `props`, then reads the
    /// initial line mode from the PCS type and the devices-in-package mask.
    pub fn probe<M, P>(
        bus: &mut M,
        addr: u8,
        props: &P,
        rxtx: R,
        clock: &'a ClockDomain<C, L>,
        session: &'a AnSession,
    ) -> Result<Self>
    where
        M: MmdBus,
        P: PropertySource + ?Sized,
    {
        if addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidPhyAddress.into());
        }
        let ProbeConfig { lane, speed_set } = ProbeConfig::from_properties(props)?;

        let ctrl2 = mdio::read(bus, addr, Mmd::Pcs, mmd_reg::CTRL2)?;
        let mode = Self::mode_from_pcs(ctrl2);
        let devices = clause45::read_devices(bus, addr, Mmd::Pcs)?;

        phy_debug!("xgbe phy {}: lane {}, initial mode {:?}", addr, lane.index(), mode);

        Ok(Self {
            addr,
            mode,
            speed_set,
            lane,
            link: true,
            config: LinkConfig::new(),
            devices,
            rxtx,
            clock,
            session,
        })
    }

    /// Detach, cancelling any negotiation
    ///
    /// Consuming `self` guarantees the AN task is not mid-step. Returns the
    /// lane register space for unmapping.
    pub fn remove(self) -> R {
        self.session.request_exit();
        self.rxtx
    }

    /// Whether the PHY at `addr` is an XGBE backplane PHY
    pub fn matches<M: MmdBus>(bus: &mut M, addr: u8) -> Result<bool> {
        let id = clause45::read_phy_id(bus, addr, Mmd::Pcs)?;
        Ok(id & XGBE_PHY_ID_MASK == XGBE_PHY_ID & XGBE_PHY_ID_MASK)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current line mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Board speed pairing
    pub fn speed_set(&self) -> SpeedSet {
        self.speed_set
    }

    /// SerDes lane
    pub fn lane(&self) -> SerdesLane {
        self.lane
    }

    /// Last observed physical link
    pub fn link(&self) -> bool {
        self.link
    }

    /// Devices-in-package mask read at probe
    pub fn devices(&self) -> u32 {
        self.devices
    }

    /// Negotiation session
    pub fn session(&self) -> &'a AnSession {
        self.session
    }

    /// Requested link configuration
    pub fn link_config(&self) -> &LinkConfig {
        &self.config
    }

    /// Replace the link configuration (applied by the next `config_aneg`)
    pub fn set_link_config(&mut self, config: LinkConfig) {
        self.config = config;
    }

    /// Lane register space
    pub fn rxtx(&self) -> &R {
        &self.rxtx
    }

    /// The register target selected by the current mode
    pub fn link_mode(&self) -> LinkMode {
        LinkMode::for_mode(self.mode, self.speed_set)
    }

    fn mode_from_pcs(ctrl2: u16) -> Mode {
        if ctrl2 & pcs_ctrl2::TYPE == pcs_ctrl2::TYPE_10GBR {
            Mode::Kr
        } else {
            Mode::Kx
        }
    }

    fn has_an_device(&self) -> bool {
        self.devices & devs::AN != 0
    }

    // =========================================================================
    // Mode Switching
    // =========================================================================

    /// Program the PCS and SerDes lane for `target`
    ///
    /// Any register failure aborts before the recorded mode changes. A lane
    /// that does not come ready is reported, not failed.
    pub fn enter_mode<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
        target: LinkMode,
    ) -> Result<RateChangeStatus> {
        let (pcs_type, speed) = match target.mode() {
            Mode::Kr => (pcs_ctrl2::TYPE_10GBR, ctrl1::SPEED10G),
            Mode::Kx => (pcs_ctrl2::TYPE_10GBX, ctrl1::SPEED1G),
        };

        // KR training off
        mdio::modify(
            bus,
            self.addr,
            Mmd::PmaPmd,
            pma::KR_PMD_CTRL,
            kr_pmd_ctrl::TRAINING_ENABLE,
            0,
        )?;

        mdio::modify(bus, self.addr, Mmd::Pcs, mmd_reg::CTRL2, pcs_ctrl2::TYPE, pcs_type)?;
        mdio::modify(bus, self.addr, Mmd::Pcs, mmd_reg::CTRL1, ctrl1::SPEEDSEL, speed)?;

        self.pcs_power_cycle(bus, delay)?;

        let status = self.clock.change_rate(
            self.lane,
            &self.rxtx,
            &LaneSettings::for_link_mode(target),
            delay,
        );

        self.mode = target.mode();
        phy_debug!("xgbe phy {}: entered {:?}", self.addr, target);

        Ok(status)
    }

    /// Switch to the other line mode
    ///
    /// KR goes to the speed set's KX rate, KX goes to KR.
    pub fn switch_mode<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
    ) -> Result<RateChangeStatus> {
        let target = LinkMode::alternate(self.mode, self.speed_set);
        self.enter_mode(bus, delay, target)
    }

    fn pcs_power_cycle<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<()> {
        let ctrl = mdio::read(bus, self.addr, Mmd::Pcs, mmd_reg::CTRL1)?;
        mdio::write(bus, self.addr, Mmd::Pcs, mmd_reg::CTRL1, ctrl | ctrl1::LPOWER)?;

        delay.delay_us(PCS_POWER_CYCLE_US);

        mdio::write(bus, self.addr, Mmd::Pcs, mmd_reg::CTRL1, ctrl & !ctrl1::LPOWER)
    }

    // =========================================================================
    // Auto-Negotiation Task
    // =========================================================================

    /// Perform one state machine transition
    ///
    /// A terminal state is recorded and the session returned to `Ready`.
    /// Cancellation is checked before every transition.
    pub fn step_autoneg<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> AnStep {
        let snapshot = self.session.snapshot();

        if snapshot.state == AnState::Ready {
            return AnStep::Idle;
        }

        if snapshot.state.is_terminal() {
            let step = self.session.finish_terminal(&snapshot);
            if let AnStep::Finished(Some(NegotiationOutcome::Complete(how))) = step {
                phy_info!("xgbe phy {}: {} successful", self.addr, how.as_str());
            }
            return step;
        }

        let mut rx = snapshot.rx;
        let mut pages = snapshot.pages;
        let result = match snapshot.state {
            AnState::Start => {
                pages = 0;
                self.an_start(bus, &mut rx)
            }
            AnState::Event => self.an_event(bus),
            AnState::PageReceived => {
                pages = pages.saturating_add(1);
                self.an_page_received(bus, delay, &mut rx)
            }
            AnState::IncompatibleLink => self.an_switch_mode(bus, delay),
            _ => Ok(AnState::Error),
        };

        self.commit_step(&snapshot, result, rx, pages)
    }

    /// Step until the negotiation ends
    ///
    /// Sleeps between polls of the AN interrupt status. Returns `None` if the
    /// negotiation was cancelled or none was in progress.
    pub fn run_autoneg<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
    ) -> Option<NegotiationOutcome> {
        loop {
            match self.step_autoneg(bus, delay) {
                AnStep::Continue(AnState::Event) => delay.delay_us(AN_EVENT_POLL_US),
                AnStep::Continue(_) => {}
                AnStep::Finished(outcome) => return outcome,
                AnStep::Idle => return None,
            }
        }
    }

    /// Step at most `max_steps` times
    ///
    /// Returns the last step. `Continue` means the bound was hit and the
    /// session is untouched, so the caller may resume later. An idle session
    /// is `Idle` whatever the bound.
    pub fn run_autoneg_bounded<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
        max_steps: u32,
    ) -> AnStep {
        let mut last = match self.session.state() {
            AnState::Ready => AnStep::Idle,
            state => AnStep::Continue(state),
        };
        for _ in 0..max_steps {
            last = self.step_autoneg(bus, delay);
            match last {
                AnStep::Continue(AnState::Event) => delay.delay_us(AN_EVENT_POLL_US),
                AnStep::Continue(_) => {}
                AnStep::Finished(_) | AnStep::Idle => return last,
            }
        }
        last
    }

    fn commit_step(
        &self,
        snapshot: &StepSnapshot,
        result: Result<AnState>,
        rx: RxStates,
        pages: u32,
    ) -> AnStep {
        let failure = match result {
            Ok(AnState::Error) => Some(AnFailure {
                state: snapshot.state,
                error: None,
            }),
            Err(error) => Some(AnFailure {
                state: snapshot.state,
                error: Some(error),
            }),
            Ok(_) => None,
        };
        let next = result.unwrap_or(AnState::Error);

        let step = self.session.commit(snapshot, next, rx, pages, failure);
        if let AnStep::Finished(Some(NegotiationOutcome::Error(failure))) = step {
            phy_error!(
                "xgbe phy {}: error during auto-negotiation, state={}",
                self.addr,
                failure.state.as_str()
            );
        }
        step
    }

    fn an_start<M: MmdBus>(&mut self, bus: &mut M, rx: &mut RxStates) -> Result<AnState> {
        // Both modes tried: stop instead of looping
        if rx.get(self.mode) != RxState::Ready {
            return Ok(AnState::NoLink);
        }
        rx.set(self.mode, RxState::WaitingBasePage);

        let advertising = self.config.advertising;
        self.an_update(bus, an_reg::ADVERTISE3, |v| advertise_word3(&advertising, v))?;
        self.an_update(bus, an_reg::ADVERTISE2, |v| advertise_word2(&advertising, v))?;
        self.an_update(bus, an_reg::ADVERTISE, |v| advertise_word1(&advertising, v))?;

        mdio::write(bus, self.addr, Mmd::An, an_vendor::INT, 0)?;
        mdio::write(bus, self.addr, Mmd::An, an_vendor::INTMASK, an_int::ALL)?;
        mdio::modify(
            bus,
            self.addr,
            Mmd::An,
            an_reg::CTRL1,
            0,
            an_ctrl1::ENABLE | an_ctrl1::RESTART,
        )?;

        Ok(AnState::Event)
    }

    fn an_event<M: MmdBus>(&mut self, bus: &mut M) -> Result<AnState> {
        let int = mdio::read(bus, self.addr, Mmd::An, an_vendor::INT)?;
        match classify_event(int) {
            Some(next) => {
                mdio::write(bus, self.addr, Mmd::An, an_vendor::INT, 0)?;
                Ok(next)
            }
            None => Ok(AnState::Event),
        }
    }

    fn an_page_received<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
        rx: &mut RxStates,
    ) -> Result<AnState> {
        match rx.get(self.mode) {
            RxState::WaitingBasePage => {
                let lp2 = mdio::read(bus, self.addr, Mmd::An, an_reg::LPA2)?;
                if lp2 & ability_bit(self.mode) == 0 {
                    return self.an_switch_mode(bus, delay);
                }
                self.an_next_page_or_training(bus, rx)
            }
            RxState::WaitingNextPage => self.an_next_page_or_training(bus, rx),
            RxState::Ready | RxState::Complete => Ok(AnState::Error),
        }
    }

    fn an_switch_mode<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
    ) -> Result<AnState> {
        self.switch_mode(bus, delay)?;
        Ok(AnState::Start)
    }

    fn an_next_page_or_training<M: MmdBus>(
        &mut self,
        bus: &mut M,
        rx: &mut RxStates,
    ) -> Result<AnState> {
        let ad = mdio::read(bus, self.addr, Mmd::An, an_reg::ADVERTISE)?;
        let lp = mdio::read(bus, self.addr, Mmd::An, an_reg::LPA)?;

        if wants_next_page(ad, lp) {
            self.an_send_null_page(bus, rx)
        } else {
            self.an_start_training(bus, rx)
        }
    }

    fn an_send_null_page<M: MmdBus>(&mut self, bus: &mut M, rx: &mut RxStates) -> Result<AnState> {
        rx.set(self.mode, RxState::WaitingNextPage);

        mdio::write(bus, self.addr, Mmd::An, an_reg::XNP3, 0)?;
        mdio::write(bus, self.addr, Mmd::An, an_reg::XNP2, 0)?;
        mdio::write(
            bus,
            self.addr,
            Mmd::An,
            an_reg::XNP,
            xnp::MP_FORMATTED | xnp::MCF_NULL_MESSAGE,
        )?;

        Ok(AnState::Event)
    }

    fn an_start_training<M: MmdBus>(&mut self, bus: &mut M, rx: &mut RxStates) -> Result<AnState> {
        rx.set(self.mode, RxState::Complete);

        if self.mode == Mode::Kx {
            return Ok(AnState::Event);
        }

        let ad3 = mdio::read(bus, self.addr, Mmd::An, an_reg::ADVERTISE3)?;
        let lp3 = mdio::read(bus, self.addr, Mmd::An, an_reg::LPA3)?;
        let (clear, set) = if fec_agreed(ad3, lp3) {
            (0, kr_fec_ctrl::FEC_ENABLE)
        } else {
            (kr_fec_ctrl::FEC_ENABLE, 0)
        };
        mdio::modify(bus, self.addr, Mmd::PmaPmd, pma::KR_FEC_CTRL, clear, set)?;

        mdio::modify(
            bus,
            self.addr,
            Mmd::PmaPmd,
            pma::KR_PMD_CTRL,
            0,
            kr_pmd_ctrl::RESTART_TRAINING,
        )?;

        Ok(AnState::Event)
    }

    fn an_update<M: MmdBus>(&self, bus: &mut M, reg: u16, f: impl FnOnce(u16) -> u16) -> Result<()> {
        let value = mdio::read(bus, self.addr, Mmd::An, reg)?;
        mdio::write(bus, self.addr, Mmd::An, reg, f(value))
    }

    // =========================================================================
    // Link State
    // =========================================================================

    /// Refresh the physical link state
    ///
    /// Reports link up while a negotiation is in progress. With
    /// auto-negotiation enabled a down link is retried once in the other
    /// mode. A link that comes (back) up restarts auto-negotiation.
    pub fn update_link<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<bool> {
        if self.session.is_negotiating() {
            return Ok(true);
        }

        let mut link = clause45::read_link(bus, self.addr, Mmd::Pcs)?;
        if !link && self.config.autoneg {
            self.switch_mode(bus, delay)?;
            link = clause45::read_link(bus, self.addr, Mmd::Pcs)?;
        }

        let came_up = link && !self.link;
        self.link = link;
        if came_up {
            self.config_aneg(bus, delay)?;
        }

        Ok(link)
    }

    fn setup_forced<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<()> {
        let target = self.config.validate_forced(self.speed_set)?;

        mdio::modify(bus, self.addr, Mmd::An, an_reg::CTRL1, an_ctrl1::ENABLE, 0)?;
        self.enter_mode(bus, delay, target)?;

        Ok(())
    }

    fn negotiated_status<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
        link: bool,
        pcs_mode: Mode,
    ) -> Result<LinkStatus> {
        if !self.aneg_done() {
            return Ok(LinkStatus::unresolved(link));
        }

        if pcs_mode != self.mode {
            return Err(IoError::ModeMismatch.into());
        }

        let ad = mdio::read(bus, self.addr, Mmd::An, an_reg::ADVERTISE)?;
        let lp = mdio::read(bus, self.addr, Mmd::An, an_reg::LPA)?;
        let common = ad & lp;

        let ad2 = mdio::read(bus, self.addr, Mmd::An, an_reg::ADVERTISE2)?;
        let lp2 = mdio::read(bus, self.addr, Mmd::An, an_reg::LPA2)?;
        let target = if ad2 & lp2 & ability_bit(Mode::Kr) != 0 {
            LinkMode::Kr10G
        } else {
            self.speed_set.kx_mode()
        };

        if target.mode() != self.mode {
            self.enter_mode(bus, delay, target)?;
        }

        Ok(LinkStatus::full_duplex(link, target.speed())
            .with_pause(common & adv1::PAUSE != 0, common & adv1::ASYM_PAUSE != 0))
    }
}

// =============================================================================
// PhyDriver Implementation
// =============================================================================

impl<R, C, L> PhyDriver for XgbePhy<'_, R, C, L>
where
    R: RegisterSpace,
    C: RegisterSpace,
    L: ClockLock,
{
    fn address(&self) -> u8 {
        self.addr
    }

    fn soft_reset<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<()> {
        clause45::soft_reset(
            bus,
            self.addr,
            Mmd::Pcs,
            delay,
            SOFT_RESET_POLL_COUNT,
            SOFT_RESET_POLL_MS,
        )
    }

    fn config_init<M: MmdBus>(&mut self, bus: &mut M) -> Result<()> {
        let supported = SupportedFeatures::for_speed_set(self.speed_set);
        self.config = self
            .config
            .with_supported(supported)
            .with_advertising(supported);

        // Interrupts off and cleared
        mdio::write(bus, self.addr, Mmd::An, an_vendor::INTMASK, 0)?;
        mdio::write(bus, self.addr, Mmd::An, an_vendor::INT, 0)
    }

    fn config_aneg<M: MmdBus, D: DelayNs>(&mut self, bus: &mut M, delay: &mut D) -> Result<()> {
        if !self.config.autoneg {
            return self.setup_forced(bus, delay);
        }

        if !self.has_an_device() {
            return Err(ConfigError::MissingAnDevice.into());
        }

        // Bus check before the task is started
        mdio::read(bus, self.addr, Mmd::Pcs, mmd_reg::CTRL2)?;

        self.session.restart();
        Ok(())
    }

    fn aneg_done(&self) -> bool {
        self.session
            .outcome()
            .is_some_and(|outcome| outcome.is_complete())
    }

    fn read_status<M: MmdBus, D: DelayNs>(
        &mut self,
        bus: &mut M,
        delay: &mut D,
    ) -> Result<LinkStatus> {
        if self.config.autoneg {
            if !self.has_an_device() {
                return Err(ConfigError::MissingAnDevice.into());
            }
        } else {
            self.config.validate_forced(self.speed_set)?;
        }

        let link = self.update_link(bus, delay)?;

        let ctrl2 = mdio::read(bus, self.addr, Mmd::Pcs, mmd_reg::CTRL2)?;
        let pcs_mode = Self::mode_from_pcs(ctrl2);

        if self.config.autoneg {
            return self.negotiated_status(bus, delay, link, pcs_mode);
        }

        let speed = LinkMode::for_mode(pcs_mode, self.speed_set).speed();
        Ok(LinkStatus::full_duplex(link, speed))
    }

    fn suspend<M: MmdBus>(&mut self, bus: &mut M) -> Result<()> {
        clause45::set_low_power(bus, self.addr, Mmd::Pcs, true)
    }

    fn resume<M: MmdBus>(&mut self, bus: &mut M) -> Result<()> {
        clause45::set_low_power(bus, self.addr, Mmd::Pcs, false)
    }

    fn phy_id<M: MmdBus>(&self, bus: &mut M) -> Result<u32> {
        clause45::read_phy_id(bus, self.addr, Mmd::Pcs)
    }
}

impl<R, C, L> core::fmt::Debug for XgbePhy<'_, R, C, L>
where
    R: RegisterSpace,
    C: RegisterSpace,
    L: ClockLock,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("XgbePhy")
            .field("addr", &self.addr)
            .field("mode", &self.mode)
            .field("speed_set", &self.speed_set)
            .field("lane", &self.lane)
            .field("link", &self.link)
            .field("state", &self.session.state())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
