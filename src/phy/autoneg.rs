//! Backplane auto-negotiation session
//!
//! Clause 73 style negotiation runs as a cooperative task that steps the
//! state machine one transition at a time (see
//! [`XgbePhy::step_autoneg`](super::xgbe::XgbePhy::step_autoneg)). The
//! task's progress lives in an [`AnSession`]: a small shared object that
//! other contexts read, restart, or cancel while the task runs.
//!
//! # State machine
//!
//! ```text
//! Ready --config_aneg--> Start --> Event --+--> PageReceived -----> Event | Start
//!                          ^               +--> IncompatibleLink --> Start
//!                          |               +--> Complete
//!                          +-- (mode switched)
//! ```
//!
//! `NoLink`, `Exit` and `Error` are terminal as well; every terminal state
//! records a [`NegotiationOutcome`] (none for `Exit`) and returns the session
//! to `Ready`.
//!
//! # Supersession
//!
//! A step works on a snapshot of the session and commits its result only if
//! no restart happened meanwhile and no exit was requested. A stale step's
//! update is dropped.

use crate::driver::config::{Mode, SupportedFeatures};
use crate::driver::error::Error;
use crate::internal::phy_regs::clause45::{adv1, adv2, adv3};
use crate::internal::phy_regs::xgbe::an_int;
use crate::sync::CriticalSectionCell;

// =============================================================================
// States
// =============================================================================

/// Auto-negotiation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnState {
    /// Idle, no negotiation in progress
    Ready,
    /// Program advertisement and (re)start negotiation
    Start,
    /// Waiting for an AN interrupt status bit
    Event,
    /// A page arrived from the link partner
    PageReceived,
    /// The link partner uses the other line mode
    IncompatibleLink,
    /// Negotiation finished
    Complete,
    /// Both modes tried without agreement
    NoLink,
    /// Cancelled
    Exit,
    /// Register access or protocol failure
    Error,
}

impl AnState {
    /// Whether the state ends the negotiation
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            AnState::Complete | AnState::NoLink | AnState::Exit | AnState::Error
        )
    }

    /// Short name for diagnostics
    pub const fn as_str(self) -> &'static str {
        match self {
            AnState::Ready => "ready",
            AnState::Start => "start",
            AnState::Event => "event",
            AnState::PageReceived => "page-received",
            AnState::IncompatibleLink => "incompatible-link",
            AnState::Complete => "complete",
            AnState::NoLink => "no-link",
            AnState::Exit => "exit",
            AnState::Error => "error",
        }
    }
}

impl core::fmt::Display for AnState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page exchange progress for one line mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxState {
    /// Not yet started in this mode
    #[default]
    Ready,
    /// Base page advertised, waiting for the partner's
    WaitingBasePage,
    /// Null next page sent, waiting for the partner's
    WaitingNextPage,
    /// Exchange done, training started
    Complete,
}

/// Page exchange progress for both line modes
///
/// Only the entry for the current [`Mode`] is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxStates {
    /// 10GBASE-KR
    pub kr: RxState,
    /// 1000BASE-KX / 2500BASE-KX
    pub kx: RxState,
}

impl RxStates {
    /// Progress in `mode`
    pub const fn get(&self, mode: Mode) -> RxState {
        match mode {
            Mode::Kr => self.kr,
            Mode::Kx => self.kx,
        }
    }

    /// Update progress in `mode`
    pub fn set(&mut self, mode: Mode, state: RxState) {
        match mode {
            Mode::Kr => self.kr = state,
            Mode::Kx => self.kx = state,
        }
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// How a completed link was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Provenance {
    /// Pages were exchanged
    AutoNegotiation,
    /// Completion without any page exchange
    ParallelDetection,
}

impl Provenance {
    /// Short name for diagnostics
    pub const fn as_str(self) -> &'static str {
        match self {
            Provenance::AutoNegotiation => "Auto negotiation",
            Provenance::ParallelDetection => "Parallel detection",
        }
    }
}

/// Where and why a negotiation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnFailure {
    /// State whose transition failed
    pub state: AnState,
    /// Register access error, `None` for a page in an unexpected sub-state
    pub error: Option<Error>,
}

/// Result of a finished negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NegotiationOutcome {
    /// Link agreed
    Complete(Provenance),
    /// No agreement in either mode
    NoLink,
    /// Aborted by an error
    Error(AnFailure),
}

impl NegotiationOutcome {
    /// Whether the link was agreed
    pub const fn is_complete(&self) -> bool {
        matches!(self, NegotiationOutcome::Complete(_))
    }
}

/// Result of one state machine step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnStep {
    /// The machine moved (or stayed) in a non-terminal state
    Continue(AnState),
    /// The negotiation ended; `None` if it was cancelled
    Finished(Option<NegotiationOutcome>),
    /// No negotiation in progress
    Idle,
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct SessionState {
    state: AnState,
    rx: RxStates,
    outcome: Option<NegotiationOutcome>,
    pages: u32,
    generation: u32,
}

impl SessionState {
    const fn new() -> Self {
        Self {
            state: AnState::Ready,
            rx: RxStates {
                kr: RxState::Ready,
                kx: RxState::Ready,
            },
            outcome: None,
            pages: 0,
            generation: 0,
        }
    }

    fn finish(&mut self, outcome: Option<NegotiationOutcome>) {
        self.outcome = outcome;
        self.state = AnState::Ready;
    }
}

/// Snapshot a step works on
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepSnapshot {
    pub(crate) state: AnState,
    pub(crate) rx: RxStates,
    pub(crate) pages: u32,
    generation: u32,
}

/// Shared auto-negotiation progress of one PHY
///
/// Usually a `static`; the PHY holds a shared reference and other contexts
/// use the same one to observe or cancel the negotiation.
///
/// ```ignore
/// static AN: AnSession = AnSession::new();
///
/// // Detach path, ISR or another thread
/// AN.request_exit();
/// ```
#[derive(Debug)]
pub struct AnSession {
    inner: CriticalSectionCell<SessionState>,
}

impl Default for AnSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnSession {
    /// Idle session (const, suitable for static initialization)
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(SessionState::new()),
        }
    }

    /// Current state
    pub fn state(&self) -> AnState {
        self.inner.with(|s| s.state)
    }

    /// Last terminal result, cleared by a restart
    pub fn outcome(&self) -> Option<NegotiationOutcome> {
        self.inner.with(|s| s.outcome)
    }

    /// Page exchange progress
    pub fn rx_states(&self) -> RxStates {
        self.inner.with(|s| s.rx)
    }

    /// Pages received since the last start
    pub fn pages(&self) -> u32 {
        self.inner.with(|s| s.pages)
    }

    /// Whether a negotiation is in progress
    pub fn is_negotiating(&self) -> bool {
        self.state() != AnState::Ready
    }

    /// Cancel the negotiation in progress
    ///
    /// Observed by the task before its next transition. Does nothing on an
    /// idle session, so the last outcome stays in place; returns whether a
    /// negotiation was cancelled.
    pub fn request_exit(&self) -> bool {
        self.inner.with(|s| {
            if s.state == AnState::Ready {
                return false;
            }
            s.state = AnState::Exit;
            true
        })
    }

    /// Begin a fresh negotiation, superseding any step in flight
    pub(crate) fn restart(&self) {
        self.inner.with(|s| {
            s.state = AnState::Start;
            s.rx = RxStates::default();
            s.outcome = None;
            s.pages = 0;
            s.generation = s.generation.wrapping_add(1);
        });
    }

    pub(crate) fn snapshot(&self) -> StepSnapshot {
        self.inner.with(|s| StepSnapshot {
            state: s.state,
            rx: s.rx,
            pages: s.pages,
            generation: s.generation,
        })
    }

    /// Record a terminal state observed at the start of a step
    pub(crate) fn finish_terminal(&self, snapshot: &StepSnapshot) -> AnStep {
        self.inner.with(|s| {
            if s.generation != snapshot.generation || s.state != snapshot.state {
                return AnStep::Continue(s.state);
            }
            let outcome = match s.state {
                AnState::Complete => Some(NegotiationOutcome::Complete(provenance(s.pages))),
                AnState::NoLink => Some(NegotiationOutcome::NoLink),
                // Failures finish in `commit`
                _ => None,
            };
            s.finish(outcome);
            AnStep::Finished(outcome)
        })
    }

    /// Publish a step's result
    ///
    /// Dropped if the session was restarted or cancelled since `snapshot`.
    pub(crate) fn commit(
        &self,
        snapshot: &StepSnapshot,
        next: AnState,
        rx: RxStates,
        pages: u32,
        failure: Option<AnFailure>,
    ) -> AnStep {
        self.inner.with(|s| {
            if s.generation != snapshot.generation || s.state == AnState::Exit {
                return AnStep::Continue(s.state);
            }
            s.rx = rx;
            s.pages = pages;
            match failure {
                Some(failure) => {
                    let outcome = Some(NegotiationOutcome::Error(failure));
                    s.finish(outcome);
                    AnStep::Finished(outcome)
                }
                None => {
                    s.state = next;
                    AnStep::Continue(next)
                }
            }
        })
    }
}

// =============================================================================
// Page Helpers
// =============================================================================

pub(crate) const fn provenance(pages: u32) -> Provenance {
    if pages > 0 {
        Provenance::AutoNegotiation
    } else {
        Provenance::ParallelDetection
    }
}

/// Next state for an AN interrupt status word, `None` to keep waiting
///
/// Page received wins over incompatible link, which wins over complete.
pub(crate) const fn classify_event(int: u16) -> Option<AnState> {
    if int & an_int::PAGE_RECEIVED != 0 {
        Some(AnState::PageReceived)
    } else if int & an_int::INCOMPATIBLE_LINK != 0 {
        Some(AnState::IncompatibleLink)
    } else if int & an_int::COMPLETE != 0 {
        Some(AnState::Complete)
    } else {
        None
    }
}

/// Base page technology bit for a line mode
pub(crate) const fn ability_bit(mode: Mode) -> u16 {
    match mode {
        Mode::Kr => adv2::KR_10G,
        Mode::Kx => adv2::KX,
    }
}

/// Base page word 1: pause abilities, never request next pages
pub(crate) const fn advertise_word1(features: &SupportedFeatures, reg: u16) -> u16 {
    let mut reg = reg & !(adv1::PAUSE | adv1::ASYM_PAUSE | adv1::NEXT_PAGE);
    if features.pause {
        reg |= adv1::PAUSE;
    }
    if features.asym_pause {
        reg |= adv1::ASYM_PAUSE;
    }
    reg
}

/// Base page word 2: technology abilities
pub(crate) const fn advertise_word2(features: &SupportedFeatures, reg: u16) -> u16 {
    let mut reg = reg & !(adv2::KR_10G | adv2::KX);
    if features.kr_10g {
        reg |= adv2::KR_10G;
    }
    if features.any_kx() {
        reg |= adv2::KX;
    }
    reg
}

/// Base page word 3: FEC ability and request
pub(crate) const fn advertise_word3(features: &SupportedFeatures, reg: u16) -> u16 {
    if features.fec_10g {
        reg | adv3::FEC
    } else {
        reg & !adv3::FEC
    }
}

/// Whether either side asked for a next page exchange
pub(crate) const fn wants_next_page(ad: u16, lp: u16) -> bool {
    (ad | lp) & adv1::NEXT_PAGE != 0
}

/// Whether both sides advertise FEC
pub(crate) const fn fec_agreed(ad3: u16, lp3: u16) -> bool {
    ad3 & adv3::FEC != 0 && lp3 & adv3::FEC != 0
}

// =============================================================================
// Unit Tests
// =============================================================================
