//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::vec::Vec;

use crate::driver::config::Mode;
use crate::driver::error::{IoError, Result};
use crate::driver::properties::PropertySource;
use crate::hal::mdio::{MdioBus, Mmd, MmdBus};
use crate::hal::mmio::RegisterSpace;
use crate::hal::serdes::ClockLock;
use crate::internal::phy_regs::clause45::{devs, mmd_reg, pcs_ctrl2};
use crate::internal::phy_regs::xgbe::cmu;

type MmdKey = (u8, u8, u16);

// =============================================================================
// Mock MMD Bus
// =============================================================================

/// Mock Clause 45 bus for testing PHY drivers without hardware
///
/// Registers read as 0 until set. Scripted reads are consumed before the
/// stored value is used.
///
/// # Example
///
/// ```ignore
/// let mut bus = MockMmdBus::new();
/// bus.setup_xgbe(0, Mode::Kr);
/// bus.queue_reads(0, 3, 1, &[0x0000, 0x0004]); // STAT1: latched low, then up
/// ```
#[derive(Debug, Default)]
pub struct MockMmdBus {
    /// Register values: (phy_addr, mmd, reg) -> value
    registers: RefCell<HashMap<MmdKey, u16>>,
    /// Scripted read values, consumed in order
    queued: RefCell<HashMap<MmdKey, VecDeque<u16>>>,
    /// Record of reads
    read_log: RefCell<Vec<MmdKey>>,
    /// Record of writes: (phy_addr, mmd, reg, value)
    write_log: RefCell<Vec<(u8, u8, u16, u16)>>,
    failing_reads: RefCell<HashSet<MmdKey>>,
    failing_writes: RefCell<HashSet<MmdKey>>,
    fail_all: RefCell<bool>,
    accesses: RefCell<usize>,
}

impl MockMmdBus {
    /// Create a new mock bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, mmd: u8, reg: u16, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, mmd, reg), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, mmd: u8, reg: u16) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, mmd, reg)).copied()
    }

    /// Script the next read of a register
    pub fn queue_read(&self, phy_addr: u8, mmd: u8, reg: u16, value: u16) {
        self.queued
            .borrow_mut()
            .entry((phy_addr, mmd, reg))
            .or_default()
            .push_back(value);
    }

    /// Script several reads of a register
    pub fn queue_reads(&self, phy_addr: u8, mmd: u8, reg: u16, values: &[u16]) {
        for &value in values {
            self.queue_read(phy_addr, mmd, reg, value);
        }
    }

    /// Make reads of one register fail
    pub fn fail_reads_of(&self, phy_addr: u8, mmd: u8, reg: u16) {
        self.failing_reads.borrow_mut().insert((phy_addr, mmd, reg));
    }

    /// Make writes to one register fail
    pub fn fail_writes_to(&self, phy_addr: u8, mmd: u8, reg: u16) {
        self.failing_writes
            .borrow_mut()
            .insert((phy_addr, mmd, reg));
    }

    /// Make every access fail
    pub fn fail_all(&self, fail: bool) {
        *self.fail_all.borrow_mut() = fail;
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16, u16)> {
        self.write_log.borrow().clone()
    }

    /// Values written to one register, in order
    pub fn writes_to(&self, phy_addr: u8, mmd: u8, reg: u16) -> Vec<u16> {
        self.write_log
            .borrow()
            .iter()
            .filter(|&&(a, m, r, _)| (a, m, r) == (phy_addr, mmd, reg))
            .map(|&(_, _, _, value)| value)
            .collect()
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// Number of reads of one register
    pub fn read_count(&self, phy_addr: u8, mmd: u8, reg: u16) -> usize {
        self.read_log
            .borrow()
            .iter()
            .filter(|&&key| key == (phy_addr, mmd, reg))
            .count()
    }

    /// Reads and writes attempted, failed ones included
    pub fn access_count(&self) -> usize {
        *self.accesses.borrow()
    }

    /// Setup for an XGBE PHY in `mode` with the AN MMD present
    pub fn setup_xgbe(&self, phy_addr: u8, mode: Mode) {
        let pcs = Mmd::Pcs.devad();
        self.set_register(phy_addr, pcs, mmd_reg::DEVID1, 0x7996);
        self.set_register(phy_addr, pcs, mmd_reg::DEVID2, 0xced0);
        self.set_register(
            phy_addr,
            pcs,
            mmd_reg::DEVS1,
            (devs::PMAPMD | devs::PCS | devs::AN) as u16,
        );
        self.set_pcs_mode(phy_addr, mode);
    }

    /// Set the PCS type field to `mode`
    pub fn set_pcs_mode(&self, phy_addr: u8, mode: Mode) {
        let pcs = Mmd::Pcs.devad();
        let ctrl2 = self.get_register(phy_addr, pcs, mmd_reg::CTRL2).unwrap_or(0);
        let ty = match mode {
            Mode::Kr => pcs_ctrl2::TYPE_10GBR,
            Mode::Kx => pcs_ctrl2::TYPE_10GBX,
        };
        self.set_register(phy_addr, pcs, mmd_reg::CTRL2, (ctrl2 & !pcs_ctrl2::TYPE) | ty);
    }

    fn fails(&self, set: &RefCell<HashSet<MmdKey>>, key: MmdKey) -> bool {
        *self.fail_all.borrow() || set.borrow().contains(&key)
    }
}

impl MmdBus for MockMmdBus {
    fn read(&mut self, phy_addr: u8, mmd: u8, reg: u16) -> Result<u16> {
        let key = (phy_addr, mmd, reg);
        *self.accesses.borrow_mut() += 1;
        if self.fails(&self.failing_reads, key) {
            return Err(IoError::PhyError.into());
        }
        self.read_log.borrow_mut().push(key);

        let queued = self
            .queued
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        Ok(queued.unwrap_or_else(|| self.get_register(phy_addr, mmd, reg).unwrap_or(0)))
    }

    fn write(&mut self, phy_addr: u8, mmd: u8, reg: u16, value: u16) -> Result<()> {
        let key = (phy_addr, mmd, reg);
        *self.accesses.borrow_mut() += 1;
        if self.fails(&self.failing_writes, key) {
            return Err(IoError::PhyError.into());
        }

        // Log the write
        self.write_log
            .borrow_mut()
            .push((phy_addr, mmd, reg, value));

        // Actually update the register
        self.set_register(phy_addr, mmd, reg, value);

        Ok(())
    }
}

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock Clause 22 bus for testing indirect MMD access
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Scripted read values, consumed in order
    queued: RefCell<HashMap<(u8, u8), VecDeque<u16>>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Script the next read of a register
    pub fn queue_read(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.queued
            .borrow_mut()
            .entry((phy_addr, reg_addr))
            .or_default()
            .push_back(value);
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        let queued = self
            .queued
            .borrow_mut()
            .get_mut(&(phy_addr, reg_addr))
            .and_then(VecDeque::pop_front);
        Ok(queued.unwrap_or_else(|| self.get_register(phy_addr, reg_addr).unwrap_or(0)))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));
        self.set_register(phy_addr, reg_addr, value);
        Ok(())
    }
}

// =============================================================================
// Mock Register Space
// =============================================================================

/// Strobe edge seen on the CMU rate-change register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmuEvent {
    /// Bits newly set
    Assert(u16),
    /// Bits newly cleared
    Release(u16),
}

/// Mock SerDes register block
///
/// Thread-safe so a `ClockDomain` over it can be shared between threads.
/// Writes to the CMU rate-change register log strobe edges.
#[derive(Debug, Default)]
pub struct MockRegisterSpace {
    registers: Mutex<HashMap<u16, u16>>,
    events: Mutex<Vec<CmuEvent>>,
}

impl MockRegisterSpace {
    /// Create an all-zero block
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value without logging
    pub fn set_register(&self, offset: u16, value: u16) {
        self.registers.lock().unwrap().insert(offset, value);
    }

    /// Get the current value of a register
    pub fn get_register(&self, offset: u16) -> u16 {
        self.registers
            .lock()
            .unwrap()
            .get(&offset)
            .copied()
            .unwrap_or(0)
    }

    /// Strobe edges in write order
    pub fn events(&self) -> Vec<CmuEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RegisterSpace for MockRegisterSpace {
    fn read16(&self, offset: u16) -> u16 {
        self.get_register(offset)
    }

    fn write16(&self, offset: u16, value: u16) {
        let old = self
            .registers
            .lock()
            .unwrap()
            .insert(offset, value)
            .unwrap_or(0);

        if offset == cmu::REG16 {
            let mut events = self.events.lock().unwrap();
            let set = value & !old;
            let cleared = old & !value;
            if set != 0 {
                events.push(CmuEvent::Assert(set));
            }
            if cleared != 0 {
                events.push(CmuEvent::Release(cleared));
            }
        }
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }

    /// Reset the delay counter
    pub fn reset(&self) {
        *self.total_ns.borrow_mut() = 0;
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// =============================================================================
// Mock Clock Lock
// =============================================================================

/// Host mutex standing in for the platform's CMU lock
///
/// Counts acquisitions and the most holders ever seen at once.
#[derive(Debug, Default)]
pub struct MutexLock {
    mutex: Mutex<()>,
    holders: AtomicUsize,
    max_holders: AtomicUsize,
    acquisitions: AtomicUsize,
}

impl MutexLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_holders(&self) -> usize {
        self.max_holders.load(Ordering::SeqCst)
    }

    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }
}

impl ClockLock for MutexLock {
    fn with_lock<T>(&self, f: impl FnOnce() -> T) -> T {
        let _guard = self.mutex.lock().unwrap();
        let holders = self.holders.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_holders.fetch_max(holders, Ordering::SeqCst);
        self.acquisitions.fetch_add(1, Ordering::SeqCst);

        let result = f();

        self.holders.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

// =============================================================================
// Mock Properties
// =============================================================================

/// Firmware properties from a literal table
#[derive(Debug, Default)]
pub struct MockProperties {
    values: HashMap<&'static str, u32>,
}

impl MockProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property
    #[must_use]
    pub fn with(mut self, name: &'static str, value: u32) -> Self {
        self.values.insert(name, value);
        self
    }
}

impl PropertySource for MockProperties {
    fn property_u32(&self, name: &str) -> Option<u32> {
        self.values.get(name).copied()
    }
}
