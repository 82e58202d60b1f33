//! Memory-mapped SerDes register access
//!
//! The SerDes RxTx and CMU blocks are 16-bit register files addressed by byte
//! offset. Drivers see them through [`RegisterSpace`] so that host tests can
//! substitute a mock block.

use core::ptr::NonNull;

use crate::driver::error::{ResourceError, ResourceResult};

// =============================================================================
// Register Space Trait
// =============================================================================

/// A block of 16-bit registers addressed by byte offset
///
/// Methods take `&self`: a register block is a hardware resource with its own
/// side effects, and callers that share one (the CMU) serialise access with
/// an external lock.
pub trait RegisterSpace {
    /// Read the register at `offset`
    fn read16(&self, offset: u16) -> u16;

    /// Write the register at `offset`
    fn write16(&self, offset: u16, value: u16);

    /// Read-modify-write with a closure
    #[inline]
    fn modify16<F>(&self, offset: u16, f: F)
    where
        F: FnOnce(u16) -> u16,
    {
        let value = self.read16(offset);
        self.write16(offset, f(value));
    }

    /// Replace one bit field
    #[inline]
    fn write_field(&self, field: Field, value: u16) {
        self.modify16(field.offset, |reg| field.insert(reg, value));
    }

    /// Read one bit field
    #[inline]
    fn read_field(&self, field: Field) -> u16 {
        field.extract(self.read16(field.offset))
    }
}

impl<T: RegisterSpace + ?Sized> RegisterSpace for &T {
    fn read16(&self, offset: u16) -> u16 {
        (**self).read16(offset)
    }

    fn write16(&self, offset: u16, value: u16) {
        (**self).write16(offset, value);
    }
}

// =============================================================================
// Bit Fields
// =============================================================================

/// A bit field inside a 16-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Register byte offset
    pub offset: u16,
    /// Lowest bit of the field
    pub shift: u8,
    /// Width in bits
    pub width: u8,
}

impl Field {
    /// Describe a field
    pub const fn new(offset: u16, shift: u8, width: u8) -> Self {
        Self {
            offset,
            shift,
            width,
        }
    }

    /// Field mask in register position
    pub const fn mask(self) -> u16 {
        let ones = if self.width >= 16 {
            u16::MAX
        } else {
            (1u16 << self.width) - 1
        };
        ones << self.shift
    }

    /// `reg` with the field replaced by `value` (excess bits dropped)
    pub const fn insert(self, reg: u16, value: u16) -> u16 {
        (reg & !self.mask()) | ((value << self.shift) & self.mask())
    }

    /// Field value from `reg`
    pub const fn extract(self, reg: u16) -> u16 {
        (reg & self.mask()) >> self.shift
    }
}

// =============================================================================
// MMIO Region
// =============================================================================

/// A mapped register block
///
/// Accesses are volatile. Offsets outside the region are ignored on write
/// and read as zero.
#[derive(Debug)]
pub struct MmioRegion {
    base: NonNull<u16>,
    len: usize,
}

impl MmioRegion {
    /// Wrap a mapped block of `len` bytes at `base`
    ///
    /// # Safety
    /// `base..base + len` must be a valid device mapping for the lifetime of
    /// the region, and nothing else may write it through a different alias.
    pub unsafe fn new(base: usize, len: usize) -> ResourceResult<Self> {
        if len == 0 {
            return Err(ResourceError::EmptyRegion);
        }
        if base % core::mem::align_of::<u16>() != 0 {
            return Err(ResourceError::Misaligned);
        }
        let base = NonNull::new(base as *mut u16).ok_or(ResourceError::NullBase)?;
        Ok(Self { base, len })
    }

    /// Region length in bytes
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the region is empty (never true for a constructed region)
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn register(&self, offset: u16) -> Option<*mut u16> {
        let offset = usize::from(offset);
        if offset % 2 != 0 || offset + 2 > self.len {
            return None;
        }
        // SAFETY: offset is in bounds of the mapping established in `new`
        Some(unsafe { self.base.as_ptr().byte_add(offset) })
    }
}

impl RegisterSpace for MmioRegion {
    #[inline]
    fn read16(&self, offset: u16) -> u16 {
        match self.register(offset) {
            // SAFETY: pointer is aligned and inside the mapping
            Some(reg) => unsafe { core::ptr::read_volatile(reg) },
            None => 0,
        }
    }

    #[inline]
    fn write16(&self, offset: u16, value: u16) {
        if let Some(reg) = self.register(offset) {
            // SAFETY: pointer is aligned and inside the mapping
            unsafe { core::ptr::write_volatile(reg, value) }
        }
    }
}

// SAFETY: the region is a device mapping; callers serialise shared access
// through the clock lock or exclusive ownership of the lane block.
unsafe impl Send for MmioRegion {}
// SAFETY: see `Send`.
unsafe impl Sync for MmioRegion {}

// =============================================================================
// Unit Tests
// =============================================================================
