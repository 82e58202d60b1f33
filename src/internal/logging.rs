//! Logging shims
//!
//! Routes driver diagnostics to `log` and/or `defmt` depending on the enabled
//! features. With neither enabled the arguments are still type-checked so
//! call sites compile identically.

macro_rules! phy_log {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::$level!($($arg)*);
        #[cfg(feature = "defmt")]
        defmt::$level!($($arg)*);
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

macro_rules! phy_debug {
    ($($arg:tt)*) => { $crate::internal::logging::phy_log!(debug, $($arg)*) };
}

macro_rules! phy_info {
    ($($arg:tt)*) => { $crate::internal::logging::phy_log!(info, $($arg)*) };
}

macro_rules! phy_error {
    ($($arg:tt)*) => { $crate::internal::logging::phy_log!(error, $($arg)*) };
}

pub(crate) use {phy_debug, phy_error, phy_info, phy_log};
