//! Configuration types for the XGBE PHY driver

use super::error::{ConfigError, ConfigResult};

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    Mbps100,
    /// 1000 Mbps
    Gbps1,
    /// 2500 Mbps
    Mbps2500,
    /// 10 Gbps
    #[default]
    Gbps10,
}

impl Speed {
    /// Link speed in Mbps
    #[must_use]
    pub const fn as_mbps(self) -> u32 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
            Speed::Gbps1 => 1_000,
            Speed::Mbps2500 => 2_500,
            Speed::Gbps10 => 10_000,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// Electrical line mode of the backplane link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// 10GBASE-KR (64b/66b)
    Kr,
    /// 1000BASE-KX / 2500BASE-KX (8b/10b)
    Kx,
}

impl Mode {
    /// The other line mode
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mode::Kr => Mode::Kx,
            Mode::Kx => Mode::Kr,
        }
    }
}

/// Speed pairing supported by the board, from the `amd,speed-set` property
///
/// Fixed at probe time; selects which KX rate the PHY falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedSet {
    /// 1000BASE-KX and 10GBASE-KR
    #[default]
    Speed1000_10000,
    /// 2500BASE-KX and 10GBASE-KR
    Speed2500_10000,
}

impl SpeedSet {
    /// Decode the firmware property value
    pub const fn from_property(value: u32) -> ConfigResult<Self> {
        match value {
            0 => Ok(SpeedSet::Speed1000_10000),
            1 => Ok(SpeedSet::Speed2500_10000),
            _ => Err(ConfigError::InvalidSpeedSet),
        }
    }

    /// Speed used while in KX mode
    #[must_use]
    pub const fn low_speed(self) -> Speed {
        match self {
            SpeedSet::Speed1000_10000 => Speed::Gbps1,
            SpeedSet::Speed2500_10000 => Speed::Mbps2500,
        }
    }

    /// The KX register sequence for this speed set
    #[must_use]
    pub const fn kx_mode(self) -> LinkMode {
        match self {
            SpeedSet::Speed1000_10000 => LinkMode::Kx1G,
            SpeedSet::Speed2500_10000 => LinkMode::Kx2500,
        }
    }
}

/// A concrete register programming target
///
/// `Mode` says which line coding is used; `LinkMode` also pins the rate, and
/// therefore the SerDes field table applied by the rate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkMode {
    /// 10GBASE-KR at 10 Gbps
    Kr10G,
    /// 1000BASE-KX at 1 Gbps
    Kx1G,
    /// 2500BASE-KX at 2.5 Gbps
    Kx2500,
}

impl LinkMode {
    /// Line mode this target programs
    #[must_use]
    pub const fn mode(self) -> Mode {
        match self {
            LinkMode::Kr10G => Mode::Kr,
            LinkMode::Kx1G | LinkMode::Kx2500 => Mode::Kx,
        }
    }

    /// Link speed this target runs at
    #[must_use]
    pub const fn speed(self) -> Speed {
        match self {
            LinkMode::Kr10G => Speed::Gbps10,
            LinkMode::Kx1G => Speed::Gbps1,
            LinkMode::Kx2500 => Speed::Mbps2500,
        }
    }

    /// Target for `mode` under `speed_set`
    #[must_use]
    pub const fn for_mode(mode: Mode, speed_set: SpeedSet) -> Self {
        match mode {
            Mode::Kr => LinkMode::Kr10G,
            Mode::Kx => speed_set.kx_mode(),
        }
    }

    /// Target to switch to when the link partner rejects `current`
    #[must_use]
    pub const fn alternate(current: Mode, speed_set: SpeedSet) -> Self {
        Self::for_mode(current.other(), speed_set)
    }

    /// Target for a forced speed, if the speed set supports it
    pub fn for_speed(speed: Speed, speed_set: SpeedSet) -> ConfigResult<Self> {
        match speed {
            Speed::Gbps10 => Ok(LinkMode::Kr10G),
            s if s == speed_set.low_speed() => Ok(speed_set.kx_mode()),
            _ => Err(ConfigError::UnsupportedSpeed),
        }
    }
}

/// Link modes and features the PHY supports or advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SupportedFeatures {
    /// Auto-negotiation
    pub autoneg: bool,
    /// Symmetric PAUSE
    pub pause: bool,
    /// Asymmetric PAUSE
    pub asym_pause: bool,
    /// Backplane port
    pub backplane: bool,
    /// 10GBASE-KR full duplex
    pub kr_10g: bool,
    /// 10GBASE-R FEC
    pub fec_10g: bool,
    /// 1000BASE-KX full duplex
    pub kx_1g: bool,
    /// 2500BASE-X full duplex
    pub x_2500: bool,
}

impl SupportedFeatures {
    /// No features
    #[must_use]
    pub const fn none() -> Self {
        Self {
            autoneg: false,
            pause: false,
            asym_pause: false,
            backplane: false,
            kr_10g: false,
            fec_10g: false,
            kx_1g: false,
            x_2500: false,
        }
    }

    /// Everything this PHY can do with the given speed set
    #[must_use]
    pub const fn for_speed_set(speed_set: SpeedSet) -> Self {
        Self {
            autoneg: true,
            pause: true,
            asym_pause: true,
            backplane: true,
            kr_10g: true,
            fec_10g: true,
            kx_1g: matches!(speed_set, SpeedSet::Speed1000_10000),
            x_2500: matches!(speed_set, SpeedSet::Speed2500_10000),
        }
    }

    /// Whether any KX-class mode is present
    #[must_use]
    pub const fn any_kx(&self) -> bool {
        self.kx_1g || self.x_2500
    }
}

/// Link configuration requested by the upper layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Use auto-negotiation (otherwise `speed` and `duplex` are forced)
    pub autoneg: bool,
    /// Forced speed
    pub speed: Speed,
    /// Forced duplex
    pub duplex: Duplex,
    /// Features the PHY supports
    pub supported: SupportedFeatures,
    /// Features advertised to the link partner in every base page
    pub advertising: SupportedFeatures,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkConfig {
    /// Auto-negotiated link, nothing advertised until `config_init`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            autoneg: true,
            speed: Speed::Gbps10,
            duplex: Duplex::Full,
            supported: SupportedFeatures::none(),
            advertising: SupportedFeatures::none(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Enable or disable auto-negotiation
    #[must_use]
    pub const fn with_autoneg(mut self, enabled: bool) -> Self {
        self.autoneg = enabled;
        self
    }

    /// Force a speed and duplex (disables auto-negotiation)
    #[must_use]
    pub const fn with_forced(mut self, speed: Speed, duplex: Duplex) -> Self {
        self.autoneg = false;
        self.speed = speed;
        self.duplex = duplex;
        self
    }

    /// Set the supported features
    #[must_use]
    pub const fn with_supported(mut self, supported: SupportedFeatures) -> Self {
        self.supported = supported;
        self
    }

    /// Set the advertised features
    #[must_use]
    pub const fn with_advertising(mut self, advertising: SupportedFeatures) -> Self {
        self.advertising = advertising;
        self
    }

    /// Check forced speed/duplex against the speed set
    ///
    /// Returns the register target for the forced speed.
    pub fn validate_forced(&self, speed_set: SpeedSet) -> ConfigResult<LinkMode> {
        let target = LinkMode::for_speed(self.speed, speed_set)?;
        if self.duplex != Duplex::Full {
            return Err(ConfigError::UnsupportedDuplex);
        }
        Ok(target)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_set_from_property() {
        assert_eq!(SpeedSet::from_property(0), Ok(SpeedSet::Speed1000_10000));
        assert_eq!(SpeedSet::from_property(1), Ok(SpeedSet::Speed2500_10000));
        assert_eq!(SpeedSet::from_property(2), Err(ConfigError::InvalidSpeedSet));
    }

    #[test]
    fn speed_set_low_speed() {
        assert_eq!(SpeedSet::Speed1000_10000.low_speed(), Speed::Gbps1);
        assert_eq!(SpeedSet::Speed2500_10000.low_speed(), Speed::Mbps2500);
    }

    #[test]
    fn link_mode_alternate_is_involution() {
        for set in [SpeedSet::Speed1000_10000, SpeedSet::Speed2500_10000] {
            for mode in [Mode::Kr, Mode::Kx] {
                let once = LinkMode::alternate(mode, set);
                let twice = LinkMode::alternate(once.mode(), set);
                assert_eq!(twice, LinkMode::for_mode(mode, set));
            }
        }
    }

    #[test]
    fn link_mode_alternate_picks_speed_set_kx() {
        assert_eq!(
            LinkMode::alternate(Mode::Kr, SpeedSet::Speed1000_10000),
            LinkMode::Kx1G
        );
        assert_eq!(
            LinkMode::alternate(Mode::Kr, SpeedSet::Speed2500_10000),
            LinkMode::Kx2500
        );
        assert_eq!(
            LinkMode::alternate(Mode::Kx, SpeedSet::Speed2500_10000),
            LinkMode::Kr10G
        );
    }

    #[test]
    fn link_mode_for_speed_respects_speed_set() {
        let set = SpeedSet::Speed1000_10000;
        assert_eq!(LinkMode::for_speed(Speed::Gbps10, set), Ok(LinkMode::Kr10G));
        assert_eq!(LinkMode::for_speed(Speed::Gbps1, set), Ok(LinkMode::Kx1G));
        assert_eq!(
            LinkMode::for_speed(Speed::Mbps2500, set),
            Err(ConfigError::UnsupportedSpeed)
        );
        assert_eq!(
            LinkMode::for_speed(Speed::Mbps100, set),
            Err(ConfigError::UnsupportedSpeed)
        );
    }

    #[test]
    fn supported_features_for_speed_set() {
        let f = SupportedFeatures::for_speed_set(SpeedSet::Speed1000_10000);
        assert!(f.kr_10g && f.fec_10g && f.kx_1g && f.autoneg);
        assert!(!f.x_2500);

        let f = SupportedFeatures::for_speed_set(SpeedSet::Speed2500_10000);
        assert!(f.x_2500 && !f.kx_1g);
        assert!(f.any_kx());
        assert!(!SupportedFeatures::none().any_kx());
    }

    #[test]
    fn link_config_builder_forced() {
        let cfg = LinkConfig::new().with_forced(Speed::Gbps1, Duplex::Full);
        assert!(!cfg.autoneg);
        assert_eq!(cfg.speed, Speed::Gbps1);
        assert_eq!(cfg.validate_forced(SpeedSet::Speed1000_10000), Ok(LinkMode::Kx1G));
    }

    #[test]
    fn link_config_rejects_half_duplex() {
        let cfg = LinkConfig::new().with_forced(Speed::Gbps10, Duplex::Half);
        assert_eq!(
            cfg.validate_forced(SpeedSet::Speed1000_10000),
            Err(ConfigError::UnsupportedDuplex)
        );
    }

    #[test]
    fn link_config_default_is_autoneg() {
        let cfg = LinkConfig::default();
        assert!(cfg.autoneg);
        assert_eq!(cfg.duplex, Duplex::Full);
        assert_eq!(cfg.supported, SupportedFeatures::none());
    }

    #[test]
    fn speed_as_mbps() {
        assert_eq!(Speed::Gbps10.as_mbps(), 10_000);
        assert_eq!(Speed::Mbps2500.as_mbps(), 2_500);
    }
}
