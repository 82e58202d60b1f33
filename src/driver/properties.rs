//! Firmware property lookup
//!
//! The PHY needs two integers from the platform description (ACPI `_DSD` or
//! a device-tree node): the SerDes channel and the speed set. Discovery and
//! parsing are the platform's job; the driver only sees a [`PropertySource`].

use super::config::SpeedSet;
use super::error::{ConfigError, ConfigResult};
use crate::hal::serdes::SerdesLane;

/// Property naming the SerDes lane within the shared CMU
pub const SERDES_CHANNEL_PROPERTY: &str = "amd,serdes-channel";

/// Property selecting the KX speed paired with 10GBASE-KR
pub const SPEED_SET_PROPERTY: &str = "amd,speed-set";

/// Keyed lookup of already-resolved integer properties
pub trait PropertySource {
    /// Read an integer property, `None` if absent
    fn property_u32(&self, name: &str) -> Option<u32>;
}

/// Probe-time configuration resolved from firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeConfig {
    /// SerDes lane
    pub lane: SerdesLane,
    /// Speed set
    pub speed_set: SpeedSet,
}

impl ProbeConfig {
    /// Resolve both properties
    ///
    /// The channel is required; a missing speed set means the 1G/10G pairing.
    pub fn from_properties<P: PropertySource + ?Sized>(props: &P) -> ConfigResult<Self> {
        let channel = props
            .property_u32(SERDES_CHANNEL_PROPERTY)
            .ok_or(ConfigError::MissingProperty)?;
        let lane = SerdesLane::new(channel)?;

        let speed_set = match props.property_u32(SPEED_SET_PROPERTY) {
            Some(value) => SpeedSet::from_property(value)?,
            None => SpeedSet::default(),
        };

        Ok(Self { lane, speed_set })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockProperties;

    #[test]
    fn resolves_both_properties() {
        let props = MockProperties::new()
            .with(SERDES_CHANNEL_PROPERTY, 2)
            .with(SPEED_SET_PROPERTY, 1);

        let cfg = ProbeConfig::from_properties(&props).unwrap();
        assert_eq!(cfg.lane.index(), 2);
        assert_eq!(cfg.speed_set, SpeedSet::Speed2500_10000);
    }

    #[test]
    fn missing_channel_is_rejected() {
        let props = MockProperties::new().with(SPEED_SET_PROPERTY, 0);
        assert_eq!(
            ProbeConfig::from_properties(&props),
            Err(ConfigError::MissingProperty)
        );
    }

    #[test]
    fn missing_speed_set_defaults_to_1g() {
        let props = MockProperties::new().with(SERDES_CHANNEL_PROPERTY, 0);
        let cfg = ProbeConfig::from_properties(&props).unwrap();
        assert_eq!(cfg.speed_set, SpeedSet::Speed1000_10000);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let props = MockProperties::new()
            .with(SERDES_CHANNEL_PROPERTY, 8)
            .with(SPEED_SET_PROPERTY, 0);
        assert_eq!(
            ProbeConfig::from_properties(&props),
            Err(ConfigError::InvalidSerdesChannel)
        );

        let props = MockProperties::new()
            .with(SERDES_CHANNEL_PROPERTY, 1)
            .with(SPEED_SET_PROPERTY, 7);
        assert_eq!(
            ProbeConfig::from_properties(&props),
            Err(ConfigError::InvalidSpeedSet)
        );
    }
}
