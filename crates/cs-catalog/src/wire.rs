//! Copper wire cross-sections and their current limits.

use core::fmt;
use core::str::FromStr;

use cs_core::units::{Current, Time, amps, minutes};

use crate::error::CatalogError;

/// Conductor cross-section in mm².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WireGauge {
    Sq1_5,
    Sq2_5,
    Sq4,
    Sq6,
    Sq10,
    Sq16,
}

impl WireGauge {
    pub const ALL: [WireGauge; 6] = [
        WireGauge::Sq1_5,
        WireGauge::Sq2_5,
        WireGauge::Sq4,
        WireGauge::Sq6,
        WireGauge::Sq10,
        WireGauge::Sq16,
    ];

    /// Gauge used when a key does not resolve.
    pub const DEFAULT: WireGauge = WireGauge::Sq2_5;

    /// Catalog key, e.g. `"2.5"` or `"10.0"`.
    pub fn key(self) -> &'static str {
        match self {
            WireGauge::Sq1_5 => "1.5",
            WireGauge::Sq2_5 => "2.5",
            WireGauge::Sq4 => "4.0",
            WireGauge::Sq6 => "6.0",
            WireGauge::Sq10 => "10.0",
            WireGauge::Sq16 => "16.0",
        }
    }

    pub fn square_mm(self) -> f64 {
        match self {
            WireGauge::Sq1_5 => 1.5,
            WireGauge::Sq2_5 => 2.5,
            WireGauge::Sq4 => 4.0,
            WireGauge::Sq6 => 6.0,
            WireGauge::Sq10 => 10.0,
            WireGauge::Sq16 => 16.0,
        }
    }

    /// Strict lookup. Accepts `"4"`, `"4.0"` and `"4.0mm²"` alike.
    pub fn parse(key: &str) -> Result<Self, CatalogError> {
        let trimmed = key
            .trim()
            .trim_end_matches("mm²")
            .trim_end_matches("mm2")
            .trim();
        let unknown = || CatalogError::UnknownWireGauge {
            key: key.to_string(),
        };
        let value: f64 = trimmed.parse().map_err(|_| unknown())?;
        Self::ALL
            .into_iter()
            .find(|g| g.square_mm() == value)
            .ok_or_else(unknown)
    }

    /// Lenient lookup: unknown keys resolve to [`WireGauge::DEFAULT`].
    pub fn resolve(key: &str) -> Self {
        match Self::parse(key) {
            Ok(gauge) => gauge,
            Err(_) => {
                tracing::debug!(key, fallback = Self::DEFAULT.key(), "unknown wire gauge");
                Self::DEFAULT
            }
        }
    }

    pub fn spec(self) -> WireSpec {
        let (continuous, short_term, tau_min, description) = match self {
            WireGauge::Sq1_5 => (
                16.0,
                20.0,
                15.0,
                "Suitable for lighting circuits and small appliances",
            ),
            WireGauge::Sq2_5 => (20.0, 25.0, 20.0, "Common size for power circuits"),
            WireGauge::Sq4 => (27.0, 34.0, 25.0, "Suitable for higher power appliances"),
            WireGauge::Sq6 => (34.0, 43.0, 30.0, "Used for heavy duty circuits"),
            WireGauge::Sq10 => (46.0, 58.0, 35.0, "High current applications"),
            WireGauge::Sq16 => (62.0, 78.0, 40.0, "Industrial applications"),
        };
        WireSpec {
            gauge: self,
            max_continuous: amps(continuous),
            max_short_term: amps(short_term),
            thermal_time_constant: minutes(tau_min),
            description,
        }
    }
}

impl Default for WireGauge {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for WireGauge {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WireGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm²", self.key())
    }
}

/// Current limits and thermal time constant of one wire gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireSpec {
    pub gauge: WireGauge,
    pub max_continuous: Current,
    pub max_short_term: Current,
    /// Time for the conductor to reach ~63% of its final heating.
    pub thermal_time_constant: Time,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::units::{as_amps, as_minutes};

    #[test]
    fn reference_values_are_preserved() {
        let spec = WireGauge::Sq2_5.spec();
        assert_eq!(as_amps(spec.max_continuous), 20.0);
        assert_eq!(as_amps(spec.max_short_term), 25.0);
        assert_eq!(as_minutes(spec.thermal_time_constant), 20.0);

        let spec = WireGauge::Sq16.spec();
        assert_eq!(as_amps(spec.max_continuous), 62.0);
        assert_eq!(as_amps(spec.max_short_term), 78.0);
        assert_eq!(as_minutes(spec.thermal_time_constant), 40.0);
    }

    #[test]
    fn parse_accepts_short_and_suffixed_keys() {
        assert_eq!(WireGauge::parse("4").unwrap(), WireGauge::Sq4);
        assert_eq!(WireGauge::parse("4.0").unwrap(), WireGauge::Sq4);
        assert_eq!(WireGauge::parse(" 10.0mm² ").unwrap(), WireGauge::Sq10);
        assert_eq!("1.5".parse::<WireGauge>().unwrap(), WireGauge::Sq1_5);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(matches!(
            WireGauge::parse("3.0"),
            Err(CatalogError::UnknownWireGauge { .. })
        ));
        assert!(WireGauge::parse("thick").is_err());
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(WireGauge::resolve("3.0"), WireGauge::Sq2_5);
        assert_eq!(WireGauge::resolve(""), WireGauge::Sq2_5);
        assert_eq!(WireGauge::resolve("6"), WireGauge::Sq6);
    }

    #[test]
    fn limits_grow_with_cross_section() {
        let specs: Vec<WireSpec> = WireGauge::ALL.iter().map(|g| g.spec()).collect();
        for pair in specs.windows(2) {
            assert!(pair[0].max_continuous < pair[1].max_continuous);
            assert!(pair[0].max_continuous < pair[0].max_short_term);
        }
    }
}
