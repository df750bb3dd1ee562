//! Miniature circuit breaker trip curves.

use core::fmt;
use core::str::FromStr;

use cs_core::units::{Current, Time, millis, seconds};

use crate::error::CatalogError;

/// Trip curve family. The rating itself is chosen separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BreakerType {
    B,
    C,
    D,
}

impl BreakerType {
    pub const ALL: [BreakerType; 3] = [BreakerType::B, BreakerType::C, BreakerType::D];

    pub fn letter(self) -> char {
        match self {
            BreakerType::B => 'B',
            BreakerType::C => 'C',
            BreakerType::D => 'D',
        }
    }

    /// Display label used in assessments, e.g. `"Type C"`.
    pub fn label(self) -> &'static str {
        match self {
            BreakerType::B => "Type B",
            BreakerType::C => "Type C",
            BreakerType::D => "Type D",
        }
    }

    pub fn spec(self) -> BreakerSpec {
        match self {
            BreakerType::B => BreakerSpec {
                breaker_type: self,
                instantaneous_multiple: 3.0,
                thermal_multiple: 1.13,
                thermal_trip_time: seconds(3600.0),
                inrush_tolerance_multiple: 3.0,
                inrush_tolerance_window: millis(100.0),
                characteristics: BreakerCharacteristics {
                    thermal_memory: true,
                    harmonic_sensitive: true,
                    selectivity: Selectivity::Low,
                },
                description: "Suitable for resistive loads and lighting circuits",
            },
            BreakerType::C => BreakerSpec {
                breaker_type: self,
                instantaneous_multiple: 5.0,
                thermal_multiple: 1.13,
                thermal_trip_time: seconds(3600.0),
                inrush_tolerance_multiple: 5.0,
                inrush_tolerance_window: millis(200.0),
                characteristics: BreakerCharacteristics {
                    thermal_memory: true,
                    harmonic_sensitive: false,
                    selectivity: Selectivity::Medium,
                },
                description: "Suitable for slightly inductive loads and small motors",
            },
            BreakerType::D => BreakerSpec {
                breaker_type: self,
                instantaneous_multiple: 10.0,
                thermal_multiple: 1.13,
                thermal_trip_time: seconds(3600.0),
                inrush_tolerance_multiple: 10.0,
                inrush_tolerance_window: millis(400.0),
                characteristics: BreakerCharacteristics {
                    thermal_memory: true,
                    harmonic_sensitive: false,
                    selectivity: Selectivity::High,
                },
                description: "Suitable for highly inductive loads and motors",
            },
        }
    }
}

impl FromStr for BreakerType {
    type Err = CatalogError;

    /// Accepts `"C"`, `"c"`, `"Type C"` and `"type-c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let letter = normalized
            .strip_prefix("type")
            .map(|rest| rest.trim_start_matches([' ', '-', '_']))
            .unwrap_or(&normalized);
        match letter {
            "b" => Ok(BreakerType::B),
            "c" => Ok(BreakerType::C),
            "d" => Ok(BreakerType::D),
            _ => Err(CatalogError::UnknownBreakerType { key: s.to_string() }),
        }
    }
}

impl fmt::Display for BreakerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selectivity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Selectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Selectivity::Low => "Low",
            Selectivity::Medium => "Medium",
            Selectivity::High => "High",
        };
        f.write_str(s)
    }
}

/// Descriptive protection features. They do not enter the trip decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerCharacteristics {
    pub thermal_memory: bool,
    pub harmonic_sensitive: bool,
    pub selectivity: Selectivity,
}

/// Trip curve of one breaker type, expressed as multiples of the rated current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakerSpec {
    pub breaker_type: BreakerType,
    /// Magnetic release threshold.
    pub instantaneous_multiple: f64,
    /// Sustained overload threshold.
    pub thermal_multiple: f64,
    /// Time to trip at exactly `thermal_multiple × rated`.
    pub thermal_trip_time: Time,
    pub inrush_tolerance_multiple: f64,
    /// Grace window after energization during which inrush is tolerated.
    pub inrush_tolerance_window: Time,
    pub characteristics: BreakerCharacteristics,
    pub description: &'static str,
}

impl BreakerSpec {
    pub fn instant_trip_current(&self, rated: Current) -> Current {
        rated * self.instantaneous_multiple
    }

    pub fn thermal_trip_current(&self, rated: Current) -> Current {
        rated * self.thermal_multiple
    }

    pub fn inrush_tolerance_current(&self, rated: Current) -> Current {
        rated * self.inrush_tolerance_multiple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::units::{amps, as_amps, as_millis, as_seconds};
    use cs_core::{Tolerances, nearly_equal};

    #[test]
    fn type_c_reference_values() {
        let spec = BreakerType::C.spec();
        assert_eq!(spec.instantaneous_multiple, 5.0);
        assert_eq!(spec.thermal_multiple, 1.13);
        assert_eq!(as_seconds(spec.thermal_trip_time), 3600.0);
        assert_eq!(spec.inrush_tolerance_multiple, 5.0);
        assert!(nearly_equal(
            as_millis(spec.inrush_tolerance_window),
            200.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn windows_widen_from_b_to_d() {
        let b = BreakerType::B.spec();
        let c = BreakerType::C.spec();
        let d = BreakerType::D.spec();
        assert!(b.inrush_tolerance_window < c.inrush_tolerance_window);
        assert!(c.inrush_tolerance_window < d.inrush_tolerance_window);
        assert!(b.instantaneous_multiple < c.instantaneous_multiple);
        assert!(c.instantaneous_multiple < d.instantaneous_multiple);
    }

    #[test]
    fn parse_type_labels() {
        assert_eq!("Type B".parse::<BreakerType>().unwrap(), BreakerType::B);
        assert_eq!("c".parse::<BreakerType>().unwrap(), BreakerType::C);
        assert_eq!("type-d".parse::<BreakerType>().unwrap(), BreakerType::D);
        assert!("Type K".parse::<BreakerType>().is_err());
        assert!("".parse::<BreakerType>().is_err());
    }

    #[test]
    fn thresholds_scale_with_rating() {
        let spec = BreakerType::C.spec();
        assert_eq!(as_amps(spec.instant_trip_current(amps(16.0))), 80.0);
        assert_eq!(as_amps(spec.inrush_tolerance_current(amps(16.0))), 80.0);
        assert!(nearly_equal(
            as_amps(spec.thermal_trip_current(amps(16.0))),
            16.0 * 1.13,
            Tolerances::default()
        ));
    }

    #[test]
    fn label_round_trips() {
        for t in BreakerType::ALL {
            assert_eq!(t.label().parse::<BreakerType>().unwrap(), t);
            assert_eq!(t.spec().breaker_type, t);
        }
    }
}
