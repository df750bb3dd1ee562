// cs-core/src/units.rs

use core::fmt;

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};

use crate::CoreError;

// Public canonical unit types (SI, f64)
pub type Current = UomElectricCurrent;
pub type Time = UomTime;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn minutes(v: f64) -> Time {
    use uom::si::time::minute;
    Time::new::<minute>(v)
}

#[inline]
pub fn seconds(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn millis(v: f64) -> Time {
    use uom::si::time::millisecond;
    Time::new::<millisecond>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// A temperature difference in kelvin-sized degrees.
#[inline]
pub fn celsius_delta(v: f64) -> TempInterval {
    use uom::si::temperature_interval::degree_celsius;
    TempInterval::new::<degree_celsius>(v)
}

#[inline]
pub fn as_amps(i: Current) -> f64 {
    use uom::si::electric_current::ampere;
    i.get::<ampere>()
}

#[inline]
pub fn as_minutes(t: Time) -> f64 {
    use uom::si::time::minute;
    t.get::<minute>()
}

#[inline]
pub fn as_seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

#[inline]
pub fn as_millis(t: Time) -> f64 {
    use uom::si::time::millisecond;
    t.get::<millisecond>()
}

#[inline]
pub fn as_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[inline]
pub fn as_celsius_delta(dt: TempInterval) -> f64 {
    use uom::si::temperature_interval::degree_celsius;
    dt.get::<degree_celsius>()
}

/// Share of each cycle during which a load draws current, kept as a percentage.
///
/// The percentage is the stored form because on/off boundaries are computed as
/// `period * percent / 100`; going through a pre-divided fraction would move
/// some boundaries by one ulp.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DutyCycle(f64);

impl DutyCycle {
    pub const ALWAYS_ON: DutyCycle = DutyCycle(100.0);

    /// Build from a percentage in `[0, 100]`.
    pub fn from_percent(percent: f64) -> Result<Self, CoreError> {
        if !percent.is_finite() {
            return Err(CoreError::NonFinite {
                what: "duty cycle percent",
                value: percent,
            });
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(CoreError::InvalidArg {
                what: "duty cycle percent must be within 0..=100",
            });
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Length of the energized part of a cycle, in the same unit as `period`.
    pub fn on_span(self, period: f64) -> f64 {
        period * self.0 / 100.0
    }
}

impl fmt::Display for DutyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
