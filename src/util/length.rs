#[allow(unused_imports)]
use crate::core::prelude::*;

use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    fmt::{Display, Formatter},
    ops::{Add, Div, Mul, Sub},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    #[default]
    Meter,
    Decameter,
    Hectometer,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 13] = [
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Decimeter,
        LengthUnit::Meter,
        LengthUnit::Decameter,
        LengthUnit::Hectometer,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// How many meters one of this unit is.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Nanometer => 1e-9,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Decimeter => 1e-1,
            LengthUnit::Meter => 1.0,
            LengthUnit::Decameter => 1e1,
            LengthUnit::Hectometer => 1e2,
            LengthUnit::Kilometer => 1e3,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Decimeter => "dm",
            LengthUnit::Meter => "m",
            LengthUnit::Decameter => "dam",
            LengthUnit::Hectometer => "hm",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nanometer",
            LengthUnit::Micrometer => "micrometer",
            LengthUnit::Millimeter => "millimeter",
            LengthUnit::Centimeter => "centimeter",
            LengthUnit::Decimeter => "decimeter",
            LengthUnit::Meter => "meter",
            LengthUnit::Decameter => "decameter",
            LengthUnit::Hectometer => "hectometer",
            LengthUnit::Kilometer => "kilometer",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "foot",
            LengthUnit::Yard => "yard",
            LengthUnit::Mile => "mile",
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A distance tagged with its unit.
///
/// Comparisons between different units go through meters:
/// ```
/// use qmaths::core::prelude::*;
///
/// assert_eq!(Length::kilometers(1.5), Length::meters(1500.0));
/// assert!(Length::feet(3.0) < Length::meters(1.0));
/// ```
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn nanometers(value: f64) -> Self {
        Self::new(value, LengthUnit::Nanometer)
    }
    pub fn micrometers(value: f64) -> Self {
        Self::new(value, LengthUnit::Micrometer)
    }
    pub fn millimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Millimeter)
    }
    pub fn centimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Centimeter)
    }
    pub fn decimeters(value: f64) -> Self {
        Self::new(value, LengthUnit::Decimeter)
    }
    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::Meter)
    }
    pub fn decameters(value: f64) -> Self {
        Self::new(value, LengthUnit::Decameter)
    }
    pub fn hectometers(value: f64) -> Self {
        Self::new(value, LengthUnit::Hectometer)
    }
    pub fn kilometers(value: f64) -> Self {
        Self::new(value, LengthUnit::Kilometer)
    }
    pub fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inch)
    }
    pub fn feet(value: f64) -> Self {
        Self::new(value, LengthUnit::Foot)
    }
    pub fn yards(value: f64) -> Self {
        Self::new(value, LengthUnit::Yard)
    }
    pub fn miles(value: f64) -> Self {
        Self::new(value, LengthUnit::Mile)
    }

    pub fn in_meters(&self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }
    pub fn value_in(&self, unit: LengthUnit) -> f64 {
        if unit == self.unit {
            self.value
        } else {
            self.in_meters() / unit.meters_per_unit()
        }
    }
    /// The same distance expressed in another unit.
    #[must_use]
    pub fn to(&self, unit: LengthUnit) -> Self {
        Self::new(self.value_in(unit), unit)
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = (self.in_meters(), other.in_meters());
        (lhs - rhs).abs() <= LOW_TOLERANCE * lhs.abs().max(rhs.abs())
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.in_meters().partial_cmp(&other.in_meters())
        }
    }
}

impl Add<Length> for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Self::Output {
        Length::new(self.value + rhs.value_in(self.unit), self.unit)
    }
}
impl Sub<Length> for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Self::Output {
        Length::new(self.value - rhs.value_in(self.unit), self.unit)
    }
}
impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Self::Output {
        Length::new(self.value * rhs, self.unit)
    }
}
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Self::Output {
        rhs * self
    }
}
impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Self::Output {
        Length::new(self.value / rhs, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meters_to_kilometers() {
        let km = Length::meters(2.0).to(LengthUnit::Kilometer);
        assert_eq!(km.unit, LengthUnit::Kilometer);
        assert_abs_diff_eq!(km.value, 0.002, epsilon = 0.001);
        assert_abs_diff_eq!(Length::meters(2.0).value_in(LengthUnit::Kilometer), 0.002);
    }

    #[test]
    fn imperial_units() {
        assert_abs_diff_eq!(Length::feet(1.0).value_in(LengthUnit::Inch), 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Length::yards(1.0).value_in(LengthUnit::Foot), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Length::miles(1.0).value_in(LengthUnit::Yard), 1760.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Length::inches(1.0).value_in(LengthUnit::Centimeter), 2.54, epsilon = 1e-12);
    }

    #[test]
    fn round_trip_through_every_unit() {
        let original = Length::meters(123.456);
        for unit in LengthUnit::ALL {
            let converted = original.to(unit);
            assert_eq!(converted, original);
            assert_abs_diff_eq!(converted.to(LengthUnit::Meter).value, 123.456, epsilon = 1e-9);
        }
    }

    #[test]
    fn arithmetic_keeps_lhs_unit() {
        let sum = Length::meters(1.0) + Length::centimeters(50.0);
        assert_eq!(sum.unit, LengthUnit::Meter);
        assert_abs_diff_eq!(sum.value, 1.5, epsilon = 1e-12);
        let diff = Length::kilometers(1.0) - Length::meters(250.0);
        assert_eq!(diff.unit, LengthUnit::Kilometer);
        assert_abs_diff_eq!(diff.value, 0.75);
        assert_eq!(Length::millimeters(4.0) * 2.0, Length::millimeters(8.0));
        assert_eq!(2.0 * Length::millimeters(4.0), Length::centimeters(0.8));
        assert_eq!(Length::miles(3.0) / 3.0, Length::miles(1.0));
    }

    #[test]
    fn comparisons_across_units() {
        assert_eq!(Length::centimeters(100.0), Length::meters(1.0));
        assert_ne!(Length::centimeters(101.0), Length::meters(1.0));
        assert!(Length::inches(39.0) < Length::meters(1.0));
        assert!(Length::yards(1.1) > Length::meters(1.0));
        assert!(Length::nanometers(1e9) <= Length::meters(1.0));
    }

    #[test]
    fn tolerance_is_relative_at_small_scales() {
        assert_ne!(Length::nanometers(1.0), Length::nanometers(999.0));
        assert_ne!(Length::micrometers(1.0), Length::micrometers(1.9));
        assert_ne!(Length::meters(0.0), Length::nanometers(500.0));
        assert_eq!(Length::nanometers(1500.0), Length::micrometers(1.5));
        assert_eq!(Length::meters(0.0), Length::nanometers(0.0));
        assert!(Length::nanometers(1.0) < Length::nanometers(999.0));
        assert!(Length::micrometers(2.0) > Length::nanometers(1999.0));
    }

    #[test]
    fn display() {
        assert_eq!(Length::meters(2.0).to_string(), "2 m");
        assert_eq!(Length::kilometers(0.5).to_string(), "0.5 km");
        assert_eq!(LengthUnit::Foot.to_string(), "ft");
        assert_eq!(LengthUnit::Foot.name(), "foot");
        assert_eq!(LengthUnit::default(), LengthUnit::Meter);
    }

    #[test]
    fn serde_round_trip() {
        let length = Length::yards(12.5);
        let json = serde_json::to_string(&length).unwrap();
        assert_eq!(json, r#"{"value":12.5,"unit":"Yard"}"#);
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit, LengthUnit::Yard);
        assert_abs_diff_eq!(back.value, 12.5);
    }
}
