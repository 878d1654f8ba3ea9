#[allow(unused_imports)]
use crate::core::prelude::*;

use serde::{Deserialize, Serialize};

/// The brackets placed around a formatted vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wrap {
    None,
    #[default]
    Round,
    Square,
    Curly,
}

impl Wrap {
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Wrap::None => ("", ""),
            Wrap::Round => ("( ", " )"),
            Wrap::Square => ("[ ", " ]"),
            Wrap::Curly => ("{ ", " }"),
        }
    }
}

/// Whether each component is prefixed with its name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentLabels {
    #[default]
    Hidden,
    /// `x: 1`
    WithColon,
    /// `x = 1`
    WithEqual,
}

impl ComponentLabels {
    fn apply(self, label: &str, value: &str) -> String {
        match self {
            ComponentLabels::Hidden => value.to_string(),
            ComponentLabels::WithColon => format!("{label}: {value}"),
            ComponentLabels::WithEqual => format!("{label} = {value}"),
        }
    }
}

/// Controls how [`Vector2::to_string_with`] and [`Vector3::to_string_with`] render a vector.
///
/// The default renders `Vector2::new(1.5, 2.0)` as `( 1.5, 2 )`.
///
/// ```
/// use qmaths::core::prelude::*;
///
/// let format = VectorFormat::default()
///     .with_wrap(Wrap::Square)
///     .with_labels(ComponentLabels::WithColon)
///     .with_precision(2)
///     .with_fixed(true);
/// assert_eq!(Vector2::new(1.0, 0.25).to_string_with(&format), "[ x: 1.00, y: 0.25 ]");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorFormat {
    pub wrap: Wrap,
    pub separator: char,
    pub labels: ComponentLabels,
    /// Significant digits in general notation, or decimals when `fixed` is set.
    /// Ignored for integer components.
    pub precision: usize,
    pub fixed: bool,
}

impl Default for VectorFormat {
    fn default() -> Self {
        Self {
            wrap: Wrap::Round,
            separator: ',',
            labels: ComponentLabels::Hidden,
            precision: 6,
            fixed: false,
        }
    }
}

impl VectorFormat {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
    #[must_use]
    pub fn with_labels(mut self, labels: ComponentLabels) -> Self {
        self.labels = labels;
        self
    }
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
    #[must_use]
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn format_components<S: Scalar>(&self, components: &[(&str, S)]) -> String {
        let (open, close) = self.wrap.delimiters();
        let body = components
            .iter()
            .map(|(label, value)| {
                self.labels
                    .apply(label, &value.format_with(self.precision, self.fixed))
            })
            .join(&format!("{} ", self.separator));
        format!("{open}{body}{close}")
    }
}

pub(crate) fn format_float(value: f64, precision: usize, fixed: bool) -> String {
    if fixed {
        format!("{value:.precision$}")
    } else {
        format_general(value, precision)
    }
}

// `precision` significant digits with trailing zeros dropped; scientific notation for very small
// or large magnitudes.
fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);
    // The exponent is taken after rounding, so 999999.7 at six digits becomes 1e6.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exp.parse().unwrap_or(0);
    let significant = i64::try_from(precision).unwrap_or(i64::MAX);
    if exponent < -5 || exponent >= significant {
        format!("{}e{exp}", trim_fraction(mantissa))
    } else {
        let decimals = usize::try_from(significant - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format() {
        assert_eq!(Vector2::new(1, 2).to_string_with(&VectorFormat::default()), "( 1, 2 )");
        assert_eq!(Vector3::new(1.5, 2.0, -0.25).to_string(), "( 1.5, 2, -0.25 )");
    }

    #[test]
    fn wraps_and_labels() {
        let v = Vector2::new(1, 2);
        let square = VectorFormat::new()
            .with_wrap(Wrap::Square)
            .with_labels(ComponentLabels::WithColon);
        assert_eq!(v.to_string_with(&square), "[ x: 1, y: 2 ]");

        let curly = VectorFormat::new()
            .with_wrap(Wrap::Curly)
            .with_labels(ComponentLabels::WithEqual)
            .with_separator(';');
        assert_eq!(Vector3::new(1, 2, 3).to_string_with(&curly), "{ x = 1; y = 2; z = 3 }");

        let bare = VectorFormat::new().with_wrap(Wrap::None);
        assert_eq!(v.to_string_with(&bare), "1, 2");
    }

    #[test]
    fn fixed_notation() {
        let format = VectorFormat::new().with_precision(2).with_fixed(true);
        assert_eq!(Vector2::new(1.0, 2.5).to_string_with(&format), "( 1.00, 2.50 )");
        assert_eq!(Vector2::new(1.0_f32, -0.333).to_string_with(&format), "( 1.00, -0.33 )");
    }

    #[test]
    fn integers_ignore_precision() {
        let format = VectorFormat::new().with_precision(1).with_fixed(true);
        assert_eq!(Vector2::new(12_345, -6).to_string_with(&format), "( 12345, -6 )");
        assert_eq!(Vector2::new(12_345_u64, 6).to_string(), "( 12345, 6 )");
    }

    #[test]
    fn general_notation() {
        assert_eq!(format_float(std::f64::consts::PI, 3, false), "3.14");
        assert_eq!(format_float(1_234_567.0, 6, false), "1.23457e6");
        assert_eq!(format_float(123_456.0, 6, false), "123456");
        assert_eq!(format_float(0.0001, 6, false), "0.0001");
        assert_eq!(format_float(0.000_001, 6, false), "1e-6");
        assert_eq!(format_float(-2.5, 6, false), "-2.5");
        assert_eq!(format_float(0.0, 6, false), "0");
        assert_eq!(format_float(f64::INFINITY, 6, false), "inf");
    }

    #[test]
    fn rounding_into_next_decade_switches_notation() {
        assert_eq!(format_float(999_999.7, 6, false), "1e6");
        assert_eq!(format_float(-999_999.7, 6, false), "-1e6");
        assert_eq!(format_float(9.999_999_9, 6, false), "10");
        assert_eq!(format_float(99.96, 3, false), "100");
        assert_eq!(format_float(999.6, 3, false), "1e3");
    }

    #[test]
    fn format_round_trips_through_serde() {
        let format = VectorFormat::new().with_wrap(Wrap::Curly).with_separator('|');
        let json = serde_json::to_string(&format).unwrap();
        let back: VectorFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, format);
    }
}
