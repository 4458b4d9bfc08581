//! Number rendering for result logs.
//!
//! [`General`] prints an `f64` the way C's `%g` does at its default
//! precision: six significant digits, trailing zeros stripped, and
//! scientific notation only for very large or very small magnitudes.

use std::fmt;

/// Significant digits kept by [`General`].
pub const GENERAL_PRECISION: usize = 6;

/// Displays the wrapped value with [`GENERAL_PRECISION`] significant digits.
///
/// ```
/// use celldevs_core::General;
///
/// assert_eq!(General(0.030000000000000027).to_string(), "0.03");
/// assert_eq!(General(100.0).to_string(), "100");
/// assert_eq!(General(1234567.0).to_string(), "1.23457e+06");
/// assert_eq!(General(0.00001).to_string(), "1e-05");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct General(pub f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }

        // The decimal exponent after rounding decides the notation.
        let sci = format!("{:.*e}", GENERAL_PRECISION - 1, v);
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        if exp < -4 || exp >= GENERAL_PRECISION as i32 {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
        } else {
            let decimals = (GENERAL_PRECISION as i32 - 1 - exp) as usize;
            let fixed = format!("{v:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Strip trailing zeros, and a then-trailing point, from a decimal.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
