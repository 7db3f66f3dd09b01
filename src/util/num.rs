use std::iter;

/// Number of decimals used for floating-point results unless configured.
pub const DEFAULT_PRECISION: usize = 5;

/// Significant digits kept before rounding to the requested decimals.
const SIGNIFICANT_DIGITS: usize = 15;

/// Renders a double with a fixed number of decimals.
///
/// The value is first reduced to 15 significant digits, then rounded to
/// `precision` decimals with halves going away from zero. `NaN` is written as
/// `NaN` and infinities as `∞` and `-∞`.
///
/// ## Parameters
/// - `value`: The value to render.
/// - `precision`: Digits after the decimal point.
///
/// ## Example
/// ```
/// use prefix_calc::util::num::format_fixed;
///
/// assert_eq!(format_fixed(1.0 / 3.0, 5), "0.33333");
/// assert_eq!(format_fixed(-20.0, 5), "-20.00000");
/// assert_eq!(format_fixed(1.0 / 64.0, 5), "0.01563");
/// assert_eq!(format_fixed(-1.0 / 64.0, 5), "-0.01563");
/// assert_eq!(format_fixed(2.5, 0), "3");
/// assert_eq!(format_fixed(f64::NEG_INFINITY, 5), "-∞");
/// assert_eq!(format_fixed(f64::NAN, 5), "NaN");
/// ```
#[must_use]
pub fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let Some((mut digits, mut integer_len)) = decimal_digits(value.abs()) else {
        return format!("{value:.precision$}");
    };

    digits.resize(integer_len + precision + 1, 0);
    if digits.pop().is_some_and(|digit| digit >= 5) && !increment(&mut digits) {
        digits.insert(0, 1);
        integer_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == integer_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Splits a non-negative finite value into decimal digits, rounded to
/// [`SIGNIFICANT_DIGITS`], and the count of digits before the point.
///
/// Values below one get a single leading `0` integer digit followed by the
/// zeros between the point and the first significant digit.
fn decimal_digits(value: f64) -> Option<(Vec<u8>, usize)> {
    let mantissa_digits = SIGNIFICANT_DIGITS - 1;
    let scientific = format!("{value:.mantissa_digits$e}");
    let (mantissa, exponent) = scientific.split_once('e')?;
    let point = exponent.parse::<isize>().ok()? + 1;
    let significant = mantissa.bytes()
                              .filter(u8::is_ascii_digit)
                              .map(|b| b - b'0');

    match usize::try_from(point) {
        Ok(integer_len) if integer_len > 0 => {
            let mut digits: Vec<u8> = significant.collect();
            if digits.len() < integer_len {
                digits.resize(integer_len, 0);
            }
            Some((digits, integer_len))
        },
        _ => {
            let zeros = point.unsigned_abs() + 1;
            Some((iter::repeat_n(0, zeros).chain(significant).collect(), 1))
        },
    }
}

/// Adds one to the last digit, carrying leftwards. Returns `false` when the
/// carry runs past the first digit.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit < 9 {
            *digit += 1;
            return true;
        }
        *digit = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::format_fixed;

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_fixed(0.015_625, 5), "0.01563");
        assert_eq!(format_fixed(-0.015_625, 5), "-0.01563");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(-0.5, 0), "-1");
    }

    #[test]
    fn below_half_rounds_down() {
        assert_eq!(format_fixed(0.007_812_5, 5), "0.00781");
        assert_eq!(format_fixed(2.0 / 3.0, 2), "0.67");
        assert_eq!(format_fixed(0.000_001, 5), "0.00000");
    }

    #[test]
    fn carry_reaches_the_integer_part() {
        assert_eq!(format_fixed(0.999_999, 5), "1.00000");
        assert_eq!(format_fixed(-99.999_995, 5), "-100.00000");
    }

    #[test]
    fn values_are_first_reduced_to_fifteen_significant_digits() {
        // 1.0000049999999999 rounds up once cut to 15 digits.
        assert_eq!(format_fixed(1.000_004_999_999_999_9, 5), "1.00001");
        assert_eq!(format_fixed(4_294_967_294.0, 5), "4294967294.00000");
        assert_eq!(format_fixed(1e20, 1), "100000000000000000000.0");
    }

    #[test]
    fn zero_keeps_its_sign() {
        assert_eq!(format_fixed(0.0, 5), "0.00000");
        assert_eq!(format_fixed(-0.0, 5), "-0.00000");
    }
}
