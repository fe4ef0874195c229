const KILO: f64 = 1024.0;
const MEGA: f64 = 1024.0 * 1024.0;

/// Renders a number the way JavaScript's `Number.prototype.toString` does.
///
/// Integral values print without a fractional part, `-0` prints as `"0"`
/// and magnitudes outside `[1e-6, 1e21)` use exponent notation with an
/// explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let rendered = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return rendered.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// JavaScript `parseInt` without an explicit radix.
///
/// Leading whitespace and a sign are accepted, `0x`/`0X` switches to hex,
/// and parsing stops at the first character that is not a digit. The
/// result is a JavaScript Number, so long digit runs lose precision
/// instead of overflowing. Returns `None` where JavaScript would produce
/// `NaN`.
pub fn parse_int(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let digits = &digits[..end];
    let magnitude = if radix == 10 {
        digits.parse::<f64>().ok()?
    } else {
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit))
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Rounds `value` to `digits` decimal places, halves away from zero.
///
/// This multiplies, rounds and divides, so binary representation shows
/// through: `round(1.005, 2)` is `1.0` because `1.005 * 100` is
/// `100.49999999999999`.
pub fn round(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Converts a size in bytes to a short size-in-bits label like `"1.5K"`.
///
/// The input is multiplied by 8 before picking the `M`, `K` or `B` unit.
pub fn size_to_text(size_in_bytes: f64) -> String {
    let bits = size_in_bytes * 8.0;
    let (value, unit) = if bits >= MEGA {
        (bits / MEGA, 'M')
    } else if bits >= KILO {
        (bits / KILO, 'K')
    } else {
        (bits, 'B')
    };

    let whole = value.floor();
    let value = if (value - whole) * 10.0 < whole {
        whole
    } else {
        round(value, 3)
    };

    format!("{}{unit}", format_number(value))
}
