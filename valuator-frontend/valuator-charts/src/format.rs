/// Largest value below which every integer-valued f64 is exact.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Compact pt-BR value label: `1500000` -> `1,5M`, `2500` -> `2,5K`, `42` -> `42`.
pub fn fmt_compact_br(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{}M", decimal_comma(&to_fixed(value / 1_000_000.0, 1)))
    } else if magnitude >= 1_000.0 {
        format!("{}K", decimal_comma(&to_fixed(value / 1_000.0, 1)))
    } else {
        decimal_comma(&to_fixed(value, 0))
    }
}

fn decimal_comma(text: &str) -> String {
    text.replacen('.', ",", 1)
}

/// Fixed-point formatting that rounds exact ties away from zero.
///
/// `format!("{:.1}", 0.25)` rounds half to even and gives `0.2`; page labels expect `0.3`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    // a tie at `digits` places is an odd multiple of 2^-(digits + 1)
    let doubled = magnitude * (1u64 << (digits + 1)) as f64;
    let text = if doubled < MAX_EXACT && doubled.fract() == 0.0 && doubled % 2.0 == 1.0 {
        let scaled = (magnitude * 10f64.powi(digits as i32)).ceil() as u64;
        let unit = 10u64.pow(digits as u32);
        if digits == 0 {
            scaled.to_string()
        } else {
            format!("{}.{:0width$}", scaled / unit, scaled % unit, width = digits)
        }
    } else {
        format!("{magnitude:.digits$}")
    };
    if value < 0.0 {
        format!("-{text}")
    } else {
        text
    }
}

/// Shortest round-trip rendering used for attribute values. Negative zero prints as `0`.
pub fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_values() {
        assert_eq!(fmt_compact_br(1_500_000.0), "1,5M");
        assert_eq!(fmt_compact_br(2_500.0), "2,5K");
        assert_eq!(fmt_compact_br(42.0), "42");
        assert_eq!(fmt_compact_br(-1_200.0), "-1,2K");
        assert_eq!(fmt_compact_br(0.0), "0");
        assert_eq!(fmt_compact_br(999.4), "999");
        assert_eq!(fmt_compact_br(1_000.0), "1,0K");
        assert_eq!(fmt_compact_br(-3_000_000.0), "-3,0M");
        assert_eq!(fmt_compact_br(330.0), "330");
        assert_eq!(fmt_compact_br(165.00000000000003), "165");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(fmt_compact_br(1_250.0), "1,3K");
        assert_eq!(fmt_compact_br(-2_750_000.0), "-2,8M");
    }

    #[test]
    fn non_ties_use_the_exact_value() {
        // 0.35 is stored slightly below the midpoint
        assert_eq!(to_fixed(0.35, 1), "0.3");
        assert_eq!(to_fixed(104.04999, 1), "104.0");
        assert_eq!(to_fixed(75.0, 1), "75.0");
        assert_eq!(to_fixed(-0.04, 1), "-0.0");
    }

    #[test]
    fn attribute_numbers() {
        assert_eq!(fmt_number(45.0), "45");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(171.5), "171.5");
    }
}
