use valuator_charts::format::to_fixed;

/// pt-BR amount with thousands separators: `1234567.891` -> `1.234.567,89`.
pub(crate) fn fmt_amount(value: f64) -> String {
    let fixed = to_fixed(value, 2);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped},{cents}")
}

/// Fraction as a percentage with one decimal: `0.1234` -> `12,3%`.
pub(crate) fn fmt_pct(value: f64) -> String {
    format!("{}%", to_fixed(value * 100.0, 1).replace('.', ","))
}
