/// Default decimals shown for chain amounts
pub const DEFAULT_FRACTION_DIGITS: usize = 3;

/// Format with thousands separators and a fixed number of decimals,
/// optionally followed by a suffix: `1234.5678, 3, "SP"` -> `"1,234.568 SP"`.
pub fn format_amount(value: f64, fraction_digits: usize, suffix: Option<&str>) -> String {
    let fixed = format!("{:.*}", fraction_digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    if let Some(suffix) = suffix {
        out.push(' ');
        out.push_str(suffix);
    }
    out
}

/// `format_amount` with the default three decimals
pub fn format_asset_amount(value: f64, suffix: &str) -> String {
    format_amount(value, DEFAULT_FRACTION_DIGITS, Some(suffix))
}
