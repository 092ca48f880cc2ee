/// Format an amount with thousands separators and two decimals, e.g. `97,250.50`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let rounded = format!("{:.2}", amount.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

/// Format a value with an explicit sign and two decimals, e.g. `+2.35` or `-0.40`.
pub fn format_signed(value: f64) -> String {
    format!("{:+.2}", value)
}
