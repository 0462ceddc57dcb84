//! en-US dollar formatting for dashboard figures.

/// `1234.5` → `"$1,234.50"`, `-12` → `"-$12.00"`.
pub fn format_usd(amount: f64) -> String {
    format_with_cents(amount, 2)
}

/// `1234.5` → `"$1,235"`. Used by register tables.
pub fn format_usd_whole(amount: f64) -> String {
    format_with_cents(amount, 0)
}

fn format_with_cents(amount: f64, decimals: u32) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let scale = 10u64.pow(decimals) as f64;
    let scaled = (amount.abs() * scale).round();
    let negative = amount < 0.0 && scaled > 0.0;
    // Beyond u64 range the figure is meaningless for display anyway.
    let scaled = scaled.min(u64::MAX as f64) as u64;
    let whole = scaled / 10u64.pow(decimals);
    let frac = scaled % 10u64.pow(decimals);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(whole));
    if decimals > 0 {
        out.push('.');
        out.push_str(&format!("{frac:0width$}", width = decimals as usize));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
