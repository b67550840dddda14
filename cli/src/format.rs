//! Human-readable number formatting for report output
//!
//! Matches the display conventions of the interactive calculator:
//! large counts compact to B/M/K, dollar amounts round to whole dollars
//! with thousands separators.

/// Group an integer's digits with commas
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Compact a count: 1.25B, 4.17M, 3.5K, or comma-grouped below a thousand
pub fn compact(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{:.2}B", num / 1_000_000_000.0)
    } else if num >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else if num.fract() == 0.0 {
        group_thousands(num as i64)
    } else {
        format!("{:.2}", num)
    }
}

/// Whole-dollar USD amount with thousands separators
pub fn usd(num: f64) -> String {
    let rounded = num.round() as i64;
    if rounded < 0 {
        format!("-${}", group_thousands(-rounded))
    } else {
        format!("${}", group_thousands(rounded))
    }
}
