//! Display formatting for currency, percentages and payback years

/// Label used for any indicator without a value
pub const UNDEFINED_LABEL: &str = "Undefined";

/// Whole pesos with thousand separators, e.g. `$4,201,058,438 COP`
pub fn format_cop(amount: f64) -> String {
    let sign = if amount < 0.0 && amount.round() != 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", amount.abs());
    format!("${}{} COP", sign, group_thousands(&digits))
}

/// Percentage with two decimals, e.g. `16.30%`
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => UNDEFINED_LABEL.to_string(),
    }
}

/// Payback year, or an explicit "not reached" label naming the horizon
pub fn format_payback(year: Option<u32>, lifetime_years: u32) -> String {
    match year {
        Some(1) => "1 year".to_string(),
        Some(y) => format!("{} years", y),
        None => format!("Not reached within {} years", lifetime_years),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
