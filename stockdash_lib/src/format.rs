//! Field formatting for metric cards and statistic blocks.
//!
//! Every formatter takes an `Option` and matches on presence before any
//! numeric formatting happens, so a missing value renders as [`NOT_AVAILABLE`]
//! and formatting itself can never fail.

/// Placeholder shown for any field the provider did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// How a numeric field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    /// `$189.50`
    Currency,
    /// `$2,500,000,000`, rounded to a whole amount.
    CurrencyWhole,
    /// Fraction shown as a percentage: `0.0123` -> `1.23%`.
    Percent,
    /// Plain two-decimal number: `1.29`.
    Ratio,
}

/// Formats an optional number according to `format`.
pub fn format_number(value: Option<f64>, format: FieldFormat) -> String {
    match value {
        Some(v) if v.is_finite() => match format {
            FieldFormat::Currency => currency(v),
            FieldFormat::CurrencyWhole => currency_whole(v),
            FieldFormat::Percent => format!("{}%", fixed_two(v * 100.0)),
            FieldFormat::Ratio => fixed_two(v),
        },
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Formats an optional category string. Blank strings count as missing.
pub fn format_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Two decimals; values that round to zero carry no sign.
fn fixed_two(v: f64) -> String {
    let digits = format!("{:.2}", v);
    if digits == "-0.00" {
        "0.00".to_string()
    } else {
        digits
    }
}

fn currency(v: f64) -> String {
    let digits = format!("{:.2}", v.abs());
    if v < 0.0 && digits != "0.00" {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

fn currency_whole(v: f64) -> String {
    let rounded = v.round();
    let grouped = group_thousands(rounded.abs());
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Renders a non-negative whole number with comma thousands separators.
pub fn group_thousands(v: f64) -> String {
    let digits = format!("{:.0}", v);
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
