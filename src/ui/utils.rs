use crate::{
    domain::{Currency, halving::SATS_PER_BTC},
    ui::UI_TEXT,
};

/// Inserts `,` every three digits counting from the right of a plain digit string.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Currency-style amount, e.g. `$94,123.45`.
pub fn format_fiat(value: f64, currency: Currency) -> String {
    if !value.is_finite() {
        return UI_TEXT.label_unknown.clone();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, currency.symbol(), group_digits(int_part), frac_part)
}

/// Axis labels: whole units only.
pub fn format_fiat_compact(value: f64, currency: Currency) -> String {
    if !value.is_finite() || value < 0.0 {
        return String::new();
    }
    format!("{}{}", currency.symbol(), format_thousands(value.round() as u64))
}

pub fn format_sats(sats: Option<u64>) -> String {
    match sats {
        Some(s) => format_thousands(s),
        None => UI_TEXT.label_unknown.clone(),
    }
}

pub fn format_progress(pct: f64) -> String {
    format!("{:.2} %", pct)
}

/// Satoshis as BTC without trailing zeros, e.g. `3.125 BTC`.
pub fn format_btc(sats: u64) -> String {
    let whole = sats / SATS_PER_BTC;
    let frac = sats % SATS_PER_BTC;
    if frac == 0 {
        return format!("{} BTC", whole);
    }
    let frac = format!("{:08}", frac);
    format!("{}.{} BTC", whole, frac.trim_end_matches('0'))
}

pub fn format_change_pct(pct: f64) -> String {
    format!("{:+.2}%", pct)
}
