//! Number formatting for messages and the confirmation view (en-US style).

const MIB: u64 = 1024 * 1024;

/// Formats `value` with comma thousands separators and a fixed number of
/// decimal places.
pub fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// US dollar amount with two decimals, e.g. `$30,000.00`.
pub fn format_usd(amount: f64) -> String {
    let digits = grouped(amount, 2);
    match digits.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", digits),
    }
}

/// Limit as shown in validation messages: `20,000`, or `20,000.50` when the
/// limit has a fractional part.
pub fn format_limit(value: &f64) -> String {
    if value.fract() == 0.0 {
        grouped(*value, 0)
    } else {
        grouped(*value, 2)
    }
}

/// File size in mebibytes with two decimals, e.g. `2.00 MB`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB as f64)
}

/// Size limit as shown in validation messages, e.g. `5MB`.
pub fn format_size_limit(bytes: &u64) -> String {
    if *bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{:.2}MB", *bytes as f64 / MIB as f64)
    }
}
