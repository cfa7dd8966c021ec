//! Currency display formatting in lakh units

const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Format a raw rupee amount for display.
///
/// Amounts of one lakh or more are shown in lakhs with one decimal place;
/// smaller amounts are shown as whole rupees. Non-finite values fall back to
/// their plain string form, which upstream validation makes unreachable in
/// practice.
pub fn format_lakh(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let lakhs = value / RUPEES_PER_LAKH;
    if lakhs >= 1.0 {
        format!("\u{20b9} {} Lakh", group_decimal(lakhs))
    } else {
        format!("\u{20b9} {}", group_integer(value.round() as i64))
    }
}

/// One decimal place with Western thousands grouping, e.g. 1234.56 -> "1,234.6".
fn group_decimal(value: f64) -> String {
    let rendered = format!("{:.1}", value);
    match rendered.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}.{}", group_digits(int_part), frac_part)
        }
        None => group_digits(&rendered),
    }
}

fn group_integer(value: i64) -> String {
    group_digits(&value.to_string())
}

/// Insert a comma every three digits from the right, preserving a leading sign.
fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}
