//! Czech koruna amount formatting.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format an amount as `1 234 567,50 Kč` (space-grouped thousands, comma
/// decimals). Amounts are rounded to whole hellers.
#[allow(clippy::cast_possible_truncation)]
pub fn format_czk(amount: f64) -> String {
    let negative = amount < 0.0;
    let hellers = (amount.abs() * 100.0).round() as i64;
    let whole = hellers / 100;
    let fraction = hellers % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let sign = if negative && hellers > 0 { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02} Kč")
}
