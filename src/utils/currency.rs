use rust_decimal::{Decimal, RoundingStrategy};

fn two_places(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// `$` followed by the amount with exactly two decimals, e.g. `$40000.00`.
pub fn format_plain(amount: Decimal) -> String {
    format!("${}", two_places(amount))
}

/// Same as [`format_plain`] but groups the integer part in thousands,
/// e.g. `$40,000.00`.
pub fn format_grouped(amount: Decimal) -> String {
    let digits = two_places(amount);
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, fraction)
}
