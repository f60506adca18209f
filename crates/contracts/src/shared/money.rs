//! Форматирование денежных сумм для таблиц и карточек

/// Сумма с разделителями тысяч и двумя знаками: "1,234.50"
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{:02}", sign, grouped, cents % 100)
}

/// Сумма с кодом валюты: "USD 1,500.00"
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(25.0), "25.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(-850.0), "-850.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(800.0, "KES"), "KES 800.00");
    }
}
