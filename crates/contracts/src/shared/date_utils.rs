use chrono::NaiveDate;

/// Текущая дата в локальном часовом поясе
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Дата в формате поля ввода: YYYY-MM-DD
pub fn to_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_input() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(to_input(date), "2024-03-05");
    }

    #[test]
    fn test_today_uses_local_date() {
        let before = chrono::Local::now().date_naive();
        let value = today();
        let after = chrono::Local::now().date_naive();
        assert!(value == before || value == after);
    }
}
