//! Поиск и категориальные фильтры списков.
//!
//! Результат фильтрации - подпоследовательность исходного списка:
//! порядок записей никогда не меняется (сортировка делается отдельно).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение фильтра "без ограничения"
pub const ALL: &str = "All";

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым работает текстовый поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Значение поля для категориального фильтра (None - поле не поддерживается)
    fn field_value(&self, field: &str) -> Option<String>;

    /// Проверяет, соответствует ли объект поисковому запросу (без учета регистра)
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

/// Состояние панели фильтров страницы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    /// Имя поля -> выбранное значение (или [`ALL`])
    pub filters: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_filter(field, value);
        self
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into().to_lowercase();
    }

    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(field.into(), value.into());
    }

    /// Выбранное значение фильтра (`ALL`, если фильтр не задан)
    pub fn selected(&self, field: &str) -> &str {
        self.filters.get(field).map(String::as_str).unwrap_or(ALL)
    }

    /// Сбросить поиск и все фильтры
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.filters.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.filters.values().any(|v| v != ALL)
    }

    /// Текстовый поиск И все активные фильтры
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if !item.matches_filter(&self.search_term) {
            return false;
        }
        self.filters
            .iter()
            .filter(|(_, selected)| selected.as_str() != ALL)
            .all(|(field, selected)| item.field_value(field).as_deref() == Some(selected.as_str()))
    }
}

/// Фильтрует список, сохраняя исходный порядок
pub fn filter_list<T: Searchable + Clone>(items: &[T], state: &FilterState) -> Vec<T> {
    items
        .iter()
        .filter(|item| state.matches(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        kind: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "kind" => Some(self.kind.to_string()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha", kind: "a" },
            Row { name: "beta", kind: "b" },
            Row { name: "Alphabet", kind: "b" },
        ]
    }

    #[test]
    fn test_empty_state_returns_everything_in_order() {
        assert_eq!(filter_list(&rows(), &FilterState::new()), rows());
        let all = FilterState::new().with_filter("kind", ALL);
        assert_eq!(filter_list(&rows(), &all), rows());
        assert!(!all.is_active());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let state = FilterState::new().with_search("ALPHA");
        let names: Vec<_> = filter_list(&rows(), &state).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "Alphabet"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let state = FilterState::new().with_search("alpha").with_filter("kind", "b");
        let names: Vec<_> = filter_list(&rows(), &state).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alphabet"]);
    }

    #[test]
    fn test_unknown_field_matches_nothing() {
        let state = FilterState::new().with_filter("color", "red");
        assert!(filter_list(&rows(), &state).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_subsequence() {
        let states = vec![
            FilterState::new(),
            FilterState::new().with_search("a"),
            FilterState::new().with_filter("kind", "b"),
            FilterState::new().with_search("zzz"),
        ];
        let source = rows();
        for state in states {
            let once = filter_list(&source, &state);
            let twice = filter_list(&once, &state);
            assert_eq!(once, twice);

            let mut cursor = source.iter();
            for item in &once {
                assert!(cursor.any(|s| s == item), "result is not a subsequence");
            }
        }
    }

    #[test]
    fn test_clear_resets_state() {
        let mut state = FilterState::new().with_search("x").with_filter("kind", "a");
        assert!(state.is_active());
        assert_eq!(state.selected("kind"), "a");
        state.clear();
        assert_eq!(state, FilterState::new());
        assert_eq!(state.selected("kind"), ALL);
    }
}
