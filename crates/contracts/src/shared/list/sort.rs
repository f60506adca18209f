use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю (стабильно: равные записи
/// сохраняют исходный порядок)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Сравнение строк без учета регистра
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сравнение денежных сумм
pub fn cmp_amount(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Текущая сортировка таблицы; `field == None` - исходный порядок коллекции
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<String>,
    pub ascending: bool,
}

impl SortState {
    /// Клик по заголовку: тот же столбец меняет направление, новый - сортирует по возрастанию
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field.to_string());
            self.ascending = true;
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    pub fn apply<T: Sortable>(&self, items: &mut [T]) {
        if let Some(field) = &self.field {
            sort_list(items, field, self.ascending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, u32);

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => cmp_text(self.0, other.0),
            }
        }
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let mut items = vec![Item("b", 1), Item("a", 2), Item("c", 1)];
        sort_list(&mut items, "n", true);
        assert_eq!(items, vec![Item("b", 1), Item("c", 1), Item("a", 2)]);

        sort_list(&mut items, "n", false);
        assert_eq!(items, vec![Item("a", 2), Item("b", 1), Item("c", 1)]);
    }

    #[test]
    fn test_text_compare_ignores_case() {
        let mut items = vec![Item("beta", 0), Item("Alpha", 0)];
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].0, "Alpha");
        assert_eq!(cmp_amount(1.0, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_sort_state_toggle() {
        let mut state = SortState::default();
        let mut items = vec![Item("b", 2), Item("a", 1)];
        state.apply(&mut items);
        assert_eq!(items[0], Item("b", 2));

        state.toggle("n");
        assert!(state.is_sorted_by("n") && state.ascending);
        state.apply(&mut items);
        assert_eq!(items[0], Item("a", 1));

        state.toggle("n");
        assert!(!state.ascending);
        state.toggle("name");
        assert!(state.is_sorted_by("name") && state.ascending);
    }
}
