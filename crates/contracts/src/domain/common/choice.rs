/// Значение из фиксированного перечисления (статус, роль, приоритет...)
///
/// `label()` совпадает со значением, которое видит пользователь и которое
/// используется в категориальных фильтрах.
pub trait Choice: Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {
    /// Все допустимые значения в порядке отображения
    fn all() -> &'static [Self];

    /// Отображаемое значение
    fn label(&self) -> &'static str;

    /// Найти значение по отображаемой строке
    fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.label() == s)
    }
}

#[macro_export]
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::domain::common::Choice for $name {
            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::common::Choice::label(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Choice;

    crate::choice_enum!(Sample {
        First => "First",
        InProgress => "In Progress",
    });

    #[test]
    fn test_labels_and_parse() {
        assert_eq!(Sample::InProgress.label(), "In Progress");
        assert_eq!(Sample::parse("In Progress"), Some(Sample::InProgress));
        assert_eq!(Sample::parse("in progress"), None);
        assert_eq!(Sample::all().len(), 2);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Sample::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
