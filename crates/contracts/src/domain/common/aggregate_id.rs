use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Каждый ID выпускается из порядкового номера коллекции, поэтому
/// трейт умеет как выпускать ID из номера, так и восстанавливать номер
/// из существующего ID (нужно, чтобы счетчик стартовал после seed-данных).
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug + Send + Sync + 'static
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;

    /// Выпустить ID из порядкового номера
    fn from_sequence(n: u64) -> Self;

    /// Порядковый номер, из которого получен ID (None для чужих форматов)
    fn sequence_number(&self) -> Option<u64>;
}

/// Числовой идентификатор: `UserId(7)` <-> `"7"`
#[macro_export]
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<u64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }

            fn from_sequence(n: u64) -> Self {
                $name(n)
            }

            fn sequence_number(&self) -> Option<u64> {
                Some(self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Идентификатор с префиксом: `TicketId("TKT-001")`
#[macro_export]
macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.clone()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                let id = $name(s.trim().to_string());
                match <Self as $crate::domain::common::AggregateId>::sequence_number(&id) {
                    Some(_) => Ok(id),
                    None => Err(format!("Invalid {}: {}", stringify!($name), s)),
                }
            }

            fn from_sequence(n: u64) -> Self {
                $name(format!("{}-{:03}", $prefix, n))
            }

            fn sequence_number(&self) -> Option<u64> {
                self.0
                    .strip_prefix($prefix)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .and_then(|digits| digits.parse::<u64>().ok())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::AggregateId;

    crate::numeric_id!(SampleNumId);
    crate::prefixed_id!(SampleRef, "SMP");

    #[test]
    fn test_numeric_id_roundtrip() {
        let id = SampleNumId::from_sequence(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(SampleNumId::from_string(" 42 ").unwrap(), id);
        assert_eq!(id.sequence_number(), Some(42));
        assert!(SampleNumId::from_string("abc").is_err());
    }

    #[test]
    fn test_prefixed_id_formatting() {
        assert_eq!(SampleRef::from_sequence(4).as_str(), "SMP-004");
        assert_eq!(SampleRef::from_sequence(1234).as_str(), "SMP-1234");
        assert_eq!(SampleRef::new("SMP-017").sequence_number(), Some(17));
    }

    #[test]
    fn test_prefixed_id_foreign_format() {
        assert_eq!(SampleRef::new("INV-001").sequence_number(), None);
        assert_eq!(SampleRef::new("SMP001").sequence_number(), None);
        assert!(SampleRef::from_string("SMP-x").is_err());
        assert!(SampleRef::from_string("SMP-009").is_ok());
    }
}
