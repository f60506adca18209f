use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка одного поля формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Набор ошибок валидации формы (для подсветки полей)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Первое сообщение для поля (для inline-подсказки под input)
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.for_field(field).is_some()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

/// Ошибки контроллера формы
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Form is not open")]
    NotOpen,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Record {0} no longer exists")]
    TargetMissing(String),
}

/// Ошибки операций над коллекцией
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Record {0} not found")]
    NotFound(String),

    #[error("Record {0} already exists")]
    DuplicateId(String),

    #[error("Collection changed: expected version {expected}, found {actual}")]
    StaleVersion { expected: u64, actual: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_field_returns_first_message() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::new("name", "Name is required"));
        errors.push(ValidationError::new("name", "second"));
        errors.push(ValidationError::new("email", "Invalid email"));

        assert_eq!(errors.for_field("name"), Some("Name is required"));
        assert!(errors.has("email"));
        assert!(!errors.has("role"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_display_joins_messages() {
        let errors: ValidationErrors = ValidationError::new("price", "Must be a number").into();
        assert_eq!(errors.to_string(), "price: Must be a number");
        let form_error = FormError::from(errors);
        assert_eq!(form_error.to_string(), "Validation failed: price: Must be a number");
    }
}
