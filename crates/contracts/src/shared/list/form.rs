//! Контроллер модальной формы создания/редактирования записи.
//!
//! Состояния: `Closed`, `Create`, `Edit(id)`. Буфер формы - отдельная
//! копия полей; коллекция меняется только при успешном `submit`.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::error::{FormError, ValidationError, ValidationErrors};
use crate::shared::notifications::NotificationStore;

use super::collection::ResourceCollection;

pub type FormEntityId<F> = <<F as EntityForm>::Entity as AggregateRoot>::Id;

/// Буфер редактирования одной сущности
pub trait EntityForm: Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    type Entity: AggregateRoot;

    /// Буфер, заполненный из существующей записи
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Собрать запись из буфера.
    ///
    /// `base` - исходная запись при редактировании (из нее берутся поля,
    /// которых нет в форме); `None` при создании.
    fn into_entity(
        &self,
        id: <Self::Entity as AggregateRoot>::Id,
        base: Option<&Self::Entity>,
    ) -> Result<Self::Entity, ValidationErrors>;

    /// Проверить буфер без выпуска ID
    fn validate(&self) -> Result<(), ValidationErrors> {
        let placeholder = <Self::Entity as AggregateRoot>::Id::from_sequence(0);
        self.into_entity(placeholder, None).map(|_| ())
    }
}

/// Накопитель ошибок при разборе полей формы
#[derive(Debug, Default)]
pub struct FieldChecker {
    errors: ValidationErrors,
}

impl FieldChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
    }

    /// Обязательное текстовое поле (пробелы по краям отбрасываются)
    pub fn required(&mut self, field: &str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.fail(field, "This field is required");
        }
        value.to_string()
    }

    pub fn email(&mut self, field: &str, value: &str) -> String {
        let value = self.required(field, value);
        if !value.is_empty() {
            let valid = value
                .split_once('@')
                .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'))
                .unwrap_or(false);
            if !valid {
                self.fail(field, "Enter a valid email address");
            }
        }
        value
    }

    /// Дата в формате YYYY-MM-DD
    pub fn date(&mut self, field: &str, value: &str) -> NaiveDate {
        let value = value.trim();
        if value.is_empty() {
            self.fail(field, "This field is required");
            return NaiveDate::default();
        }
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                self.fail(field, "Enter a date as YYYY-MM-DD");
                NaiveDate::default()
            }
        }
    }

    /// Число любого типа (`u32`, `f64`...)
    pub fn number<T>(&mut self, field: &str, value: &str) -> T
    where
        T: FromStr + Default,
    {
        let value = value.trim();
        if value.is_empty() {
            self.fail(field, "This field is required");
            return T::default();
        }
        match value.parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                self.fail(field, "Must be a number");
                T::default()
            }
        }
    }

    /// Конечное неотрицательное число
    pub fn amount(&mut self, field: &str, value: &str) -> f64 {
        let before = self.errors.len();
        let n: f64 = self.number(field, value);
        if self.errors.len() == before && (!n.is_finite() || n < 0.0) {
            self.fail(field, "Must be zero or greater");
        }
        n
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Режим модального окна
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<Id> {
    Closed,
    Create,
    Edit(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController<F: EntityForm> {
    mode: FormMode<FormEntityId<F>>,
    buffer: F,
    errors: ValidationErrors,
}

impl<F: EntityForm> FormController<F> {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Closed,
            buffer: F::default(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn mode(&self) -> &FormMode<FormEntityId<F>> {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, FormMode::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn buffer(&self) -> &F {
        &self.buffer
    }

    /// Ошибки последней неудачной попытки сохранения
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Открыть пустую форму. Открытая ранее форма отбрасывается.
    pub fn open_for_create(&mut self) {
        self.mode = FormMode::Create;
        self.buffer = F::default();
        self.errors = ValidationErrors::new();
    }

    /// Открыть форму с копией записи; сама запись не меняется до сохранения
    pub fn open_for_edit(&mut self, entity: &F::Entity) {
        self.mode = FormMode::Edit(entity.id().clone());
        self.buffer = F::from_entity(entity);
        self.errors = ValidationErrors::new();
    }

    /// Изменить буфер (ввод в поле формы); в закрытом состоянии - no-op
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        if self.is_open() {
            Some(f(&mut self.buffer))
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Closed;
        self.buffer = F::default();
        self.errors = ValidationErrors::new();
    }

    /// Проверить буфер и зафиксировать его в коллекции.
    ///
    /// При ошибке валидации форма остается открытой, коллекция не меняется.
    pub fn submit(
        &mut self,
        collection: &mut ResourceCollection<F::Entity>,
        notifications: &mut NotificationStore,
    ) -> Result<FormEntityId<F>, FormError> {
        let result = match self.mode.clone() {
            FormMode::Closed => return Err(FormError::NotOpen),
            FormMode::Create => self.commit_create(collection, notifications),
            FormMode::Edit(id) => self.commit_edit(id, collection, notifications),
        };

        match result {
            Ok(id) => {
                self.cancel();
                Ok(id)
            }
            Err(FormError::Validation(errors)) => {
                log::warn!(
                    "{}: submit rejected, {} invalid field(s)",
                    <F::Entity as AggregateRoot>::full_name(),
                    errors.len()
                );
                self.errors = errors.clone();
                Err(FormError::Validation(errors))
            }
            Err(other) => Err(other),
        }
    }

    fn commit_create(
        &self,
        collection: &mut ResourceCollection<F::Entity>,
        notifications: &mut NotificationStore,
    ) -> Result<FormEntityId<F>, FormError> {
        self.buffer.validate()?;
        let entity = self.buffer.into_entity(collection.mint_id(), None)?;
        let message = entity.created_message();
        let id = collection.insert(entity).map_err(|e| {
            FormError::Validation(ValidationError::new("id", e.to_string()).into())
        })?;
        notifications.success(message);
        Ok(id)
    }

    fn commit_edit(
        &self,
        id: FormEntityId<F>,
        collection: &mut ResourceCollection<F::Entity>,
        notifications: &mut NotificationStore,
    ) -> Result<FormEntityId<F>, FormError> {
        let base = collection
            .find(&id)
            .ok_or_else(|| FormError::TargetMissing(id.as_string()))?;
        let entity = self.buffer.into_entity(id.clone(), Some(base))?;
        let message = entity.updated_message();
        collection
            .replace(entity)
            .map_err(|_| FormError::TargetMissing(id.as_string()))?;
        notifications.success(message);
        Ok(id)
    }
}

impl<F: EntityForm> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_collects_all_errors() {
        let mut check = FieldChecker::new();
        let name = check.required("name", "   ");
        let email = check.email("email", "not-an-email");
        let date = check.date("date", "2024-13-40");
        let qty: u32 = check.number("qty", "two");
        let price = check.amount("price", "-1");

        assert_eq!(name, "");
        assert_eq!(email, "not-an-email");
        assert_eq!(date, NaiveDate::default());
        assert_eq!(qty, 0);
        assert_eq!(price, -1.0);

        let errors = check.finish().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.for_field("date"), Some("Enter a date as YYYY-MM-DD"));
        assert_eq!(errors.for_field("qty"), Some("Must be a number"));
    }

    #[test]
    fn test_checker_accepts_valid_input() {
        let mut check = FieldChecker::new();
        assert_eq!(check.required("name", "  Jane "), "Jane");
        assert_eq!(check.email("email", "jane@example.com"), "jane@example.com");
        assert_eq!(
            check.date("date", "2024-05-10"),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
        );
        assert_eq!(check.amount("price", "12.5"), 12.5);
        assert!(check.finish().is_ok());
    }
}
