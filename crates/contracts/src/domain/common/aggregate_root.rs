use super::{AggregateId, Choice};

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех сущностей панели
pub trait AggregateRoot: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Перечисление статусов сущности
    type Status: Choice;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &Self::Id;

    /// Текущий статус
    fn status(&self) -> Self::Status;

    /// Установить статус (остальные поля не меняются)
    fn set_status(&mut self, status: Self::Status);

    /// Человекочитаемое имя записи для уведомлений (ФИО, заголовок, номер)
    fn label(&self) -> String;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "users")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "User")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Users")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_users")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    fn created_message(&self) -> String {
        format!("{} {} created successfully", Self::element_name(), self.label())
    }

    fn updated_message(&self) -> String {
        format!("{} {} updated successfully", Self::element_name(), self.label())
    }

    fn deleted_message(&self) -> String {
        format!("{} {} deleted successfully", Self::element_name(), self.label())
    }

    fn status_message(&self) -> String {
        format!("{} {} is now {}", Self::element_name(), self.label(), self.status().label())
    }
}

/// Быстрое действие над статусом из строки списка
/// (активировать пользователя, закрыть тикет и т.п.)
pub trait QuickAction: AggregateRoot {
    /// Статус после нажатия кнопки
    fn next_status(&self) -> Self::Status;

    /// Подпись кнопки для текущего состояния
    fn action_label(&self) -> &'static str;
}
