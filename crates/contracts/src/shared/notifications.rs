//! Хранилище уведомлений панели администратора.
//!
//! Список всегда упорядочен от новых к старым: новая запись вставляется в
//! начало, поэтому `notifications()[0]` - самое свежее уведомление.

use serde::{Deserialize, Serialize};

/// Тип уведомления (определяет иконку и цвет тоста)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Запись уведомления
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    /// Момент создания, Unix epoch в миллисекундах
    pub timestamp: i64,
    pub read: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationStore {
    items: Vec<Notification>,
    next_id: u64,
    max_retained: Option<usize>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище, которое держит только `max` самых свежих записей
    pub fn with_retention(max: Option<usize>) -> Self {
        Self {
            max_retained: max.filter(|m| *m > 0),
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Количество непрочитанных; считается по текущему списку при каждом вызове
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Непрочитанные уведомления, от новых к старым
    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(|n| !n.read)
    }

    pub fn add(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.add_at(kind, message, chrono::Utc::now().timestamp_millis())
    }

    pub fn add_at(&mut self, kind: NotificationKind, message: impl Into<String>, timestamp: i64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let message = message.into();
        log::debug!("notification #{} [{}]: {}", id, kind, message);

        self.items.insert(
            0,
            Notification {
                id,
                kind,
                message,
                timestamp,
                read: false,
            },
        );

        if let Some(max) = self.max_retained {
            self.items.truncate(max);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationKind::Success, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationKind::Info, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.add(NotificationKind::Error, message)
    }

    /// Отметить прочитанным; неизвестный id - не ошибка
    pub fn mark_as_read(&mut self, id: u64) {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => n.read = true,
            None => log::debug!("mark_as_read: notification #{} not found", id),
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for n in self.items.iter_mut() {
            n.read = true;
        }
    }

    /// Закрыть одно уведомление (кнопка на тосте)
    pub fn remove(&mut self, id: u64) -> Option<Notification> {
        let pos = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_unread_count() {
        let mut store = NotificationStore::new();
        let first = store.success("one");
        let second = store.info("two");
        let third = store.error("three");

        let ids: Vec<u64> = store.notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![third, second, first]);
        assert_eq!(store.notifications()[0].message, "three");
        assert_eq!(store.unread_count(), 3);

        store.mark_as_read(second);
        assert_eq!(store.unread_count(), 2);
        assert!(store.get(second).unwrap().read);
        assert_eq!(
            store.unread_count(),
            store.notifications().iter().filter(|n| !n.read).count()
        );
    }

    #[test]
    fn test_ids_increase_monotonically() {
        let mut store = NotificationStore::new();
        let a = store.info("a");
        let b = store.info("b");
        store.clear();
        let c = store.info("c");
        assert!(a < b && b < c);
    }

    #[test]
    fn test_mark_all_as_read_zeroes_unread() {
        let mut store = NotificationStore::new();
        assert_eq!(store.unread_count(), 0);
        store.mark_all_as_read();
        assert_eq!(store.unread_count(), 0);

        for i in 0..5 {
            store.add(NotificationKind::Info, format!("n{i}"));
        }
        store.mark_as_read(2);
        store.mark_all_as_read();
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = NotificationStore::new();
        store.success("kept");
        let before = store.clone();

        store.mark_as_read(999);
        assert_eq!(store, before);
        assert!(store.remove(999).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = NotificationStore::new();
        let a = store.success("a");
        let b = store.info("b");

        let removed = store.remove(a).unwrap();
        assert_eq!(removed.message, "a");
        assert_eq!(store.len(), 1);
        assert_eq!(store.notifications()[0].id, b);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_retention_keeps_newest() {
        let mut store = NotificationStore::with_retention(Some(2));
        store.info("old");
        store.info("mid");
        let newest = store.info("new");

        assert_eq!(store.len(), 2);
        assert_eq!(store.notifications()[0].id, newest);
        assert_eq!(store.notifications()[1].message, "mid");

        let unbounded = NotificationStore::with_retention(Some(0));
        assert_eq!(unbounded, NotificationStore::new());
    }

    #[test]
    fn test_record_fields() {
        let mut store = NotificationStore::new();
        let id = store.add_at(NotificationKind::Success, "saved", 1_700_000_000_000);
        let n = store.get(id).unwrap();
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.timestamp, 1_700_000_000_000);
        assert!(!n.read);

        let json = serde_json::to_value(n).unwrap();
        assert_eq!(json["type"], "success");
    }
}
