//! Действия из строки списка: удаление и быстрые переключатели статуса.
//! Каждое успешное действие добавляет ровно одно уведомление.

use crate::domain::common::{AggregateId, AggregateRoot, QuickAction};
use crate::shared::notifications::NotificationStore;

use super::collection::ResourceCollection;

/// Удалить запись. Подтверждение пользователя уже получено вызывающим кодом.
///
/// Неизвестный ID - no-op без уведомления.
pub fn delete_entity<E: AggregateRoot>(
    collection: &mut ResourceCollection<E>,
    id: &E::Id,
    notifications: &mut NotificationStore,
) -> Option<E> {
    match collection.remove(id) {
        Some(removed) => {
            notifications.info(removed.deleted_message());
            Some(removed)
        }
        None => {
            log::warn!("{}: delete of missing record {}", E::full_name(), id.as_string());
            None
        }
    }
}

/// Переключить статус записи (активировать/закрыть и т.п.)
///
/// Переход в тот же статус (например, Hired) - no-op без уведомления.
pub fn toggle_status<E: QuickAction>(
    collection: &mut ResourceCollection<E>,
    id: &E::Id,
    notifications: &mut NotificationStore,
) -> Option<E::Status> {
    let Some(current) = collection.find(id) else {
        log::warn!("{}: toggle of missing record {}", E::full_name(), id.as_string());
        return None;
    };
    let next = current.next_status();
    if next == current.status() {
        log::debug!("{}: {} already final", E::full_name(), id.as_string());
        return None;
    }
    let updated = collection.set_status(id, next)?;
    notifications.info(updated.status_message());
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_ticket::{Ticket, TicketId, TicketPriority, TicketStatus};
    use crate::shared::notifications::NotificationKind;
    use chrono::NaiveDate;

    fn open_ticket() -> Ticket {
        Ticket {
            id: TicketId::new("TKT-001"),
            subject: "Payment Issue".into(),
            customer: "John Doe".into(),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            created: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            last_response: None,
        }
    }

    #[test]
    fn test_toggle_closes_open_ticket() {
        let mut tickets = ResourceCollection::new(vec![open_ticket()]);
        let mut notifications = NotificationStore::new();

        let next = toggle_status(&mut tickets, &TicketId::new("TKT-001"), &mut notifications);

        assert_eq!(next, Some(TicketStatus::Closed));
        let mut expected = open_ticket();
        expected.status = TicketStatus::Closed;
        assert_eq!(tickets.items(), &[expected]);
        assert_eq!(notifications.len(), 1);
        assert!(matches!(
            notifications.notifications()[0].kind,
            NotificationKind::Info | NotificationKind::Success
        ));
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut tickets = ResourceCollection::new(vec![open_ticket()]);
        let mut notifications = NotificationStore::new();
        assert!(toggle_status(&mut tickets, &TicketId::new("TKT-404"), &mut notifications).is_none());
        assert!(notifications.is_empty());
        assert_eq!(tickets.version(), 0);
    }

    #[test]
    fn test_toggle_final_status_is_noop() {
        use crate::domain::a003_application::{ApplicationId, ApplicationStatus};
        use crate::shared::fixtures::SeedData;

        let mut applications = ResourceCollection::new(SeedData::demo().applications);
        let mut notifications = NotificationStore::new();
        let id = ApplicationId::new("APP-002");

        let hired = toggle_status(&mut applications, &id, &mut notifications);
        assert_eq!(hired, Some(ApplicationStatus::Hired));
        let version = applications.version();
        let snapshot = applications.items().to_vec();

        assert!(toggle_status(&mut applications, &id, &mut notifications).is_none());
        assert_eq!(applications.version(), version);
        assert_eq!(applications.items(), snapshot.as_slice());
        assert_eq!(notifications.len(), 1);
    }

    #[test]
    fn test_delete_last_item_leaves_empty_collection() {
        let mut tickets = ResourceCollection::new(vec![open_ticket()]);
        let mut notifications = NotificationStore::new();

        let removed = delete_entity(&mut tickets, &TicketId::new("TKT-001"), &mut notifications);

        assert!(removed.is_some());
        assert!(tickets.is_empty());
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications.notifications()[0].kind, NotificationKind::Info);

        assert!(delete_entity(&mut tickets, &TicketId::new("TKT-001"), &mut notifications).is_none());
        assert_eq!(notifications.len(), 1);
    }
}
