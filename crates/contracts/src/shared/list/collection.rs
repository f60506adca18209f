//! Упорядоченная коллекция записей одного типа.
//!
//! Единственное место, где выпускаются ID. Все изменения - замена записи
//! целиком; каждое изменение увеличивает `version`.

use crate::domain::common::{AggregateId, AggregateRoot, Choice};
use crate::shared::error::CollectionError;
use crate::shared::id_sequence::IdSequence;

#[derive(Debug, Clone)]
pub struct ResourceCollection<E: AggregateRoot> {
    items: Vec<E>,
    sequence: IdSequence,
    version: u64,
}

impl<E: AggregateRoot> ResourceCollection<E> {
    /// Коллекция с начальными данными; счетчик ID стартует после seed-записей
    pub fn new(seed: Vec<E>) -> Self {
        let sequence = IdSequence::after(seed.iter().filter_map(|e| e.id().sequence_number()));
        log::debug!("{}: loaded {} records", E::full_name(), seed.len());
        Self {
            items: seed,
            sequence,
            version: 0,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Счетчик изменений
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn find(&self, id: &E::Id) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.find(id).is_some()
    }

    /// Разрешить ссылку на запись в подпись; висячая ссылка -> `fallback`
    pub fn resolve_or<F>(&self, id: &E::Id, label: F, fallback: &str) -> String
    where
        F: FnOnce(&E) -> String,
    {
        self.find(id).map(label).unwrap_or_else(|| fallback.to_string())
    }

    /// Выпустить новый уникальный ID
    pub fn mint_id(&self) -> E::Id {
        E::Id::from_sequence(self.sequence.next_value())
    }

    pub fn insert(&mut self, entity: E) -> Result<E::Id, CollectionError> {
        let id = entity.id().clone();
        if self.contains(&id) {
            return Err(CollectionError::DuplicateId(id.as_string()));
        }
        log::debug!("{}: insert {}", E::full_name(), id.as_string());
        self.items.push(entity);
        self.version += 1;
        Ok(id)
    }

    /// Заменить запись с тем же ID; возвращает предыдущее значение
    pub fn replace(&mut self, entity: E) -> Result<E, CollectionError> {
        let pos = self
            .items
            .iter()
            .position(|e| e.id() == entity.id())
            .ok_or_else(|| CollectionError::NotFound(entity.id().as_string()))?;
        log::debug!("{}: replace {}", E::full_name(), entity.id().as_string());
        let previous = std::mem::replace(&mut self.items[pos], entity);
        self.version += 1;
        Ok(previous)
    }

    /// Замена с проверкой версии (compare-and-swap)
    pub fn replace_if_version(&mut self, entity: E, expected: u64) -> Result<E, CollectionError> {
        if self.version != expected {
            log::warn!(
                "{}: stale write rejected (expected {}, actual {})",
                E::full_name(),
                expected,
                self.version
            );
            return Err(CollectionError::StaleVersion {
                expected,
                actual: self.version,
            });
        }
        self.replace(entity)
    }

    pub fn remove(&mut self, id: &E::Id) -> Option<E> {
        let pos = self.items.iter().position(|e| e.id() == id)?;
        log::debug!("{}: remove {}", E::full_name(), id.as_string());
        self.version += 1;
        Some(self.items.remove(pos))
    }

    /// Сменить статус записи, сохранив остальные поля
    pub fn set_status(&mut self, id: &E::Id, status: E::Status) -> Option<&E> {
        let mut updated = self.find(id)?.clone();
        updated.set_status(status);
        let pos = self.items.iter().position(|e| e.id() == id)?;
        log::debug!("{}: status of {} -> {}", E::full_name(), id.as_string(), status.label());
        self.items[pos] = updated;
        self.version += 1;
        self.items.get(pos)
    }
}

impl<E: AggregateRoot> Default for ResourceCollection<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_ticket::{Ticket, TicketId, TicketPriority, TicketStatus};
    use chrono::NaiveDate;

    fn ticket(id: &str, status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::new(id),
            subject: "Payment Issue".into(),
            customer: "John Doe".into(),
            status,
            priority: TicketPriority::High,
            created: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            last_response: None,
        }
    }

    #[test]
    fn test_minted_ids_skip_seed() {
        let tickets = ResourceCollection::new(vec![
            ticket("TKT-001", TicketStatus::Open),
            ticket("TKT-007", TicketStatus::Closed),
        ]);
        assert_eq!(tickets.mint_id().as_str(), "TKT-008");
        assert_eq!(tickets.mint_id().as_str(), "TKT-009");
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut tickets = ResourceCollection::new(vec![ticket("TKT-001", TicketStatus::Open)]);
        let err = tickets.insert(ticket("TKT-001", TicketStatus::Closed)).unwrap_err();
        assert_eq!(err, CollectionError::DuplicateId("TKT-001".into()));
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets.version(), 0);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut tickets = ResourceCollection::new(vec![ticket("TKT-001", TicketStatus::Open)]);
        let previous = tickets.replace(ticket("TKT-001", TicketStatus::Closed)).unwrap();
        assert_eq!(previous.status, TicketStatus::Open);
        assert_eq!(tickets.items()[0].status, TicketStatus::Closed);

        let missing = tickets.replace(ticket("TKT-404", TicketStatus::Open));
        assert!(matches!(missing, Err(CollectionError::NotFound(_))));

        assert!(tickets.remove(&TicketId::new("TKT-404")).is_none());
        assert!(tickets.remove(&TicketId::new("TKT-001")).is_some());
        assert!(tickets.is_empty());
        assert_eq!(tickets.version(), 2);
    }

    #[test]
    fn test_replace_if_version_detects_interleaved_write() {
        let mut tickets = ResourceCollection::new(vec![ticket("TKT-001", TicketStatus::Open)]);
        let seen = tickets.version();
        tickets.set_status(&TicketId::new("TKT-001"), TicketStatus::InProgress);

        let result = tickets.replace_if_version(ticket("TKT-001", TicketStatus::Closed), seen);
        assert_eq!(
            result.unwrap_err(),
            CollectionError::StaleVersion { expected: 0, actual: 1 }
        );
        assert_eq!(tickets.items()[0].status, TicketStatus::InProgress);

        let current = tickets.version();
        assert!(tickets
            .replace_if_version(ticket("TKT-001", TicketStatus::Closed), current)
            .is_ok());
    }

    #[test]
    fn test_resolve_or_tolerates_dangling_reference() {
        let tickets = ResourceCollection::new(vec![ticket("TKT-001", TicketStatus::Open)]);
        let label = |t: &Ticket| t.subject.clone();
        assert_eq!(tickets.resolve_or(&TicketId::new("TKT-001"), label, "Unknown"), "Payment Issue");
        assert_eq!(tickets.resolve_or(&TicketId::new("TKT-999"), label, "Unknown"), "Unknown");
    }
}
