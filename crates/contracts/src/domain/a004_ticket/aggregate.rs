use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::{AggregateId, AggregateRoot, Choice, QuickAction};
use crate::shared::list::sort::cmp_text;
use crate::shared::list::{ResourceCollection, Searchable, Sortable};
use crate::shared::notifications::NotificationStore;

crate::prefixed_id!(
    /// Номер обращения, например "TKT-001"
    TicketId,
    "TKT"
);

crate::choice_enum!(TicketStatus {
    Open => "Open",
    InProgress => "In Progress",
    Closed => "Closed",
});

crate::choice_enum!(TicketPriority {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

impl TicketPriority {
    fn rank(&self) -> u8 {
        match self {
            TicketPriority::High => 0,
            TicketPriority::Medium => 1,
            TicketPriority::Low => 2,
        }
    }
}

/// Обращение в службу поддержки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub subject: String,
    pub customer: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created: NaiveDate,
    pub last_response: Option<NaiveDate>,
}

impl AggregateRoot for Ticket {
    type Id = TicketId;
    type Status = TicketStatus;

    fn id(&self) -> &TicketId {
        &self.id
    }

    fn status(&self) -> TicketStatus {
        self.status
    }

    fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
    }

    fn label(&self) -> String {
        self.id.as_string()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "tickets"
    }

    fn element_name() -> &'static str {
        "Ticket"
    }

    fn list_name() -> &'static str {
        "Tickets"
    }
}

impl QuickAction for Ticket {
    fn next_status(&self) -> TicketStatus {
        match self.status {
            TicketStatus::Closed => TicketStatus::Open,
            TicketStatus::Open | TicketStatus::InProgress => TicketStatus::Closed,
        }
    }

    fn action_label(&self) -> &'static str {
        match self.status {
            TicketStatus::Closed => "Reopen",
            TicketStatus::Open | TicketStatus::InProgress => "Close",
        }
    }
}

/// Отметить ответ клиенту: дата последнего ответа = `date`,
/// открытый тикет переходит в работу. Закрытый тикет не меняется.
pub fn respond_to_ticket(
    tickets: &mut ResourceCollection<Ticket>,
    id: &TicketId,
    date: NaiveDate,
    notifications: &mut NotificationStore,
) -> Option<TicketStatus> {
    let mut updated = tickets.find(id)?.clone();
    if updated.status == TicketStatus::Closed {
        log::warn!("{}: response to closed ticket {}", Ticket::full_name(), id.as_string());
        return None;
    }
    updated.last_response = Some(date);
    if updated.status == TicketStatus::Open {
        updated.status = TicketStatus::InProgress;
    }
    let status = updated.status;
    tickets.replace(updated).ok()?;
    notifications.success("Ticket response sent successfully");
    Some(status)
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.subject.as_str(), self.customer.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.label().to_string()),
            "priority" => Some(self.priority.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Ticket {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "subject" => cmp_text(&self.subject, &other.subject),
            "customer" => cmp_text(&self.customer, &other.customer),
            "status" => cmp_text(self.status.label(), other.status.label()),
            "priority" => self.priority.rank().cmp(&other.priority.rank()),
            "created" => self.created.cmp(&other.created),
            "last_response" => self.last_response.cmp(&other.last_response),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{filter_list, FilterState, ALL};

    fn ticket(id: &str, customer: &str, status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::new(id),
            subject: "Login Problem".into(),
            customer: customer.into(),
            status,
            priority: TicketPriority::Medium,
            created: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
            last_response: None,
        }
    }

    #[test]
    fn test_all_filter_keeps_every_ticket_in_order() {
        let items = vec![
            ticket("TKT-001", "John Doe", TicketStatus::Open),
            ticket("TKT-002", "Jane Smith", TicketStatus::InProgress),
            ticket("TKT-003", "Mike Johnson", TicketStatus::Closed),
        ];
        let state = FilterState::new().with_search("").with_filter("status", ALL);
        assert_eq!(filter_list(&items, &state), items);
    }

    #[test]
    fn test_search_by_customer() {
        let items = vec![
            ticket("TKT-001", "John Doe", TicketStatus::Open),
            ticket("TKT-002", "Jane Smith", TicketStatus::Open),
        ];
        let state = FilterState::new().with_search("jane");
        assert_eq!(filter_list(&items, &state), vec![items[1].clone()]);
    }

    #[test]
    fn test_status_filter_uses_label() {
        let items = vec![
            ticket("TKT-001", "John Doe", TicketStatus::Open),
            ticket("TKT-002", "Jane Smith", TicketStatus::InProgress),
        ];
        let state = FilterState::new().with_filter("status", "In Progress");
        let found = filter_list(&items, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "TKT-002");
    }

    #[test]
    fn test_respond_moves_open_ticket_in_progress() {
        let mut tickets = ResourceCollection::new(vec![ticket("TKT-001", "John Doe", TicketStatus::Open)]);
        let mut notifications = NotificationStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();

        let status = respond_to_ticket(&mut tickets, &TicketId::new("TKT-001"), date, &mut notifications);

        assert_eq!(status, Some(TicketStatus::InProgress));
        assert_eq!(tickets.items()[0].last_response, Some(date));
        assert_eq!(notifications.notifications()[0].message, "Ticket response sent successfully");

        assert!(respond_to_ticket(&mut tickets, &TicketId::new("TKT-404"), date, &mut notifications).is_none());
        assert_eq!(notifications.len(), 1);
    }

    #[test]
    fn test_respond_to_closed_ticket_is_rejected() {
        let mut tickets = ResourceCollection::new(vec![ticket("TKT-003", "Mike Johnson", TicketStatus::Closed)]);
        let mut notifications = NotificationStore::new();
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

        assert!(respond_to_ticket(&mut tickets, &TicketId::new("TKT-003"), date, &mut notifications).is_none());
        assert_eq!(tickets.items()[0].last_response, None);
        assert_eq!(tickets.items()[0].status, TicketStatus::Closed);
        assert_eq!(tickets.version(), 0);
        assert!(notifications.is_empty());
    }
}
