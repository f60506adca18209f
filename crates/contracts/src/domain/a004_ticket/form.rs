use crate::domain::common::AggregateRoot;
use crate::shared::date_utils::today;
use crate::shared::error::ValidationErrors;
use crate::shared::list::{EntityForm, FieldChecker};

use super::aggregate::{Ticket, TicketPriority, TicketStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct TicketForm {
    pub subject: String,
    pub customer: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
}

impl Default for TicketForm {
    fn default() -> Self {
        Self {
            subject: String::new(),
            customer: String::new(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
        }
    }
}

impl EntityForm for TicketForm {
    type Entity = Ticket;

    fn from_entity(ticket: &Ticket) -> Self {
        Self {
            subject: ticket.subject.clone(),
            customer: ticket.customer.clone(),
            status: ticket.status,
            priority: ticket.priority,
        }
    }

    fn into_entity(
        &self,
        id: <Ticket as AggregateRoot>::Id,
        base: Option<&Ticket>,
    ) -> Result<Ticket, ValidationErrors> {
        let mut check = FieldChecker::new();
        let subject = check.required("subject", &self.subject);
        let customer = check.required("customer", &self.customer);
        check.finish()?;

        Ok(Ticket {
            id,
            subject,
            customer,
            status: self.status,
            priority: self.priority,
            created: base.map_or_else(today, |t| t.created),
            last_response: base.and_then(|t| t.last_response),
        })
    }
}
