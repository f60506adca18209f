pub mod aggregate;
pub mod form;

pub use aggregate::{respond_to_ticket, Ticket, TicketId, TicketPriority, TicketStatus};
pub use form::TicketForm;
