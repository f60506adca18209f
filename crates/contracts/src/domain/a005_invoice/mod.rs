pub mod aggregate;
pub mod form;

pub use aggregate::{Invoice, InvoiceId, InvoiceItem, InvoiceStatus};
pub use form::{InvoiceForm, InvoiceItemForm};
