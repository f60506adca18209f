pub mod aggregate;
pub mod form;

pub use aggregate::{Payment, PaymentId, PaymentMethod, PaymentStatus, UNKNOWN_INVOICE};
pub use form::PaymentForm;
