pub mod aggregate;
pub mod form;

pub use aggregate::{User, UserId, UserRole, UserStatus};
pub use form::UserForm;
