pub mod aggregate;
pub mod form;

pub use aggregate::{Application, ApplicationId, ApplicationStatus, UNKNOWN_JOB};
pub use form::ApplicationForm;
