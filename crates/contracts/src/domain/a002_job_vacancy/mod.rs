pub mod aggregate;
pub mod form;

pub use aggregate::{departments, JobId, JobStatus, JobVacancy};
pub use form::JobVacancyForm;
