use crate::domain::a002_job_vacancy::JobId;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::date_utils::{to_input, today};
use crate::shared::error::ValidationErrors;
use crate::shared::list::{EntityForm, FieldChecker};

use super::aggregate::{Application, ApplicationStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationForm {
    /// ID вакансии из выпадающего списка (строкой, как в `<select>`)
    pub job_id: String,
    pub candidate: String,
    pub email: String,
    pub status: ApplicationStatus,
    pub applied_date: String,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            job_id: String::new(),
            candidate: String::new(),
            email: String::new(),
            status: ApplicationStatus::UnderReview,
            applied_date: to_input(today()),
        }
    }
}

impl EntityForm for ApplicationForm {
    type Entity = Application;

    fn from_entity(app: &Application) -> Self {
        Self {
            job_id: app.job_id.as_string(),
            candidate: app.candidate.clone(),
            email: app.email.clone(),
            status: app.status,
            applied_date: to_input(app.applied_date),
        }
    }

    fn into_entity(
        &self,
        id: <Application as AggregateRoot>::Id,
        _base: Option<&Application>,
    ) -> Result<Application, ValidationErrors> {
        let mut check = FieldChecker::new();
        let job_id = if self.job_id.trim().is_empty() {
            check.fail("job_id", "Select a job vacancy");
            JobId(0)
        } else {
            JobId::from_string(&self.job_id).unwrap_or_else(|_| {
                check.fail("job_id", "Select a job vacancy");
                JobId(0)
            })
        };
        let candidate = check.required("candidate", &self.candidate);
        let email = check.email("email", &self.email);
        let applied_date = check.date("applied_date", &self.applied_date);
        check.finish()?;

        Ok(Application {
            id,
            job_id,
            candidate,
            email,
            status: self.status,
            applied_date,
        })
    }
}
