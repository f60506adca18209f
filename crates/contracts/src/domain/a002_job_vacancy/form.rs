use crate::domain::common::AggregateRoot;
use crate::shared::date_utils::{to_input, today};
use crate::shared::error::ValidationErrors;
use crate::shared::list::{EntityForm, FieldChecker};

use super::aggregate::{JobStatus, JobVacancy};

#[derive(Debug, Clone, PartialEq)]
pub struct JobVacancyForm {
    pub title: String,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
    pub posted_date: String,
}

impl Default for JobVacancyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            department: String::new(),
            location: String::new(),
            status: JobStatus::Open,
            posted_date: to_input(today()),
        }
    }
}

impl EntityForm for JobVacancyForm {
    type Entity = JobVacancy;

    fn from_entity(job: &JobVacancy) -> Self {
        Self {
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            status: job.status,
            posted_date: to_input(job.posted_date),
        }
    }

    fn into_entity(
        &self,
        id: <JobVacancy as AggregateRoot>::Id,
        base: Option<&JobVacancy>,
    ) -> Result<JobVacancy, ValidationErrors> {
        let mut check = FieldChecker::new();
        let title = check.required("title", &self.title);
        let department = check.required("department", &self.department);
        let location = check.required("location", &self.location);
        let posted_date = check.date("posted_date", &self.posted_date);
        check.finish()?;

        Ok(JobVacancy {
            id,
            title,
            department,
            location,
            status: self.status,
            // новая вакансия стартует без откликов
            applications: base.map_or(0, |job| job.applications),
            posted_date,
        })
    }
}
