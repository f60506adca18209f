use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a002_job_vacancy::{JobId, JobVacancy};
use crate::domain::common::{AggregateId, AggregateRoot, Choice, QuickAction};
use crate::shared::list::sort::cmp_text;
use crate::shared::list::{ResourceCollection, Searchable, Sortable};

/// Подпись для отклика, вакансия которого не найдена
pub const UNKNOWN_JOB: &str = "Unknown Job";

crate::prefixed_id!(
    /// Номер отклика, например "APP-001"
    ApplicationId,
    "APP"
);

crate::choice_enum!(ApplicationStatus {
    UnderReview => "Under Review",
    Shortlisted => "Shortlisted",
    Rejected => "Rejected",
    Hired => "Hired",
});

/// Отклик кандидата на вакансию
///
/// `job_id` - ссылка без контроля целостности: вакансию могут удалить,
/// отклик при этом остается и показывается как [`UNKNOWN_JOB`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub candidate: String,
    pub email: String,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
}

impl Application {
    /// Название вакансии или "Unknown Job"
    pub fn job_title(&self, jobs: &ResourceCollection<JobVacancy>) -> String {
        jobs.resolve_or(&self.job_id, |job| job.title.clone(), UNKNOWN_JOB)
    }
}

impl AggregateRoot for Application {
    type Id = ApplicationId;
    type Status = ApplicationStatus;

    fn id(&self) -> &ApplicationId {
        &self.id
    }

    fn status(&self) -> ApplicationStatus {
        self.status
    }

    fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    fn label(&self) -> String {
        format!("{} ({})", self.id, self.candidate)
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "applications"
    }

    fn element_name() -> &'static str {
        "Application"
    }

    fn list_name() -> &'static str {
        "Applications"
    }
}

impl QuickAction for Application {
    fn next_status(&self) -> ApplicationStatus {
        match self.status {
            ApplicationStatus::UnderReview => ApplicationStatus::Shortlisted,
            ApplicationStatus::Shortlisted => ApplicationStatus::Hired,
            ApplicationStatus::Hired => ApplicationStatus::Hired,
            ApplicationStatus::Rejected => ApplicationStatus::UnderReview,
        }
    }

    fn action_label(&self) -> &'static str {
        match self.status {
            ApplicationStatus::UnderReview => "Shortlist",
            ApplicationStatus::Shortlisted => "Hire",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Rejected => "Reconsider",
        }
    }
}

impl Searchable for Application {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.candidate.as_str(), self.email.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.label().to_string()),
            // сравнивается внешний ключ, а не название вакансии
            "job_id" => Some(self.job_id.as_string()),
            _ => None,
        }
    }
}

impl Sortable for Application {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "job_id" => self.job_id.cmp(&other.job_id),
            "email" => cmp_text(&self.email, &other.email),
            "status" => cmp_text(self.status.label(), other.status.label()),
            "applied_date" => self.applied_date.cmp(&other.applied_date),
            _ => cmp_text(&self.candidate, &other.candidate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_job_vacancy::JobStatus;
    use crate::shared::list::{filter_list, FilterState};

    fn application(id: &str, job: u64, candidate: &str) -> Application {
        Application {
            id: ApplicationId::new(id),
            job_id: JobId(job),
            candidate: candidate.into(),
            email: format!("{}@example.com", candidate.to_lowercase()),
            status: ApplicationStatus::UnderReview,
            applied_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_job_title_falls_back_for_dangling_reference() {
        let jobs = ResourceCollection::new(vec![JobVacancy {
            id: JobId(1),
            title: "Senior Frontend Developer".into(),
            department: "Engineering".into(),
            location: "Remote".into(),
            status: JobStatus::Open,
            applications: 25,
            posted_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        }]);

        assert_eq!(application("APP-001", 1, "Sarah").job_title(&jobs), "Senior Frontend Developer");
        assert_eq!(application("APP-002", 99, "James").job_title(&jobs), UNKNOWN_JOB);
    }

    #[test]
    fn test_filter_by_job_foreign_key() {
        let items = vec![
            application("APP-001", 1, "Sarah"),
            application("APP-002", 3, "Emma"),
            application("APP-003", 1, "James"),
        ];
        let state = FilterState::new().with_filter("job_id", "1");
        let ids: Vec<_> = filter_list(&items, &state).into_iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec!["APP-001", "APP-003"]);
    }

    #[test]
    fn test_advance_path() {
        let mut app = application("APP-001", 1, "Sarah");
        app.status = app.next_status();
        assert_eq!(app.status, ApplicationStatus::Shortlisted);
        app.status = app.next_status();
        assert_eq!(app.status, ApplicationStatus::Hired);
        assert_eq!(app.next_status(), ApplicationStatus::Hired);
    }
}
