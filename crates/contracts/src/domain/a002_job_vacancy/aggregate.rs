use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::domain::common::{AggregateRoot, Choice, QuickAction};
use crate::shared::list::sort::cmp_text;
use crate::shared::list::{Searchable, Sortable};

crate::numeric_id!(
    /// Уникальный идентификатор вакансии
    JobId
);

crate::choice_enum!(JobStatus {
    Open => "Open",
    Closed => "Closed",
});

/// Вакансия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobVacancy {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
    /// Количество откликов (ведется вне формы)
    pub applications: u32,
    pub posted_date: NaiveDate,
}

impl AggregateRoot for JobVacancy {
    type Id = JobId;
    type Status = JobStatus;

    fn id(&self) -> &JobId {
        &self.id
    }

    fn status(&self) -> JobStatus {
        self.status
    }

    fn set_status(&mut self, status: JobStatus) {
        self.status = status;
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "job_vacancies"
    }

    fn element_name() -> &'static str {
        "Job vacancy"
    }

    fn list_name() -> &'static str {
        "Job Vacancies"
    }

    fn created_message(&self) -> String {
        format!("Job vacancy {} posted successfully", self.title)
    }
}

impl QuickAction for JobVacancy {
    fn next_status(&self) -> JobStatus {
        match self.status {
            JobStatus::Open => JobStatus::Closed,
            JobStatus::Closed => JobStatus::Open,
        }
    }

    fn action_label(&self) -> &'static str {
        match self.status {
            JobStatus::Open => "Close",
            JobStatus::Closed => "Reopen",
        }
    }
}

impl Searchable for JobVacancy {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.department.as_str(),
            self.location.as_str(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.label().to_string()),
            "department" => Some(self.department.clone()),
            _ => None,
        }
    }
}

impl Sortable for JobVacancy {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "department" => cmp_text(&self.department, &other.department),
            "location" => cmp_text(&self.location, &other.location),
            "status" => cmp_text(self.status.label(), other.status.label()),
            "applications" => self.applications.cmp(&other.applications),
            "posted_date" => self.posted_date.cmp(&other.posted_date),
            _ => cmp_text(&self.title, &other.title),
        }
    }
}

/// Отделы текущих вакансий без повторов, по алфавиту
pub fn departments(jobs: &[JobVacancy]) -> Vec<String> {
    jobs.iter()
        .map(|j| j.department.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures::SeedData;
    use crate::shared::list::ResourceCollection;

    #[test]
    fn test_departments_follow_collection() {
        let mut jobs = ResourceCollection::new(SeedData::demo().jobs);
        assert_eq!(departments(jobs.items()), vec!["Design", "Engineering", "Product"]);

        let mut marketing = jobs.items()[0].clone();
        marketing.id = jobs.mint_id();
        marketing.department = "Marketing".into();
        jobs.insert(marketing).unwrap();
        jobs.remove(&JobId(2));

        assert_eq!(departments(jobs.items()), vec!["Engineering", "Marketing", "Product"]);
    }
}
