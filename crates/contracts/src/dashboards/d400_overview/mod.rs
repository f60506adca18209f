//! Сводка для главной страницы панели

use crate::domain::a001_user::User;
use crate::domain::a002_job_vacancy::{JobStatus, JobVacancy};
use crate::domain::a003_application::{Application, ApplicationStatus};
use crate::domain::a004_ticket::{Ticket, TicketStatus};
use crate::domain::a005_invoice::Invoice;
use crate::domain::a006_payment::{Payment, PaymentStatus};
use crate::shared::list::ResourceCollection;

/// Показатели карточек дашборда
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub active_users: usize,
    pub open_jobs: usize,
    /// Отклики в статусе "Under Review"
    pub pending_applications: usize,
    /// Open + In Progress
    pub open_tickets: usize,
    /// Сумма неоплаченных счетов (Pending + Overdue)
    pub outstanding_amount: f64,
    /// Сумма завершенных платежей
    pub revenue: f64,
}

impl DashboardSummary {
    pub fn compute(
        users: &ResourceCollection<User>,
        jobs: &ResourceCollection<JobVacancy>,
        applications: &ResourceCollection<Application>,
        tickets: &ResourceCollection<Ticket>,
        invoices: &ResourceCollection<Invoice>,
        payments: &ResourceCollection<Payment>,
    ) -> Self {
        Self {
            total_users: users.len(),
            active_users: users.items().iter().filter(|u| u.is_active()).count(),
            open_jobs: jobs
                .items()
                .iter()
                .filter(|j| j.status == JobStatus::Open)
                .count(),
            pending_applications: applications
                .items()
                .iter()
                .filter(|a| a.status == ApplicationStatus::UnderReview)
                .count(),
            open_tickets: tickets
                .items()
                .iter()
                .filter(|t| t.status != TicketStatus::Closed)
                .count(),
            outstanding_amount: invoices
                .items()
                .iter()
                .filter(|i| i.is_outstanding())
                .map(Invoice::amount)
                .sum(),
            revenue: payments
                .items()
                .iter()
                .filter(|p| p.status == PaymentStatus::Completed)
                .map(|p| p.amount)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures::SeedData;

    #[test]
    fn test_summary_over_demo_data() {
        let seed = SeedData::demo();
        let summary = DashboardSummary::compute(
            &ResourceCollection::new(seed.users),
            &ResourceCollection::new(seed.jobs),
            &ResourceCollection::new(seed.applications),
            &ResourceCollection::new(seed.tickets),
            &ResourceCollection::new(seed.invoices),
            &ResourceCollection::new(seed.payments),
        );

        assert_eq!(summary.total_users, 5);
        assert_eq!(summary.active_users, 4);
        assert_eq!(summary.open_jobs, 2);
        assert_eq!(summary.pending_applications, 1);
        assert_eq!(summary.open_tickets, 2);
        assert_eq!(summary.outstanding_amount, 3350.0);
        assert_eq!(summary.revenue, 3500.0);
    }
}
