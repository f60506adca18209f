//! Демонстрационные данные, которыми заполняются коллекции при старте.

use chrono::NaiveDate;

use crate::domain::a001_user::{User, UserId, UserRole, UserStatus};
use crate::domain::a002_job_vacancy::{JobId, JobStatus, JobVacancy};
use crate::domain::a003_application::{Application, ApplicationId, ApplicationStatus};
use crate::domain::a004_ticket::{Ticket, TicketId, TicketPriority, TicketStatus};
use crate::domain::a005_invoice::{Invoice, InvoiceId, InvoiceItem, InvoiceStatus};
use crate::domain::a006_payment::{Payment, PaymentId, PaymentMethod, PaymentStatus};

/// Начальное содержимое всех коллекций
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub users: Vec<User>,
    pub jobs: Vec<JobVacancy>,
    pub applications: Vec<Application>,
    pub tickets: Vec<Ticket>,
    pub invoices: Vec<Invoice>,
    pub payments: Vec<Payment>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn user(id: u64, name: &str, email: &str, role: UserRole, joined: NaiveDate, color: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status: UserStatus::Active,
        joined_date: joined,
        avatar: format!(
            "https://placehold.co/100x100/{}/000000?text={}",
            color,
            User::initials(name)
        ),
    }
}

fn item(description: &str, quantity: u32, price: f64) -> InvoiceItem {
    InvoiceItem {
        description: description.to_string(),
        quantity,
        price,
    }
}

impl SeedData {
    pub fn demo() -> Self {
        let mut users = vec![
            user(1, "Alice Wonderland", "alice@example.com", UserRole::Admin, date(2023, 1, 15), "FFC0CB"),
            user(2, "Bob The Builder", "bob@example.com", UserRole::Editor, date(2023, 2, 20), "ADD8E6"),
            user(3, "Charlie Brown", "charlie@example.com", UserRole::Viewer, date(2023, 3, 10), "90EE90"),
            user(4, "Diana Prince", "diana@example.com", UserRole::Editor, date(2023, 4, 5), "FFD700"),
            user(5, "Edward Scissorhands", "edward@example.com", UserRole::Viewer, date(2023, 5, 12), "D3D3D3"),
        ];
        users[4].status = UserStatus::Inactive;

        let jobs = vec![
            JobVacancy {
                id: JobId(1),
                title: "Senior Frontend Developer".into(),
                department: "Engineering".into(),
                location: "Remote".into(),
                status: JobStatus::Open,
                applications: 25,
                posted_date: date(2024, 4, 1),
            },
            JobVacancy {
                id: JobId(2),
                title: "UX/UI Designer".into(),
                department: "Design".into(),
                location: "New York, NY".into(),
                status: JobStatus::Closed,
                applications: 42,
                posted_date: date(2024, 3, 15),
            },
            JobVacancy {
                id: JobId(3),
                title: "Product Manager".into(),
                department: "Product".into(),
                location: "San Francisco, CA".into(),
                status: JobStatus::Open,
                applications: 18,
                posted_date: date(2024, 4, 10),
            },
        ];

        let applications = vec![
            Application {
                id: ApplicationId::new("APP-001"),
                job_id: JobId(1),
                candidate: "Sarah Wilson".into(),
                email: "sarah@example.com".into(),
                status: ApplicationStatus::UnderReview,
                applied_date: date(2024, 5, 1),
            },
            Application {
                id: ApplicationId::new("APP-002"),
                job_id: JobId(1),
                candidate: "James Brown".into(),
                email: "james@example.com".into(),
                status: ApplicationStatus::Shortlisted,
                applied_date: date(2024, 5, 2),
            },
            Application {
                id: ApplicationId::new("APP-003"),
                job_id: JobId(3),
                candidate: "Emma Davis".into(),
                email: "emma@example.com".into(),
                status: ApplicationStatus::Rejected,
                applied_date: date(2024, 5, 3),
            },
        ];

        let tickets = vec![
            Ticket {
                id: TicketId::new("TKT-001"),
                subject: "Payment Issue".into(),
                customer: "John Doe".into(),
                status: TicketStatus::Open,
                priority: TicketPriority::High,
                created: date(2024, 5, 10),
                last_response: None,
            },
            Ticket {
                id: TicketId::new("TKT-002"),
                subject: "Login Problem".into(),
                customer: "Jane Smith".into(),
                status: TicketStatus::InProgress,
                priority: TicketPriority::Medium,
                created: date(2024, 5, 9),
                last_response: Some(date(2024, 5, 10)),
            },
            Ticket {
                id: TicketId::new("TKT-003"),
                subject: "Refund Request".into(),
                customer: "Mike Johnson".into(),
                status: TicketStatus::Closed,
                priority: TicketPriority::Low,
                created: date(2024, 5, 8),
                last_response: Some(date(2024, 5, 9)),
            },
        ];

        let invoices = vec![
            Invoice {
                id: InvoiceId::new("INV-001"),
                customer: "Tech Solutions Inc.".into(),
                items: vec![item("Website redesign", 1, 1200.0)],
                status: InvoiceStatus::Paid,
                date: date(2024, 3, 15),
                due_date: date(2024, 4, 15),
            },
            Invoice {
                id: InvoiceId::new("INV-002"),
                customer: "Creative Designs LLC".into(),
                items: vec![item("Logo design", 1, 500.0), item("Brand guidelines", 1, 350.0)],
                status: InvoiceStatus::Pending,
                date: date(2024, 3, 20),
                due_date: date(2024, 4, 20),
            },
            Invoice {
                id: InvoiceId::new("INV-003"),
                customer: "Global Web Services".into(),
                items: vec![item("Annual hosting", 1, 1000.0), item("Maintenance hours", 3, 500.0)],
                status: InvoiceStatus::Overdue,
                date: date(2024, 2, 10),
                due_date: date(2024, 3, 10),
            },
        ];

        let payments = vec![
            Payment {
                id: PaymentId::new("PMT-001"),
                invoice_id: Some(InvoiceId::new("INV-001")),
                customer: "Tech Corp".into(),
                amount: 1500.0,
                method: PaymentMethod::BankTransfer,
                status: PaymentStatus::Completed,
                currency: "USD".into(),
                date: date(2024, 5, 10),
            },
            Payment {
                id: PaymentId::new("PMT-002"),
                invoice_id: None,
                customer: "Digital Solutions".into(),
                amount: 800.0,
                method: PaymentMethod::MPesa,
                status: PaymentStatus::Pending,
                currency: "KES".into(),
                date: date(2024, 5, 10),
            },
            Payment {
                id: PaymentId::new("PMT-003"),
                invoice_id: Some(InvoiceId::new("INV-003")),
                customer: "WebTech Inc".into(),
                amount: 2000.0,
                method: PaymentMethod::CreditCard,
                status: PaymentStatus::Completed,
                currency: "USD".into(),
                date: date(2024, 5, 9),
            },
        ];

        Self {
            users,
            jobs,
            applications,
            tickets,
            invoices,
            payments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateRoot;
    use std::collections::HashSet;

    fn unique<E: AggregateRoot>(items: &[E]) -> bool {
        let ids: HashSet<_> = items.iter().map(|e| e.id().clone()).collect();
        ids.len() == items.len()
    }

    #[test]
    fn test_demo_ids_are_unique() {
        let seed = SeedData::demo();
        assert!(unique(&seed.users));
        assert!(unique(&seed.jobs));
        assert!(unique(&seed.applications));
        assert!(unique(&seed.tickets));
        assert!(unique(&seed.invoices));
        assert!(unique(&seed.payments));
    }

    #[test]
    fn test_invoice_items_match_listed_amounts() {
        let amounts: Vec<f64> = SeedData::demo().invoices.iter().map(Invoice::amount).collect();
        assert_eq!(amounts, vec![1200.0, 850.0, 2500.0]);
    }
}
