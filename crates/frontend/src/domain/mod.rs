pub mod a001_user;
pub mod a002_job_vacancy;
pub mod a003_application;
pub mod a004_ticket;
pub mod a005_invoice;
pub mod a006_payment;
