use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a005_invoice::{Invoice, InvoiceId};
use crate::domain::common::{AggregateId, AggregateRoot, Choice};
use crate::shared::list::sort::{cmp_amount, cmp_text};
use crate::shared::list::{ResourceCollection, Searchable, Sortable};

pub const UNKNOWN_INVOICE: &str = "Unknown Invoice";

crate::prefixed_id!(
    /// Номер платежа, например "PMT-001"
    PaymentId,
    "PMT"
);

crate::choice_enum!(PaymentStatus {
    Completed => "Completed",
    Pending => "Pending",
    Failed => "Failed",
});

crate::choice_enum!(PaymentMethod {
    BankTransfer => "Bank Transfer",
    MPesa => "M-Pesa",
    CreditCard => "Credit Card",
});

/// Входящий платеж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    /// Ссылка на счет без контроля целостности
    pub invoice_id: Option<InvoiceId>,
    pub customer: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub currency: String,
    pub date: NaiveDate,
}

impl Payment {
    /// Номер счета, "-" если счет не указан, "Unknown Invoice" для висячей ссылки
    pub fn invoice_label(&self, invoices: &ResourceCollection<Invoice>) -> String {
        match &self.invoice_id {
            Some(id) => invoices.resolve_or(id, |inv| inv.id.as_string(), UNKNOWN_INVOICE),
            None => "-".to_string(),
        }
    }
}

impl AggregateRoot for Payment {
    type Id = PaymentId;
    type Status = PaymentStatus;

    fn id(&self) -> &PaymentId {
        &self.id
    }

    fn status(&self) -> PaymentStatus {
        self.status
    }

    fn set_status(&mut self, status: PaymentStatus) {
        self.status = status;
    }

    fn label(&self) -> String {
        self.id.as_string()
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }

    fn created_message(&self) -> String {
        format!("Payment {} recorded successfully", self.id)
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str(), self.method.label()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.label().to_string()),
            "method" => Some(self.method.label().to_string()),
            "invoice_id" => self.invoice_id.as_ref().map(AggregateId::as_string),
            _ => None,
        }
    }
}

impl Sortable for Payment {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "customer" => cmp_text(&self.customer, &other.customer),
            "amount" => cmp_amount(self.amount, other.amount),
            "method" => cmp_text(self.method.label(), other.method.label()),
            "status" => cmp_text(self.status.label(), other.status.label()),
            "date" => self.date.cmp(&other.date),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_invoice::{InvoiceItem, InvoiceStatus};
    use crate::shared::list::{filter_list, FilterState};

    fn payment(id: &str, invoice: Option<&str>, method: PaymentMethod) -> Payment {
        Payment {
            id: PaymentId::new(id),
            invoice_id: invoice.map(InvoiceId::new),
            customer: "Tech Corp".into(),
            amount: 1500.0,
            method,
            status: PaymentStatus::Completed,
            currency: "USD".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        }
    }

    #[test]
    fn test_invoice_label() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let invoices = ResourceCollection::new(vec![Invoice {
            id: InvoiceId::new("INV-001"),
            customer: "Tech Corp".into(),
            items: vec![InvoiceItem { description: "Work".into(), quantity: 1, price: 1500.0 }],
            status: InvoiceStatus::Paid,
            date: day,
            due_date: day,
        }]);

        let method = PaymentMethod::BankTransfer;
        assert_eq!(payment("PMT-001", Some("INV-001"), method).invoice_label(&invoices), "INV-001");
        assert_eq!(payment("PMT-002", Some("INV-404"), method).invoice_label(&invoices), UNKNOWN_INVOICE);
        assert_eq!(payment("PMT-003", None, method).invoice_label(&invoices), "-");
    }

    #[test]
    fn test_method_filter() {
        let items = vec![
            payment("PMT-001", None, PaymentMethod::BankTransfer),
            payment("PMT-002", None, PaymentMethod::MPesa),
        ];
        let state = FilterState::new().with_filter("method", "M-Pesa");
        let found = filter_list(&items, &state);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "PMT-002");
        assert!(items[1].matches_filter("m-pesa"));
    }
}
