use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::{AggregateId, AggregateRoot, Choice, QuickAction};
use crate::shared::list::sort::{cmp_amount, cmp_text};
use crate::shared::list::{Searchable, Sortable};

crate::prefixed_id!(
    /// Номер счета, например "INV-001"
    InvoiceId,
    "INV"
);

crate::choice_enum!(InvoiceStatus {
    Paid => "Paid",
    Pending => "Pending",
    Overdue => "Overdue",
});

/// Строка счета
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    pub price: f64,
}

impl InvoiceItem {
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Счет клиенту
///
/// Сумма счета не хранится: она всегда вычисляется по строкам.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer: String,
    pub items: Vec<InvoiceItem>,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
}

impl Invoice {
    /// Сумма счета: Σ quantity × price
    pub fn amount(&self) -> f64 {
        self.items.iter().map(InvoiceItem::total).sum()
    }

    /// Неоплаченный счет (ожидает оплаты или просрочен)
    pub fn is_outstanding(&self) -> bool {
        matches!(self.status, InvoiceStatus::Pending | InvoiceStatus::Overdue)
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;
    type Status = InvoiceStatus;

    fn id(&self) -> &InvoiceId {
        &self.id
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn set_status(&mut self, status: InvoiceStatus) {
        self.status = status;
    }

    fn label(&self) -> String {
        self.id.as_string()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "invoices"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

impl QuickAction for Invoice {
    fn next_status(&self) -> InvoiceStatus {
        match self.status {
            InvoiceStatus::Paid => InvoiceStatus::Pending,
            InvoiceStatus::Pending | InvoiceStatus::Overdue => InvoiceStatus::Paid,
        }
    }

    fn action_label(&self) -> &'static str {
        match self.status {
            InvoiceStatus::Paid => "Mark unpaid",
            InvoiceStatus::Pending | InvoiceStatus::Overdue => "Mark paid",
        }
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Invoice {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "customer" => cmp_text(&self.customer, &other.customer),
            "amount" => cmp_amount(self.amount(), other.amount()),
            "status" => cmp_text(self.status.label(), other.status.label()),
            "date" => self.date.cmp(&other.date),
            "due_date" => self.due_date.cmp(&other.due_date),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_sums_items() {
        let invoice = Invoice {
            id: InvoiceId::new("INV-001"),
            customer: "Tech Solutions Inc.".into(),
            items: vec![
                InvoiceItem { description: "Design".into(), quantity: 2, price: 10.0 },
                InvoiceItem { description: "Hosting".into(), quantity: 1, price: 5.0 },
            ],
            status: InvoiceStatus::Pending,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
        };
        assert_eq!(invoice.amount(), 25.0);
        assert!(invoice.is_outstanding());
        assert!(invoice.matches_filter("inv-001"));
    }
}
