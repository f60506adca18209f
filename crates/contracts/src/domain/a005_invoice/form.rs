use chrono::Duration;

use crate::domain::common::AggregateRoot;
use crate::shared::date_utils::{to_input, today};
use crate::shared::error::ValidationErrors;
use crate::shared::list::{EntityForm, FieldChecker};

use super::aggregate::{Invoice, InvoiceItem, InvoiceStatus};

/// Срок оплаты нового счета по умолчанию
const DEFAULT_PAYMENT_TERM_DAYS: i64 = 30;

/// Строка счета в форме (значения как их ввел пользователь)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceItemForm {
    pub description: String,
    pub quantity: String,
    pub price: String,
}

impl InvoiceItemForm {
    pub fn new(description: &str, quantity: &str, price: &str) -> Self {
        Self {
            description: description.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }
}

/// Буфер формы счета. Поля суммы в форме нет: сумма считается по строкам.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub customer: String,
    pub items: Vec<InvoiceItemForm>,
    pub status: InvoiceStatus,
    pub date: String,
    pub due_date: String,
}

impl InvoiceForm {
    pub fn add_item(&mut self) {
        self.items.push(InvoiceItemForm::new("", "1", ""));
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Предварительная сумма по строкам, которые уже разбираются
    pub fn preview_amount(&self) -> f64 {
        self.items
            .iter()
            .filter_map(|item| {
                let qty = item.quantity.trim().parse::<u32>().ok()?;
                let price = item.price.trim().parse::<f64>().ok()?;
                Some(f64::from(qty) * price)
            })
            .sum()
    }
}

impl Default for InvoiceForm {
    fn default() -> Self {
        let date = today();
        Self {
            customer: String::new(),
            items: vec![InvoiceItemForm::new("", "1", "")],
            status: InvoiceStatus::Pending,
            date: to_input(date),
            due_date: to_input(date + Duration::days(DEFAULT_PAYMENT_TERM_DAYS)),
        }
    }
}

impl EntityForm for InvoiceForm {
    type Entity = Invoice;

    fn from_entity(invoice: &Invoice) -> Self {
        Self {
            customer: invoice.customer.clone(),
            items: invoice
                .items
                .iter()
                .map(|item| InvoiceItemForm {
                    description: item.description.clone(),
                    quantity: item.quantity.to_string(),
                    price: item.price.to_string(),
                })
                .collect(),
            status: invoice.status,
            date: to_input(invoice.date),
            due_date: to_input(invoice.due_date),
        }
    }

    fn into_entity(
        &self,
        id: <Invoice as AggregateRoot>::Id,
        _base: Option<&Invoice>,
    ) -> Result<Invoice, ValidationErrors> {
        let mut check = FieldChecker::new();
        let customer = check.required("customer", &self.customer);
        let date = check.date("date", &self.date);
        let due_date = check.date("due_date", &self.due_date);

        if self.items.is_empty() {
            check.fail("items", "Add at least one line item");
        }
        let items: Vec<InvoiceItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let description = check.required(&format!("items[{i}].description"), &item.description);
                let quantity_field = format!("items[{i}].quantity");
                let quantity: u32 = check.number(&quantity_field, &item.quantity);
                if quantity == 0 && item.quantity.trim().parse::<u32>().is_ok() {
                    check.fail(quantity_field, "Quantity must be at least 1");
                }
                let price = check.amount(&format!("items[{i}].price"), &item.price);
                InvoiceItem {
                    description,
                    quantity,
                    price,
                }
            })
            .collect();

        if due_date < date {
            check.fail("due_date", "Due date cannot be before the invoice date");
        }
        check.finish()?;

        Ok(Invoice {
            id,
            customer,
            items,
            status: self.status,
            date,
            due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_invoice::InvoiceId;
    use crate::domain::common::AggregateId;

    fn form() -> InvoiceForm {
        InvoiceForm {
            customer: "Tech Solutions Inc.".into(),
            items: vec![
                InvoiceItemForm::new("Design", "2", "10"),
                InvoiceItemForm::new("Hosting", "1", "5"),
            ],
            status: InvoiceStatus::Pending,
            date: "2024-03-15".into(),
            due_date: "2024-04-15".into(),
        }
    }

    #[test]
    fn test_amount_is_derived_from_items() {
        let invoice = form().into_entity(InvoiceId::from_sequence(4), None).unwrap();
        assert_eq!(invoice.id.as_str(), "INV-004");
        assert_eq!(invoice.amount(), 25.0);
        assert_eq!(form().preview_amount(), 25.0);
    }

    #[test]
    fn test_item_errors_are_indexed() {
        let mut bad = form();
        bad.items[1].quantity = "0".into();
        bad.items[1].price = "abc".into();
        let errors = bad.validate().unwrap_err();
        assert!(errors.has("items[1].quantity"));
        assert_eq!(errors.for_field("items[1].price"), Some("Must be a number"));
        assert!(!errors.has("items[0].quantity"));
    }

    #[test]
    fn test_requires_items_and_ordered_dates() {
        let mut bad = form();
        bad.items.clear();
        bad.due_date = "2024-03-01".into();
        let errors = bad.validate().unwrap_err();
        assert!(errors.has("items"));
        assert!(errors.has("due_date"));
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut f = InvoiceForm::default();
        assert_eq!(f.items.len(), 1);
        f.add_item();
        f.remove_item(0);
        f.remove_item(10);
        assert_eq!(f.items.len(), 1);
    }

    #[test]
    fn test_create_through_controller() {
        use crate::shared::fixtures::SeedData;
        use crate::shared::list::{FormController, ResourceCollection};
        use crate::shared::notifications::NotificationStore;

        let mut invoices = ResourceCollection::new(SeedData::demo().invoices);
        let mut notifications = NotificationStore::new();
        let mut controller: FormController<InvoiceForm> = FormController::new();

        controller.open_for_create();
        controller.edit(|f| *f = form());
        let id = controller.submit(&mut invoices, &mut notifications).unwrap();

        assert_eq!(id.as_str(), "INV-004");
        assert_eq!(invoices.find(&id).map(|i| i.amount()), Some(25.0));
        assert_eq!(notifications.unread_count(), 1);
    }

    #[test]
    fn test_unchanged_edit_keeps_seed_invoices() {
        use crate::shared::fixtures::SeedData;
        use crate::shared::list::{FormController, ResourceCollection};
        use crate::shared::notifications::NotificationStore;

        let mut invoices = ResourceCollection::new(SeedData::demo().invoices);
        let mut notifications = NotificationStore::new();
        let mut controller: FormController<InvoiceForm> = FormController::new();

        for original in SeedData::demo().invoices {
            controller.open_for_edit(&original);
            let id = controller.submit(&mut invoices, &mut notifications).unwrap();
            assert_eq!(invoices.find(&id), Some(&original));
        }
        assert_eq!(invoices.items(), SeedData::demo().invoices.as_slice());
    }
}
