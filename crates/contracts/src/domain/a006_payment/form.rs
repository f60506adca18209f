use crate::domain::a005_invoice::InvoiceId;
use crate::domain::common::AggregateRoot;
use crate::shared::date_utils::{to_input, today};
use crate::shared::error::ValidationErrors;
use crate::shared::list::{EntityForm, FieldChecker};

use super::aggregate::{Payment, PaymentMethod, PaymentStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    /// Номер счета (необязательно)
    pub invoice_id: String,
    pub customer: String,
    pub amount: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub currency: String,
    pub date: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            invoice_id: String::new(),
            customer: String::new(),
            amount: String::new(),
            method: PaymentMethod::BankTransfer,
            status: PaymentStatus::Pending,
            currency: "USD".to_string(),
            date: to_input(today()),
        }
    }
}

impl EntityForm for PaymentForm {
    type Entity = Payment;

    fn from_entity(payment: &Payment) -> Self {
        Self {
            invoice_id: payment
                .invoice_id
                .as_ref()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
            customer: payment.customer.clone(),
            amount: payment.amount.to_string(),
            method: payment.method,
            status: payment.status,
            currency: payment.currency.clone(),
            date: to_input(payment.date),
        }
    }

    fn into_entity(
        &self,
        id: <Payment as AggregateRoot>::Id,
        _base: Option<&Payment>,
    ) -> Result<Payment, ValidationErrors> {
        let mut check = FieldChecker::new();
        let customer = check.required("customer", &self.customer);
        let amount = check.amount("amount", &self.amount);
        if amount == 0.0 && check_parsed(&self.amount) {
            check.fail("amount", "Amount must be greater than zero");
        }
        let currency = check.required("currency", &self.currency).to_uppercase();
        if !currency.is_empty() && (currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic())) {
            check.fail("currency", "Use a 3-letter currency code");
        }
        let date = check.date("date", &self.date);
        check.finish()?;

        let invoice_id = Some(self.invoice_id.trim())
            .filter(|s| !s.is_empty())
            .map(InvoiceId::new);

        Ok(Payment {
            id,
            invoice_id,
            customer,
            amount,
            method: self.method,
            status: self.status,
            currency,
            date,
        })
    }
}

fn check_parsed(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_payment::PaymentId;
    use crate::domain::common::AggregateId;

    #[test]
    fn test_currency_is_normalized() {
        let form = PaymentForm {
            customer: "Digital Solutions".into(),
            amount: "800".into(),
            currency: "kes".into(),
            method: PaymentMethod::MPesa,
            ..PaymentForm::default()
        };
        let payment = form.into_entity(PaymentId::from_sequence(4), None).unwrap();
        assert_eq!(payment.currency, "KES");
        assert_eq!(payment.amount, 800.0);
        assert_eq!(payment.invoice_id, None);
    }

    #[test]
    fn test_rejects_zero_amount_and_bad_currency() {
        let form = PaymentForm {
            customer: "Digital Solutions".into(),
            amount: "0".into(),
            currency: "KSHS".into(),
            ..PaymentForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.for_field("amount"), Some("Amount must be greater than zero"));
        assert!(errors.has("currency"));
    }

    #[test]
    fn test_unchanged_edit_keeps_seed_payments() {
        use crate::shared::fixtures::SeedData;
        use crate::shared::list::{FormController, ResourceCollection};
        use crate::shared::notifications::NotificationStore;

        let mut payments = ResourceCollection::new(SeedData::demo().payments);
        let mut notifications = NotificationStore::new();
        let mut controller: FormController<PaymentForm> = FormController::new();

        for original in SeedData::demo().payments {
            controller.open_for_edit(&original);
            let id = controller.submit(&mut payments, &mut notifications).unwrap();
            assert_eq!(payments.find(&id), Some(&original));
        }
        assert_eq!(payments.items(), SeedData::demo().payments.as_slice());
        assert_eq!(notifications.len(), 3);
    }
}
