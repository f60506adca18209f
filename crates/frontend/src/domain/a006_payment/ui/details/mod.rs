use contracts::domain::a006_payment::{PaymentForm, PaymentMethod, PaymentStatus};
use contracts::shared::list::FormController;
use leptos::prelude::*;

use crate::shared::components::form_fields::{
    form_choice, form_error, form_setter, form_text, ChoiceField, OptionField, TextField,
};
use crate::shared::modal::Modal;

#[component]
pub fn PaymentFormModal(
    form: RwSignal<FormController<PaymentForm>>,
    /// Счета: (номер, подпись)
    invoices: Signal<Vec<(String, String)>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let editing = move || form.with(|f| f.is_editing());
    let title = Signal::derive(move || if editing() { "Edit Payment".to_string() } else { "Record Payment".to_string() });
    let on_close = Callback::new(move |_: ()| form.update(|f| f.cancel()));

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <OptionField
                    label="Invoice"
                    id="payment-invoice"
                    options=invoices
                    empty_label="None"
                    value=form_text(form, |f: &PaymentForm| f.invoice_id.clone())
                    on_change=form_setter(form, |f: &mut PaymentForm, v: String| f.invoice_id = v)
                />
                <TextField
                    label="Customer"
                    id="payment-customer"
                    value=form_text(form, |f: &PaymentForm| f.customer.clone())
                    on_input=form_setter(form, |f: &mut PaymentForm, v: String| f.customer = v)
                    error=form_error(form, "customer")
                />
                <TextField
                    label="Amount"
                    id="payment-amount"
                    input_type="number"
                    placeholder="0.00"
                    value=form_text(form, |f: &PaymentForm| f.amount.clone())
                    on_input=form_setter(form, |f: &mut PaymentForm, v: String| f.amount = v)
                    error=form_error(form, "amount")
                />
                <TextField
                    label="Currency"
                    id="payment-currency"
                    placeholder="USD"
                    value=form_text(form, |f: &PaymentForm| f.currency.clone())
                    on_input=form_setter(form, |f: &mut PaymentForm, v: String| f.currency = v)
                    error=form_error(form, "currency")
                />
                <ChoiceField
                    label="Payment Method"
                    id="payment-method"
                    value=form_choice(form, |f: &PaymentForm| f.method)
                    on_change=form_setter(form, |f: &mut PaymentForm, v: PaymentMethod| f.method = v)
                />
                <ChoiceField
                    label="Status"
                    id="payment-status"
                    value=form_choice(form, |f: &PaymentForm| f.status)
                    on_change=form_setter(form, |f: &mut PaymentForm, v: PaymentStatus| f.status = v)
                />
                <TextField
                    label="Date"
                    id="payment-date"
                    input_type="date"
                    value=form_text(form, |f: &PaymentForm| f.date.clone())
                    on_input=form_setter(form, |f: &mut PaymentForm, v: String| f.date = v)
                    error=form_error(form, "date")
                />

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">
                        {move || if editing() { "Save Changes" } else { "Record Payment" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
