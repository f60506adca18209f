use contracts::domain::a005_invoice::{InvoiceForm, InvoiceItemForm, InvoiceStatus};
use contracts::shared::list::FormController;
use contracts::shared::money::format_amount;
use leptos::prelude::*;

use crate::shared::components::form_fields::{
    form_choice, form_error, form_setter, form_text, ChoiceField, FieldError, TextField,
};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Значение поля строки счета по индексу
fn item_text(
    form: RwSignal<FormController<InvoiceForm>>,
    index: usize,
    get: fn(&InvoiceItemForm) -> String,
) -> Signal<String> {
    Signal::derive(move || form.with(|f| f.buffer().items.get(index).map(get).unwrap_or_default()))
}

fn item_setter(
    form: RwSignal<FormController<InvoiceForm>>,
    index: usize,
    set: fn(&mut InvoiceItemForm, String),
) -> Callback<String> {
    Callback::new(move |value: String| {
        form.update(|f| {
            f.edit(|buffer| {
                if let Some(item) = buffer.items.get_mut(index) {
                    set(item, value);
                }
            });
        });
    })
}

fn item_error(form: RwSignal<FormController<InvoiceForm>>, index: usize, field: &'static str) -> Signal<Option<String>> {
    let key = format!("items[{index}].{field}");
    Signal::derive(move || form.with(|f| f.errors().for_field(&key).map(str::to_string)))
}

#[component]
fn InvoiceItemRow(form: RwSignal<FormController<InvoiceForm>>, index: usize) -> impl IntoView {
    let description = item_text(form, index, |i| i.description.clone());
    let quantity = item_text(form, index, |i| i.quantity.clone());
    let price = item_text(form, index, |i| i.price.clone());
    let set_description = item_setter(form, index, |i, v| i.description = v);
    let set_quantity = item_setter(form, index, |i, v| i.quantity = v);
    let set_price = item_setter(form, index, |i, v| i.price = v);

    view! {
        <div class="invoice-item">
            <div class="invoice-item__description">
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.run(event_target_value(&ev))
                />
                <FieldError message=item_error(form, index, "description") />
            </div>
            <div class="invoice-item__quantity">
                <input
                    type="number"
                    min="1"
                    placeholder="Qty"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.run(event_target_value(&ev))
                />
                <FieldError message=item_error(form, index, "quantity") />
            </div>
            <div class="invoice-item__price">
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.run(event_target_value(&ev))
                />
                <FieldError message=item_error(form, index, "price") />
            </div>
            <button
                type="button"
                class="button button--icon"
                title="Remove item"
                on:click=move |_| form.update(|f| {
                    f.edit(|buffer| buffer.remove_item(index));
                })
            >
                {icon("trash")}
            </button>
        </div>
    }
}

#[component]
pub fn InvoiceFormModal(form: RwSignal<FormController<InvoiceForm>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(|f| f.is_editing());
    let title = Signal::derive(move || if editing() { "Edit Invoice".to_string() } else { "Create Invoice".to_string() });
    let on_close = Callback::new(move |_: ()| form.update(|f| f.cancel()));

    // Строки перерисовываются только при добавлении/удалении
    let item_count = Memo::new(move |_| form.with(|f| f.buffer().items.len()));
    let total = move || format!("${}", format_amount(form.with(|f| f.buffer().preview_amount())));

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <TextField
                    label="Customer"
                    id="invoice-customer"
                    value=form_text(form, |f: &InvoiceForm| f.customer.clone())
                    on_input=form_setter(form, |f: &mut InvoiceForm, v: String| f.customer = v)
                    error=form_error(form, "customer")
                />

                <div class="form-group">
                    <label>"Line Items"</label>
                    {move || (0..item_count.get())
                        .map(|index| view! { <InvoiceItemRow form=form index=index /> })
                        .collect_view()}
                    <FieldError message=form_error(form, "items") />
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| form.update(|f| {
                            f.edit(InvoiceForm::add_item);
                        })
                    >
                        {icon("plus")}
                        " Add Item"
                    </button>
                    <div class="invoice-total">
                        <span>"Total: "</span>
                        <strong>{total}</strong>
                    </div>
                </div>

                <ChoiceField
                    label="Status"
                    id="invoice-status"
                    value=form_choice(form, |f: &InvoiceForm| f.status)
                    on_change=form_setter(form, |f: &mut InvoiceForm, v: InvoiceStatus| f.status = v)
                />
                <TextField
                    label="Invoice Date"
                    id="invoice-date"
                    input_type="date"
                    value=form_text(form, |f: &InvoiceForm| f.date.clone())
                    on_input=form_setter(form, |f: &mut InvoiceForm, v: String| f.date = v)
                    error=form_error(form, "date")
                />
                <TextField
                    label="Due Date"
                    id="invoice-due-date"
                    input_type="date"
                    value=form_text(form, |f: &InvoiceForm| f.due_date.clone())
                    on_input=form_setter(form, |f: &mut InvoiceForm, v: String| f.due_date = v)
                    error=form_error(form, "due_date")
                />

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">
                        {move || if editing() { "Save Changes" } else { "Create Invoice" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
