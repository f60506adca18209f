use contracts::domain::a004_ticket::{TicketForm, TicketPriority, TicketStatus};
use contracts::shared::list::FormController;
use leptos::prelude::*;

use crate::shared::components::form_fields::{form_choice, form_error, form_setter, form_text, ChoiceField, TextField};
use crate::shared::modal::Modal;

#[component]
pub fn TicketFormModal(form: RwSignal<FormController<TicketForm>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(|f| f.is_editing());
    let title = Signal::derive(move || if editing() { "Edit Ticket".to_string() } else { "New Ticket".to_string() });
    let on_close = Callback::new(move |_: ()| form.update(|f| f.cancel()));

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <TextField
                    label="Subject"
                    id="ticket-subject"
                    value=form_text(form, |f: &TicketForm| f.subject.clone())
                    on_input=form_setter(form, |f: &mut TicketForm, v: String| f.subject = v)
                    error=form_error(form, "subject")
                />
                <TextField
                    label="Customer"
                    id="ticket-customer"
                    value=form_text(form, |f: &TicketForm| f.customer.clone())
                    on_input=form_setter(form, |f: &mut TicketForm, v: String| f.customer = v)
                    error=form_error(form, "customer")
                />
                <ChoiceField
                    label="Status"
                    id="ticket-status"
                    value=form_choice(form, |f: &TicketForm| f.status)
                    on_change=form_setter(form, |f: &mut TicketForm, v: TicketStatus| f.status = v)
                />
                <ChoiceField
                    label="Priority"
                    id="ticket-priority"
                    value=form_choice(form, |f: &TicketForm| f.priority)
                    on_change=form_setter(form, |f: &mut TicketForm, v: TicketPriority| f.priority = v)
                />

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">
                        {move || if editing() { "Save Changes" } else { "Create Ticket" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
