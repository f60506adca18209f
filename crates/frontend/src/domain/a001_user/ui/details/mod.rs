use contracts::domain::a001_user::{UserForm, UserRole, UserStatus};
use contracts::shared::list::FormController;
use leptos::prelude::*;

use crate::shared::components::form_fields::{form_choice, form_error, form_setter, form_text, ChoiceField, TextField};
use crate::shared::modal::Modal;

/// Модальное окно создания/редактирования пользователя
#[component]
pub fn UserFormModal(form: RwSignal<FormController<UserForm>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(|f| f.is_editing());
    let title = Signal::derive(move || if editing() { "Edit User".to_string() } else { "Add New User".to_string() });
    let on_close = Callback::new(move |_: ()| form.update(|f| f.cancel()));

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <TextField
                    label="Full Name"
                    id="user-name"
                    value=form_text(form, |f: &UserForm| f.name.clone())
                    on_input=form_setter(form, |f: &mut UserForm, v: String| f.name = v)
                    error=form_error(form, "name")
                />
                <TextField
                    label="Email"
                    id="user-email"
                    input_type="email"
                    value=form_text(form, |f: &UserForm| f.email.clone())
                    on_input=form_setter(form, |f: &mut UserForm, v: String| f.email = v)
                    error=form_error(form, "email")
                />
                <ChoiceField
                    label="Role"
                    id="user-role"
                    value=form_choice(form, |f: &UserForm| f.role)
                    on_change=form_setter(form, |f: &mut UserForm, v: UserRole| f.role = v)
                />
                <ChoiceField
                    label="Status"
                    id="user-status"
                    value=form_choice(form, |f: &UserForm| f.status)
                    on_change=form_setter(form, |f: &mut UserForm, v: UserStatus| f.status = v)
                />
                <TextField
                    label="Joined Date"
                    id="user-joined"
                    input_type="date"
                    value=form_text(form, |f: &UserForm| f.joined_date.clone())
                    on_input=form_setter(form, |f: &mut UserForm, v: String| f.joined_date = v)
                    error=form_error(form, "joined_date")
                />

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">
                        {move || if editing() { "Save Changes" } else { "Add User" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
