use contracts::domain::a003_application::{ApplicationForm, ApplicationStatus};
use contracts::shared::list::FormController;
use leptos::prelude::*;

use crate::shared::components::form_fields::{
    form_choice, form_error, form_setter, form_text, ChoiceField, OptionField, TextField,
};
use crate::shared::modal::Modal;

#[component]
pub fn ApplicationFormModal(
    form: RwSignal<FormController<ApplicationForm>>,
    /// Вакансии: (id, название)
    #[prop(into)]
    jobs: Signal<Vec<(String, String)>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let editing = move || form.with(|f| f.is_editing());
    let title = Signal::derive(move || {
        if editing() { "Edit Application".to_string() } else { "Add Application".to_string() }
    });
    let on_close = Callback::new(move |_: ()| form.update(|f| f.cancel()));

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <TextField
                    label="Candidate"
                    id="application-candidate"
                    value=form_text(form, |f: &ApplicationForm| f.candidate.clone())
                    on_input=form_setter(form, |f: &mut ApplicationForm, v: String| f.candidate = v)
                    error=form_error(form, "candidate")
                />
                <TextField
                    label="Email"
                    id="application-email"
                    input_type="email"
                    value=form_text(form, |f: &ApplicationForm| f.email.clone())
                    on_input=form_setter(form, |f: &mut ApplicationForm, v: String| f.email = v)
                    error=form_error(form, "email")
                />
                <OptionField
                    label="Job Vacancy"
                    id="application-job"
                    options=jobs
                    empty_label="Select a job..."
                    value=form_text(form, |f: &ApplicationForm| f.job_id.clone())
                    on_change=form_setter(form, |f: &mut ApplicationForm, v: String| f.job_id = v)
                    error=form_error(form, "job_id")
                />
                <ChoiceField
                    label="Status"
                    id="application-status"
                    value=form_choice(form, |f: &ApplicationForm| f.status)
                    on_change=form_setter(form, |f: &mut ApplicationForm, v: ApplicationStatus| f.status = v)
                />
                <TextField
                    label="Applied Date"
                    id="application-date"
                    input_type="date"
                    value=form_text(form, |f: &ApplicationForm| f.applied_date.clone())
                    on_input=form_setter(form, |f: &mut ApplicationForm, v: String| f.applied_date = v)
                    error=form_error(form, "applied_date")
                />

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">
                        {move || if editing() { "Save Changes" } else { "Add Application" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
