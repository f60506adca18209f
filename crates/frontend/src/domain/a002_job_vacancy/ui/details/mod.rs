use contracts::domain::a002_job_vacancy::{JobStatus, JobVacancyForm};
use contracts::shared::list::FormController;
use leptos::prelude::*;

use crate::shared::components::form_fields::{form_choice, form_error, form_setter, form_text, ChoiceField, TextField};
use crate::shared::modal::Modal;

#[component]
pub fn JobVacancyFormModal(form: RwSignal<FormController<JobVacancyForm>>, on_submit: Callback<()>) -> impl IntoView {
    let editing = move || form.with(|f| f.is_editing());
    let title = Signal::derive(move || {
        if editing() { "Edit Job Vacancy".to_string() } else { "Post New Job".to_string() }
    });
    let on_close = Callback::new(move |_: ()| form.update(|f| f.cancel()));

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }>
                <TextField
                    label="Job Title"
                    id="job-title"
                    value=form_text(form, |f: &JobVacancyForm| f.title.clone())
                    on_input=form_setter(form, |f: &mut JobVacancyForm, v: String| f.title = v)
                    error=form_error(form, "title")
                />
                <TextField
                    label="Department"
                    id="job-department"
                    value=form_text(form, |f: &JobVacancyForm| f.department.clone())
                    on_input=form_setter(form, |f: &mut JobVacancyForm, v: String| f.department = v)
                    error=form_error(form, "department")
                />
                <TextField
                    label="Location"
                    id="job-location"
                    value=form_text(form, |f: &JobVacancyForm| f.location.clone())
                    on_input=form_setter(form, |f: &mut JobVacancyForm, v: String| f.location = v)
                    error=form_error(form, "location")
                />
                <ChoiceField
                    label="Status"
                    id="job-status"
                    value=form_choice(form, |f: &JobVacancyForm| f.status)
                    on_change=form_setter(form, |f: &mut JobVacancyForm, v: JobStatus| f.status = v)
                />
                <TextField
                    label="Posted Date"
                    id="job-posted"
                    input_type="date"
                    value=form_text(form, |f: &JobVacancyForm| f.posted_date.clone())
                    on_input=form_setter(form, |f: &mut JobVacancyForm, v: String| f.posted_date = v)
                    error=form_error(form, "posted_date")
                />

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">
                        {move || if editing() { "Save Changes" } else { "Post Job" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
