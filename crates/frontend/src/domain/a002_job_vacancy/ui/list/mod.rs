use contracts::domain::a002_job_vacancy::{departments, JobId, JobStatus, JobVacancy, JobVacancyForm};
use contracts::domain::common::{Choice, QuickAction};
use contracts::shared::date_utils::to_input;
use contracts::shared::list::{delete_entity, filter_list, toggle_status, FilterState, FormController, SortState};
use leptos::prelude::*;
use thaw::*;

use super::details::JobVacancyFormModal;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, confirm_action, EmptyState, FilterOptions, FilterSelect, ResetFiltersButton, SearchInput, SortHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::AppState;

fn status_color(status: JobStatus) -> BadgeColor {
    match status {
        JobStatus::Open => BadgeColor::Success,
        JobStatus::Closed => BadgeColor::Subtle,
    }
}

#[component]
pub fn JobVacanciesList(state: AppState) -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let sort = RwSignal::new(SortState::default());
    let form = RwSignal::new(FormController::<JobVacancyForm>::new());

    let rows = Memo::new(move |_| {
        let mut items = state.jobs.with(|jobs| filter.with(|f| filter_list(jobs.items(), f)));
        sort.with(|s| s.apply(&mut items));
        items
    });

    // Отделы берутся из текущих вакансий
    let department_options = Memo::new(move |_| -> FilterOptions {
        state.jobs.with(|jobs| {
            departments(jobs.items())
                .into_iter()
                .map(|d| (d.clone(), d))
                .collect()
        })
    });

    let delete_job = move |job: &JobVacancy| {
        if confirm_action(&format!("Are you sure you want to delete {}?", job.title)) {
            let id = job.id;
            state.apply(state.jobs, |jobs, n| delete_entity(jobs, &id, n));
        }
    };

    let toggle_job = move |id: JobId| {
        state.apply(state.jobs, |jobs, n| toggle_status(jobs, &id, n));
    };

    let submit = Callback::new(move |_: ()| {
        state.apply(state.jobs, |jobs, n| {
            form.update(|f| {
                if let Err(e) = f.submit(jobs, n) {
                    log::debug!("job vacancy form: {}", e);
                }
            })
        });
    });

    view! {
        <PageFrame page_id="a002_job_vacancies--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Job Vacancies"</h1>
                    <Badge>{move || state.jobs.with(|j| j.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form.update(|f| f.open_for_create())
                    >
                        {icon("plus")}
                        " Post Job"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filter=filter placeholder="Search by title, department or location..." />
                        <FilterSelect label="Status" field="status" options=choice_options::<JobStatus>() filter=filter />
                        <FilterSelect label="Department" field="department" options=department_options filter=filter />
                        <ResetFiltersButton filter=filter />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortHeader label="Title" field="title" sort=sort />
                                <SortHeader label="Department" field="department" sort=sort />
                                <SortHeader label="Location" field="location" sort=sort />
                                <SortHeader label="Status" field="status" sort=sort />
                                <SortHeader label="Applications" field="applications" sort=sort />
                                <SortHeader label="Posted" field="posted_date" sort=sort />
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|job| {
                                let id = job.id;
                                let for_edit = job.clone();
                                let for_delete = job.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{job.title.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{job.department.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{job.location.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge color=status_color(job.status)>{job.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{job.applications.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{to_input(job.posted_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| form.update(|f| f.open_for_edit(&for_edit))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| toggle_job(id)
                                                >
                                                    {job.action_label()}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_job(&for_delete)
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || rows.with(|r| r.is_empty())>
                        <EmptyState message="No job vacancies found." />
                    </Show>
                </div>
            </div>

            <Show when=move || form.with(|f| f.is_open())>
                <JobVacancyFormModal form=form on_submit=submit />
            </Show>
        </PageFrame>
    }
}
