use contracts::domain::a003_application::{Application, ApplicationForm, ApplicationId, ApplicationStatus};
use contracts::domain::common::{AggregateId, Choice, QuickAction};
use contracts::shared::date_utils::to_input;
use contracts::shared::list::{delete_entity, filter_list, toggle_status, FilterState, FormController, SortState};
use leptos::prelude::*;
use thaw::*;

use super::details::ApplicationFormModal;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, confirm_action, EmptyState, FilterOptions, FilterSelect, ResetFiltersButton, SearchInput,
    SortHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::AppState;

fn status_color(status: ApplicationStatus) -> BadgeColor {
    match status {
        ApplicationStatus::UnderReview => BadgeColor::Warning,
        ApplicationStatus::Shortlisted => BadgeColor::Informative,
        ApplicationStatus::Rejected => BadgeColor::Danger,
        ApplicationStatus::Hired => BadgeColor::Success,
    }
}

#[component]
pub fn ApplicationsList(state: AppState) -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let sort = RwSignal::new(SortState::default());
    let form = RwSignal::new(FormController::<ApplicationForm>::new());

    let rows = Memo::new(move |_| {
        let mut items = state
            .applications
            .with(|apps| filter.with(|f| filter_list(apps.items(), f)));
        sort.with(|s| s.apply(&mut items));
        items
    });

    // Вакансии для фильтра и формы: (id, название)
    let job_options = Memo::new(move |_| -> FilterOptions {
        state.jobs.with(|jobs| {
            jobs.items()
                .iter()
                .map(|j| (j.id.as_string(), j.title.clone()))
                .collect()
        })
    });

    let delete_application = move |app: &Application| {
        if confirm_action(&format!("Are you sure you want to delete application {}?", app.id)) {
            let id = app.id.clone();
            state.apply(state.applications, |apps, n| delete_entity(apps, &id, n));
        }
    };

    let advance_application = move |id: ApplicationId| {
        state.apply(state.applications, |apps, n| toggle_status(apps, &id, n));
    };

    let submit = Callback::new(move |_: ()| {
        state.apply(state.applications, |apps, n| {
            form.update(|f| {
                if let Err(e) = f.submit(apps, n) {
                    log::debug!("application form: {}", e);
                }
            })
        });
    });

    view! {
        <PageFrame page_id="a003_applications--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Applications"</h1>
                    <Badge>{move || state.applications.with(|a| a.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form.update(|f| f.open_for_create())
                    >
                        {icon("plus")}
                        " Add Application"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filter=filter placeholder="Search by candidate or email..." />
                        <FilterSelect
                            label="Status"
                            field="status"
                            options=choice_options::<ApplicationStatus>()
                            filter=filter
                        />
                        <FilterSelect label="Job" field="job_id" options=job_options filter=filter />
                        <ResetFiltersButton filter=filter />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortHeader label="ID" field="id" sort=sort />
                                <SortHeader label="Candidate" field="candidate" sort=sort />
                                <SortHeader label="Email" field="email" sort=sort />
                                <SortHeader label="Job" field="job_id" sort=sort />
                                <SortHeader label="Status" field="status" sort=sort />
                                <SortHeader label="Applied" field="applied_date" sort=sort />
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|app| {
                                let id = app.id.clone();
                                let job_title = state.jobs.with(|jobs| app.job_title(jobs));
                                let for_edit = app.clone();
                                let for_delete = app.clone();
                                let can_advance = app.next_status() != app.status;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{app.id.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{app.candidate.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{app.email.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{job_title}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge color=status_color(app.status)>{app.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{to_input(app.applied_date)}</TableCellLayout>
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
                                                    disabled=!can_advance
                                                    on_click=move |_| advance_application(id.clone())
                                                >
                                                    {app.action_label()}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_application(&for_delete)
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
                        <EmptyState message="No applications found." />
                    </Show>
                </div>
            </div>

            <Show when=move || form.with(|f| f.is_open())>
                <ApplicationFormModal form=form jobs=job_options on_submit=submit />
            </Show>
        </PageFrame>
    }
}
