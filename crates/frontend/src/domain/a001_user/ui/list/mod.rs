use contracts::domain::a001_user::{User, UserForm, UserId, UserRole, UserStatus};
use contracts::domain::common::{Choice, QuickAction};
use contracts::shared::date_utils::to_input;
use contracts::shared::list::{delete_entity, filter_list, toggle_status, FilterState, FormController, SortState};
use leptos::prelude::*;
use thaw::*;

use super::details::UserFormModal;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, confirm_action, EmptyState, FilterSelect, ResetFiltersButton, SearchInput, SortHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::AppState;

fn status_color(status: UserStatus) -> BadgeColor {
    match status {
        UserStatus::Active => BadgeColor::Success,
        UserStatus::Inactive => BadgeColor::Danger,
    }
}

#[component]
pub fn UsersList(state: AppState) -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let sort = RwSignal::new(SortState::default());
    let form = RwSignal::new(FormController::<UserForm>::new());

    let rows = Memo::new(move |_| {
        let mut items = state.users.with(|users| filter.with(|f| filter_list(users.items(), f)));
        sort.with(|s| s.apply(&mut items));
        items
    });

    let delete_user = move |user: &User| {
        if confirm_action(&format!("Are you sure you want to delete {}?", user.name)) {
            let id = user.id;
            state.apply(state.users, |users, n| delete_entity(users, &id, n));
        }
    };

    let toggle_user = move |id: UserId| {
        state.apply(state.users, |users, n| toggle_status(users, &id, n));
    };

    let submit = Callback::new(move |_: ()| {
        state.apply(state.users, |users, n| {
            form.update(|f| {
                if let Err(e) = f.submit(users, n) {
                    log::debug!("user form: {}", e);
                }
            })
        });
    });

    view! {
        <PageFrame page_id="a001_users--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || state.users.with(|u| u.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form.update(|f| f.open_for_create())
                    >
                        {icon("plus")}
                        " Add User"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filter=filter placeholder="Search by name, email or role..." />
                        <FilterSelect label="Role" field="role" options=choice_options::<UserRole>() filter=filter />
                        <FilterSelect label="Status" field="status" options=choice_options::<UserStatus>() filter=filter />
                        <ResetFiltersButton filter=filter />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortHeader label="Name" field="name" sort=sort />
                                <SortHeader label="Email" field="email" sort=sort />
                                <SortHeader label="Role" field="role" sort=sort />
                                <SortHeader label="Status" field="status" sort=sort />
                                <SortHeader label="Joined" field="joined_date" sort=sort />
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|user| {
                                let id = user.id;
                                let for_edit = user.clone();
                                let for_delete = user.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="table__user">
                                                    <img class="table__avatar" src=user.avatar.clone() alt=user.name.clone() />
                                                    <span style="font-weight: 500;">{user.name.clone()}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{user.role.label()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge color=status_color(user.status)>{user.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{to_input(user.joined_date)}</TableCellLayout>
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
                                                    on_click=move |_| toggle_user(id)
                                                >
                                                    {user.action_label()}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_user(&for_delete)
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
                        <EmptyState message="No users found." />
                    </Show>
                </div>
            </div>

            <Show when=move || form.with(|f| f.is_open())>
                <UserFormModal form=form on_submit=submit />
            </Show>
        </PageFrame>
    }
}
