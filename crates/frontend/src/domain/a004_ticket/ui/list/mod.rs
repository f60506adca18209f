use contracts::domain::a004_ticket::{
    respond_to_ticket, Ticket, TicketForm, TicketId, TicketPriority, TicketStatus,
};
use contracts::domain::common::{Choice, QuickAction};
use contracts::shared::date_utils::{to_input, today};
use contracts::shared::list::{delete_entity, filter_list, toggle_status, FilterState, FormController, SortState};
use leptos::prelude::*;
use thaw::*;

use super::details::TicketFormModal;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, confirm_action, EmptyState, FilterSelect, ResetFiltersButton, SearchInput, SortHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::AppState;

fn status_color(status: TicketStatus) -> BadgeColor {
    match status {
        TicketStatus::Open => BadgeColor::Danger,
        TicketStatus::InProgress => BadgeColor::Warning,
        TicketStatus::Closed => BadgeColor::Success,
    }
}

fn priority_color(priority: TicketPriority) -> BadgeColor {
    match priority {
        TicketPriority::High => BadgeColor::Severe,
        TicketPriority::Medium => BadgeColor::Warning,
        TicketPriority::Low => BadgeColor::Subtle,
    }
}

#[component]
pub fn TicketsList(state: AppState) -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let sort = RwSignal::new(SortState::default());
    let form = RwSignal::new(FormController::<TicketForm>::new());

    let rows = Memo::new(move |_| {
        let mut items = state.tickets.with(|tickets| filter.with(|f| filter_list(tickets.items(), f)));
        sort.with(|s| s.apply(&mut items));
        items
    });

    let delete_ticket = move |ticket: &Ticket| {
        if confirm_action(&format!("Are you sure you want to delete ticket {}?", ticket.id)) {
            let id = ticket.id.clone();
            state.apply(state.tickets, |tickets, n| delete_entity(tickets, &id, n));
        }
    };

    let toggle_ticket = move |id: TicketId| {
        state.apply(state.tickets, |tickets, n| toggle_status(tickets, &id, n));
    };

    let respond = move |id: TicketId| {
        state.apply(state.tickets, |tickets, n| respond_to_ticket(tickets, &id, today(), n));
    };

    let submit = Callback::new(move |_: ()| {
        state.apply(state.tickets, |tickets, n| {
            form.update(|f| {
                if let Err(e) = f.submit(tickets, n) {
                    log::debug!("ticket form: {}", e);
                }
            })
        });
    });

    view! {
        <PageFrame page_id="a004_tickets--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tickets"</h1>
                    <Badge>{move || state.tickets.with(|t| t.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form.update(|f| f.open_for_create())
                    >
                        {icon("plus")}
                        " New Ticket"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filter=filter placeholder="Search by subject or customer..." />
                        <FilterSelect label="Status" field="status" options=choice_options::<TicketStatus>() filter=filter />
                        <FilterSelect
                            label="Priority"
                            field="priority"
                            options=choice_options::<TicketPriority>()
                            filter=filter
                        />
                        <ResetFiltersButton filter=filter />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortHeader label="ID" field="id" sort=sort />
                                <SortHeader label="Subject" field="subject" sort=sort />
                                <SortHeader label="Customer" field="customer" sort=sort />
                                <SortHeader label="Status" field="status" sort=sort />
                                <SortHeader label="Priority" field="priority" sort=sort />
                                <SortHeader label="Created" field="created" sort=sort />
                                <SortHeader label="Last Response" field="last_response" sort=sort />
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|ticket| {
                                let id_toggle = ticket.id.clone();
                                let id_respond = ticket.id.clone();
                                let for_edit = ticket.clone();
                                let for_delete = ticket.clone();
                                let last_response = ticket
                                    .last_response
                                    .map(to_input)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{ticket.id.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{ticket.subject.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{ticket.customer.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge color=status_color(ticket.status)>{ticket.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge color=priority_color(ticket.priority)>{ticket.priority.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{to_input(ticket.created)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{last_response}</TableCellLayout>
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
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=ticket.status == TicketStatus::Closed
                                                    on_click=move |_| respond(id_respond.clone())
                                                >
                                                    {icon("send")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| toggle_ticket(id_toggle.clone())
                                                >
                                                    {ticket.action_label()}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_ticket(&for_delete)
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
                        <EmptyState message="No tickets found." />
                    </Show>
                </div>
            </div>

            <Show when=move || form.with(|f| f.is_open())>
                <TicketFormModal form=form on_submit=submit />
            </Show>
        </PageFrame>
    }
}
