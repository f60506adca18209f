use contracts::domain::a005_invoice::{Invoice, InvoiceForm, InvoiceId, InvoiceStatus};
use contracts::domain::common::{Choice, QuickAction};
use contracts::shared::date_utils::to_input;
use contracts::shared::list::{delete_entity, filter_list, toggle_status, FilterState, FormController, SortState};
use contracts::shared::money::format_amount;
use leptos::prelude::*;
use thaw::*;

use super::details::InvoiceFormModal;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, confirm_action, EmptyState, FilterSelect, ResetFiltersButton, SearchInput, SortHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::AppState;

fn status_color(status: InvoiceStatus) -> BadgeColor {
    match status {
        InvoiceStatus::Paid => BadgeColor::Success,
        InvoiceStatus::Pending => BadgeColor::Warning,
        InvoiceStatus::Overdue => BadgeColor::Danger,
    }
}

#[component]
pub fn InvoicesList(state: AppState) -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let sort = RwSignal::new(SortState::default());
    let form = RwSignal::new(FormController::<InvoiceForm>::new());

    let rows = Memo::new(move |_| {
        let mut items = state
            .invoices
            .with(|invoices| filter.with(|f| filter_list(invoices.items(), f)));
        sort.with(|s| s.apply(&mut items));
        items
    });

    let delete_invoice = move |invoice: &Invoice| {
        if confirm_action(&format!("Are you sure you want to delete invoice {}?", invoice.id)) {
            let id = invoice.id.clone();
            state.apply(state.invoices, |invoices, n| delete_entity(invoices, &id, n));
        }
    };

    let toggle_paid = move |id: InvoiceId| {
        state.apply(state.invoices, |invoices, n| toggle_status(invoices, &id, n));
    };

    let submit = Callback::new(move |_: ()| {
        state.apply(state.invoices, |invoices, n| {
            form.update(|f| {
                if let Err(e) = f.submit(invoices, n) {
                    log::debug!("invoice form: {}", e);
                }
            })
        });
    });

    view! {
        <PageFrame page_id="a005_invoices--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Invoices"</h1>
                    <Badge>{move || state.invoices.with(|i| i.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form.update(|f| f.open_for_create())
                    >
                        {icon("plus")}
                        " Create Invoice"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filter=filter placeholder="Search by invoice number or customer..." />
                        <FilterSelect label="Status" field="status" options=choice_options::<InvoiceStatus>() filter=filter />
                        <ResetFiltersButton filter=filter />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortHeader label="Invoice" field="id" sort=sort />
                                <SortHeader label="Customer" field="customer" sort=sort />
                                <SortHeader label="Amount" field="amount" sort=sort />
                                <SortHeader label="Status" field="status" sort=sort />
                                <SortHeader label="Date" field="date" sort=sort />
                                <SortHeader label="Due Date" field="due_date" sort=sort />
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|invoice| {
                                let id = invoice.id.clone();
                                let for_edit = invoice.clone();
                                let for_delete = invoice.clone();
                                let items_hint = format!("{} line item(s)", invoice.items.len());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 500;">{invoice.id.to_string()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{invoice.customer.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span title=items_hint>{format!("${}", format_amount(invoice.amount()))}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge color=status_color(invoice.status)>{invoice.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{to_input(invoice.date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{to_input(invoice.due_date)}</TableCellLayout>
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
                                                    on_click=move |_| toggle_paid(id.clone())
                                                >
                                                    {invoice.action_label()}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_invoice(&for_delete)
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
                        <EmptyState message="No invoices found." />
                    </Show>
                </div>
            </div>

            <Show when=move || form.with(|f| f.is_open())>
                <InvoiceFormModal form=form on_submit=submit />
            </Show>
        </PageFrame>
    }
}
