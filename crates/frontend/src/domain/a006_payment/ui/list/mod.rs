use contracts::domain::a006_payment::{Payment, PaymentForm, PaymentMethod, PaymentStatus};
use contracts::domain::common::Choice;
use contracts::shared::date_utils::to_input;
use contracts::shared::list::{delete_entity, filter_list, FilterState, FormController, SortState};
use contracts::shared::money::format_money;
use leptos::prelude::*;
use thaw::*;

use super::details::PaymentFormModal;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, confirm_action, EmptyState, FilterSelect, ResetFiltersButton, SearchInput, SortHeader,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::AppState;

fn status_color(status: PaymentStatus) -> BadgeColor {
    match status {
        PaymentStatus::Completed => BadgeColor::Success,
        PaymentStatus::Pending => BadgeColor::Warning,
        PaymentStatus::Failed => BadgeColor::Danger,
    }
}

#[component]
pub fn PaymentsList(state: AppState) -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let sort = RwSignal::new(SortState::default());
    let form = RwSignal::new(FormController::<PaymentForm>::new());

    let rows = Memo::new(move |_| {
        let mut items = state
            .payments
            .with(|payments| filter.with(|f| filter_list(payments.items(), f)));
        sort.with(|s| s.apply(&mut items));
        items
    });

    // Счета для выбора в форме платежа
    let invoice_options = Signal::derive(move || {
        state.invoices.with(|invoices| {
            invoices
                .items()
                .iter()
                .map(|inv| (inv.id.to_string(), format!("{} - {}", inv.id, inv.customer)))
                .collect::<Vec<_>>()
        })
    });

    let delete_payment = move |payment: &Payment| {
        if confirm_action(&format!("Are you sure you want to delete payment {}?", payment.id)) {
            let id = payment.id.clone();
            state.apply(state.payments, |payments, n| delete_entity(payments, &id, n));
        }
    };

    let submit = Callback::new(move |_: ()| {
        state.apply(state.payments, |payments, n| {
            form.update(|f| {
                if let Err(e) = f.submit(payments, n) {
                    log::debug!("payment form: {}", e);
                }
            })
        });
    });

    view! {
        <PageFrame page_id="a006_payments--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Payments"</h1>
                    <Badge>{move || state.payments.with(|p| p.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form.update(|f| f.open_for_create())
                    >
                        {icon("plus")}
                        " Record Payment"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput filter=filter placeholder="Search by payment, customer or method..." />
                        <FilterSelect label="Status" field="status" options=choice_options::<PaymentStatus>() filter=filter />
                        <FilterSelect label="Method" field="method" options=choice_options::<PaymentMethod>() filter=filter />
                        <ResetFiltersButton filter=filter />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortHeader label="Payment" field="id" sort=sort />
                                <SortHeader label="Customer" field="customer" sort=sort />
                                <TableHeaderCell>"Invoice"</TableHeaderCell>
                                <SortHeader label="Amount" field="amount" sort=sort />
                                <SortHeader label="Method" field="method" sort=sort />
                                <SortHeader label="Status" field="status" sort=sort />
                                <SortHeader label="Date" field="date" sort=sort />
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|payment| {
                                let invoice = state.invoices.with(|invoices| payment.invoice_label(invoices));
                                let for_edit = payment.clone();
                                let for_delete = payment.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 500;">{payment.id.to_string()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{payment.customer.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{invoice}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_money(payment.amount, &payment.currency)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{payment.method.label()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge color=status_color(payment.status)>{payment.status.label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{to_input(payment.date)}</TableCellLayout>
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
                                                    on_click=move |_| delete_payment(&for_delete)
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
                        <EmptyState message="No payments found." />
                    </Show>
                </div>
            </div>

            <Show when=move || form.with(|f| f.is_open())>
                <PaymentFormModal form=form invoices=invoice_options on_submit=submit />
            </Show>
        </PageFrame>
    }
}
