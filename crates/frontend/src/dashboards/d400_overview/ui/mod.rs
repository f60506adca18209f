use contracts::dashboards::d400_overview::DashboardSummary;
use contracts::shared::money::format_amount;
use leptos::prelude::*;

use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::state::{AppPage, AppState};

/// Главная страница: сводные показатели по всем разделам
#[component]
pub fn OverviewDashboard(state: AppState) -> impl IntoView {
    let summary = Memo::new(move |_| {
        state.users.with(|users| {
            state.jobs.with(|jobs| {
                state.applications.with(|applications| {
                    state.tickets.with(|tickets| {
                        state.invoices.with(|invoices| {
                            state.payments.with(|payments| {
                                DashboardSummary::compute(users, jobs, applications, tickets, invoices, payments)
                            })
                        })
                    })
                })
            })
        })
    });

    let total_users = Signal::derive(move || summary.with(|s| s.total_users.to_string()));
    let active_users = Signal::derive(move || summary.with(|s| Some(format!("{} active", s.active_users))));
    let open_jobs = Signal::derive(move || summary.with(|s| s.open_jobs.to_string()));
    let pending_applications = Signal::derive(move || summary.with(|s| s.pending_applications.to_string()));
    let open_tickets = Signal::derive(move || summary.with(|s| s.open_tickets.to_string()));
    let revenue = Signal::derive(move || summary.with(|s| format!("${}", format_amount(s.revenue))));
    let outstanding = Signal::derive(move || summary.with(|s| format!("${}", format_amount(s.outstanding_amount))));

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard Overview"</h1>
                </div>
            </div>
            <div class="page__content">
                <p class="page__intro">
                    "Welcome to your admin dashboard. Here you'll find a summary of your site's activity."
                </p>
                <div class="stat-grid">
                    <StatCard label="Total Users" icon_name="users" value=total_users subtitle=active_users />
                    <StatCard label="Open Jobs" icon_name="briefcase" value=open_jobs />
                    <StatCard
                        label="Pending Applications"
                        icon_name="file-text"
                        value=pending_applications
                    />
                    <StatCard label="Open Tickets" icon_name="message" value=open_tickets tone=StatTone::Warning />
                    <StatCard label="Revenue" icon_name="payments" value=revenue tone=StatTone::Good />
                    <StatCard label="Outstanding" icon_name="invoices" value=outstanding tone=StatTone::Bad />
                </div>
                <div class="dashboard__shortcuts">
                    {[AppPage::Users, AppPage::Tickets, AppPage::Invoices]
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button class="btn-secondary" on:click=move |_| state.navigate(page)>
                                    {page.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
