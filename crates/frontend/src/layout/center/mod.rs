use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_user::ui::list::UsersList;
use crate::domain::a002_job_vacancy::ui::list::JobVacanciesList;
use crate::domain::a003_application::ui::list::ApplicationsList;
use crate::domain::a004_ticket::ui::list::TicketsList;
use crate::domain::a005_invoice::ui::list::InvoicesList;
use crate::domain::a006_payment::ui::list::PaymentsList;
use crate::shared::state::{AppPage, AppState};
use crate::system::profile::AdminProfilePage;
use leptos::prelude::*;

/// Область контента: страница, выбранная в меню
#[component]
pub fn Center(state: AppState) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-content">
            {move || match state.page.get() {
                AppPage::Dashboard => view! { <OverviewDashboard state=state /> }.into_any(),
                AppPage::Users => view! { <UsersList state=state /> }.into_any(),
                AppPage::Profile => view! { <AdminProfilePage state=state /> }.into_any(),
                AppPage::JobVacancies => view! { <JobVacanciesList state=state /> }.into_any(),
                AppPage::Applications => view! { <ApplicationsList state=state /> }.into_any(),
                AppPage::Tickets => view! { <TicketsList state=state /> }.into_any(),
                AppPage::Invoices => view! { <InvoicesList state=state /> }.into_any(),
                AppPage::Payments => view! { <PaymentsList state=state /> }.into_any(),
            }}
        </main>
    }
}
