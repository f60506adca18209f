//! Состояние приложения: текущая страница, лента уведомлений и коллекции.
//!
//! `AppState` - набор сигналов (`Copy`), его передают в компоненты как prop.

use contracts::domain::a001_user::User;
use contracts::domain::a002_job_vacancy::JobVacancy;
use contracts::domain::a003_application::Application;
use contracts::domain::a004_ticket::Ticket;
use contracts::domain::a005_invoice::Invoice;
use contracts::domain::a006_payment::Payment;
use contracts::domain::common::AggregateRoot;
use contracts::shared::config::{load_config, AppConfig};
use contracts::shared::fixtures::SeedData;
use contracts::shared::list::ResourceCollection;
use contracts::shared::notifications::NotificationStore;
use leptos::prelude::*;

/// Ключ localStorage с TOML-переопределением конфигурации
pub const CONFIG_STORAGE_KEY: &str = "admin_dashboard_config";

/// Страницы панели в порядке пунктов меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppPage {
    Dashboard,
    Users,
    Profile,
    JobVacancies,
    Applications,
    Tickets,
    Invoices,
    Payments,
}

impl AppPage {
    pub const ALL: [AppPage; 8] = [
        AppPage::Dashboard,
        AppPage::Users,
        AppPage::Profile,
        AppPage::JobVacancies,
        AppPage::Applications,
        AppPage::Tickets,
        AppPage::Invoices,
        AppPage::Payments,
    ];

    /// Подпись пункта меню
    pub fn menu_label(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "Dashboard",
            AppPage::Users => "Users",
            AppPage::Profile => "Admin Profile",
            AppPage::JobVacancies => "Job Vacancies",
            AppPage::Applications => "Applications",
            AppPage::Tickets => "Tickets",
            AppPage::Invoices => "Invoices",
            AppPage::Payments => "Payments",
        }
    }

    /// Заголовок в верхней панели
    pub fn title(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "Dashboard",
            AppPage::Users => "User Management",
            AppPage::Profile => "Admin Profile",
            AppPage::JobVacancies => "Job Vacancies",
            AppPage::Applications => "Job Applications",
            AppPage::Tickets => "Customer Service Tickets",
            AppPage::Invoices => "Invoicing System",
            AppPage::Payments => "Payment Overview",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "dashboard",
            AppPage::Users => "users",
            AppPage::Profile => "user",
            AppPage::JobVacancies => "briefcase",
            AppPage::Applications => "file-text",
            AppPage::Tickets => "message",
            AppPage::Invoices => "invoices",
            AppPage::Payments => "payments",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub page: RwSignal<AppPage>,
    pub notifications: RwSignal<NotificationStore>,
    pub users: RwSignal<ResourceCollection<User>>,
    pub jobs: RwSignal<ResourceCollection<JobVacancy>>,
    pub applications: RwSignal<ResourceCollection<Application>>,
    pub tickets: RwSignal<ResourceCollection<Ticket>>,
    pub invoices: RwSignal<ResourceCollection<Invoice>>,
    pub payments: RwSignal<ResourceCollection<Payment>>,
    pub config: StoredValue<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, seed: SeedData) -> Self {
        let notifications = NotificationStore::with_retention(config.notifications.retention());
        Self {
            page: RwSignal::new(AppPage::Dashboard),
            notifications: RwSignal::new(notifications),
            users: RwSignal::new(ResourceCollection::new(seed.users)),
            jobs: RwSignal::new(ResourceCollection::new(seed.jobs)),
            applications: RwSignal::new(ResourceCollection::new(seed.applications)),
            tickets: RwSignal::new(ResourceCollection::new(seed.tickets)),
            invoices: RwSignal::new(ResourceCollection::new(seed.invoices)),
            payments: RwSignal::new(ResourceCollection::new(seed.payments)),
            config: StoredValue::new(config),
        }
    }

    pub fn navigate(&self, page: AppPage) {
        log::debug!("navigate: {:?}", page);
        self.page.set(page);
    }

    /// Изменить коллекцию вместе с лентой уведомлений
    pub fn apply<E, R>(
        &self,
        collection: RwSignal<ResourceCollection<E>>,
        f: impl FnOnce(&mut ResourceCollection<E>, &mut NotificationStore) -> R,
    ) -> Option<R>
    where
        E: AggregateRoot,
    {
        let mut result = None;
        self.notifications.update(|store| {
            collection.update(|items| result = Some(f(items, store)));
        });
        result
    }
}

fn read_config_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Конфигурация: переопределение из localStorage или встроенная по умолчанию
pub fn load_app_config() -> AppConfig {
    let override_toml = read_config_override();
    match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config in localStorage[{}]: {}", CONFIG_STORAGE_KEY, e);
            AppConfig::default()
        }
    }
}
