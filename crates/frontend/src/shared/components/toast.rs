//! Всплывающие уведомления в правом верхнем углу.
//!
//! Показываются самые свежие непрочитанные записи ленты (не больше
//! `notifications.toast_limit`); крестик удаляет запись из ленты.

use contracts::shared::notifications::{Notification, NotificationKind};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::state::AppState;

pub fn kind_icon(kind: NotificationKind) -> AnyView {
    match kind {
        NotificationKind::Success => icon("check-circle"),
        NotificationKind::Error => icon("alert-circle"),
        NotificationKind::Info => icon("info"),
    }
}

#[component]
pub fn ToastStack(state: AppState) -> impl IntoView {
    let limit = state.config.with_value(|c| c.notifications.toast_limit);

    let toasts = Memo::new(move |_| {
        state
            .notifications
            .with(|store| store.unread().take(limit).cloned().collect::<Vec<Notification>>())
    });

    let dismiss = Callback::new(move |id: u64| {
        state.notifications.update(|store| {
            store.remove(id);
        });
    });

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|n| n.id
                children=move |notification| view! { <Toast notification=notification on_dismiss=dismiss /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification, on_dismiss: Callback<u64>) -> impl IntoView {
    let id = notification.id;
    let class = format!("toast toast--{}", notification.kind.as_str());

    view! {
        <div class=class role="status">
            <div class="toast__icon">{kind_icon(notification.kind)}</div>
            <p class="toast__message">{notification.message}</p>
            <button class="toast__close" title="Dismiss" on:click=move |_| on_dismiss.run(id)>
                {icon("x")}
            </button>
        </div>
    }
}
