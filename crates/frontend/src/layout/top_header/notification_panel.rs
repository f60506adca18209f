use chrono::{DateTime, Local, Utc};
use contracts::shared::notifications::Notification;
use leptos::prelude::*;

use crate::shared::components::toast::kind_icon;
use crate::shared::icons::icon;
use crate::shared::state::AppState;

fn format_time(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Выпадающая лента уведомлений под колокольчиком
#[component]
pub fn NotificationPanel(state: AppState, on_close: Callback<()>) -> impl IntoView {
    let items = Memo::new(move |_| state.notifications.with(|n| n.notifications().to_vec()));

    let mark_read = move |id: u64| state.notifications.update(|n| n.mark_as_read(id));
    let mark_all = move |_| state.notifications.update(|n| n.mark_all_as_read());
    let clear = move |_| {
        state.notifications.update(|n| n.clear());
        on_close.run(());
    };

    view! {
        <div class="notification-panel">
            <div class="notification-panel__header">
                <span class="notification-panel__title">"Notifications"</span>
                <div class="notification-panel__actions">
                    <button class="button button--link" on:click=mark_all title="Mark all as read">
                        {icon("check-all")}
                    </button>
                    <button class="button button--link" on:click=clear title="Clear">
                        {icon("trash")}
                    </button>
                </div>
            </div>

            <Show
                when=move || items.with(|list| !list.is_empty())
                fallback=|| view! { <p class="notification-panel__empty">"No notifications"</p> }
            >
                <ul class="notification-panel__list">
                    <For
                        each=move || items.get()
                        key=|n: &Notification| (n.id, n.read)
                        children=move |n: Notification| {
                            let id = n.id;
                            view! {
                                <li
                                    class="notification-panel__item"
                                    class:notification-panel__item--unread=!n.read
                                    on:click=move |_| mark_read(id)
                                >
                                    {kind_icon(n.kind)}
                                    <div class="notification-panel__body">
                                        <p>{n.message.clone()}</p>
                                        <span class="notification-panel__time">{format_time(n.timestamp)}</span>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
