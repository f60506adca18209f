//! TopHeader component - application top bar.
//!
//! Contains:
//! - Title of the current page
//! - Notification bell with unread counter and dropdown panel
//! - Admin user badge

mod notification_panel;

use crate::shared::icons::icon;
use crate::shared::state::AppState;
use leptos::prelude::*;
use notification_panel::NotificationPanel;

#[component]
pub fn TopHeader(state: AppState) -> impl IntoView {
    let panel_open = RwSignal::new(false);
    let unread = Memo::new(move |_| state.notifications.with(|n| n.unread_count()));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{move || state.page.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__bell">
                    <button
                        class="top-header__icon-btn"
                        title="Notifications"
                        on:click=move |_| panel_open.update(|open| *open = !*open)
                    >
                        {icon("bell")}
                        <Show when=move || { unread.get() > 0 }>
                            <span class="top-header__badge">{move || unread.get().to_string()}</span>
                        </Show>
                    </button>
                    <Show when=move || panel_open.get()>
                        <NotificationPanel state=state on_close=Callback::new(move |_: ()| panel_open.set(false)) />
                    </Show>
                </div>

                <div class="top-header__user">
                    <img
                        class="top-header__avatar"
                        src="https://placehold.co/40x40/6366F1/FFFFFF?text=A"
                        alt="Admin Avatar"
                    />
                    <span>"Admin User"</span>
                </div>
            </div>
        </div>
    }
}
