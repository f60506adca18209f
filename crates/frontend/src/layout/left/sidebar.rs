//! Sidebar: one item per page, the current page is highlighted

use crate::shared::icons::icon;
use crate::shared::state::{AppPage, AppState};
use leptos::prelude::*;

#[component]
pub fn Sidebar(state: AppState) -> impl IntoView {
    let title = state.config.with_value(|c| c.app.title.clone());

    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__brand">{title}</div>
            <nav class="app-sidebar__content">
                {AppPage::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || state.page.get() == page
                                on:click=move |_| state.navigate(page)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(page.icon())}
                                    <span>{page.menu_label()}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="app-sidebar__footer">
                <div
                    class="app-sidebar__item"
                    on:click=move |_| {
                        state.notifications.update(|n| {
                            n.info("Logout is not available in the demo panel");
                        });
                    }
                >
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <span>"Logout"</span>
                    </div>
                </div>
            </div>
        </aside>
    }
}
