pub mod center;
pub mod left;
pub mod top_header;

use crate::shared::components::toast::ToastStack;
use crate::shared::state::AppState;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |           |     Content (current page)   |
/// +-----------+------------------------------+
/// ```
///
/// Toasts are rendered above everything in the top-right corner.
#[component]
pub fn Shell(state: AppState) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Sidebar state=state />

            <div class="app-main">
                <TopHeader state=state />
                <center::Center state=state />
            </div>

            <ToastStack state=state />
        </div>
    }
}
