//! Профиль администратора (только просмотр)

use leptos::prelude::*;
use thaw::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::state::AppState;

const ADMIN_NAME: &str = "Admin User";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_ROLE: &str = "Super Administrator";
const ADMIN_JOINED: &str = "January 1, 2023";
const ADMIN_AVATAR: &str = "https://placehold.co/120x120/6366F1/FFFFFF?text=AU";

#[component]
fn DetailItem(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="profile__detail">
            <label>{label}</label>
            <p>{value}</p>
        </div>
    }
}

#[component]
pub fn AdminProfilePage(state: AppState) -> impl IntoView {
    let notify = move |message: &'static str| {
        state.notifications.update(|n| {
            n.info(message);
        });
    };

    view! {
        <PageFrame page_id="profile--system" category=PAGE_CAT_SYSTEM>
            <div class="profile">
                <div class="profile__header">
                    <img class="profile__avatar" src=ADMIN_AVATAR alt="Admin Avatar" />
                    <h2 class="profile__name">{ADMIN_NAME}</h2>
                    <p class="profile__email">{ADMIN_EMAIL}</p>
                    <Badge color=BadgeColor::Brand>{ADMIN_ROLE}</Badge>
                </div>

                <section class="profile__section">
                    <h3>"Account Details"</h3>
                    <div class="profile__details">
                        <DetailItem label="Full Name" value=ADMIN_NAME />
                        <DetailItem label="Email Address" value=ADMIN_EMAIL />
                        <DetailItem label="Role" value=ADMIN_ROLE />
                        <DetailItem label="Joined Date" value=ADMIN_JOINED />
                    </div>
                </section>

                <section class="profile__section">
                    <h3>"Settings"</h3>
                    <div class="profile__setting">
                        <span>"Enable Two-Factor Authentication"</span>
                        <Button
                            appearance=ButtonAppearance::Primary
                            size=ButtonSize::Small
                            on_click=move |_| notify("Two-factor authentication is not available in the demo panel")
                        >
                            "Enable"
                        </Button>
                    </div>
                    <div class="profile__setting">
                        <span>"Change Password"</span>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=move |_| notify("Password change is not available in the demo panel")
                        >
                            "Change"
                        </Button>
                    </div>
                </section>

                <Button
                    appearance=ButtonAppearance::Primary
                    attr:style="width: 100%;"
                    on_click=move |_| notify("Profile editing is not available in the demo panel")
                >
                    "Update Profile"
                </Button>
            </div>
        </PageFrame>
    }
}
