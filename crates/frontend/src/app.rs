use crate::layout::Shell;
use crate::shared::state::{load_app_config, AppState};
use contracts::shared::fixtures::SeedData;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Единое состояние панели: создается один раз и передается страницам явно
    let state = AppState::new(load_app_config(), SeedData::demo());

    view! {
        <Shell state=state />
    }
}
