pub mod app_state;

pub use app_state::{load_app_config, AppPage, AppState};
