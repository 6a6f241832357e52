use crate::config::AppConfig;
use crate::models::Catalog;
use crate::services::api::BookingApi;
use crate::services::triage::TriageBoard;

pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn BookingApi>,
    pub catalog: Catalog,
    pub board: TriageBoard,
}
