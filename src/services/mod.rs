pub mod api;
pub mod export;
pub mod intake;
pub mod triage;
