use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub api_base_url: String,
    pub admin_token: String,
    pub catalog_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_base_url: env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            catalog_path: env::var("CATALOG_PATH").unwrap_or_else(|_| "catalog.json".to_string()),
        }
    }
}
