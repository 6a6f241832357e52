use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use super::{BookingApi, CreateOutcome, NewBookingPayload};
use crate::models::{Booking, BookingStatus};

pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    status: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn create_booking(&self, payload: &NewBookingPayload) -> anyhow::Result<CreateOutcome> {
        let resp = self
            .client
            .post(self.url("/booking/store"))
            .json(payload)
            .send()
            .await
            .context("failed to call booking store endpoint")?;

        let body: Envelope<serde_json::Value> = resp
            .json()
            .await
            .context("failed to parse booking store response")?;

        Ok(CreateOutcome {
            accepted: body.status,
            message: body.message,
        })
    }

    async fn list_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        let resp = self
            .client
            .get(self.url("/booking"))
            .send()
            .await
            .context("failed to call booking list endpoint")?;

        let body: Envelope<Vec<Booking>> = resp
            .json()
            .await
            .context("failed to parse booking list response")?;

        if !body.status {
            anyhow::bail!(
                "booking list rejected: {}",
                body.message.unwrap_or_else(|| "no message".to_string())
            );
        }

        Ok(body.data.unwrap_or_default())
    }

    async fn update_status(&self, id: i64, status: BookingStatus) -> anyhow::Result<bool> {
        let resp = self
            .client
            .post(self.url(&format!("/bookings/status/{id}")))
            .json(&serde_json::json!({ "status": status.as_str() }))
            .send()
            .await
            .context("failed to call booking status endpoint")?;

        let body: Envelope<serde_json::Value> = resp
            .json()
            .await
            .context("failed to parse booking status response")?;

        Ok(body.status)
    }

    async fn mark_read(&self, id: i64) -> anyhow::Result<bool> {
        let resp = self
            .client
            .post(self.url(&format!("/booking/mark-read/{id}")))
            .send()
            .await
            .context("failed to call mark-read endpoint")?;

        let body: Envelope<serde_json::Value> = resp
            .json()
            .await
            .context("failed to parse mark-read response")?;

        Ok(body.status)
    }
}
