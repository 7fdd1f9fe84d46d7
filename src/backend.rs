//! Typed REST client for the vacuum backend.
//!
//! Every operation maps to exactly one endpoint under the configured
//! `/api` root. Non-2xx responses and undecodable bodies are errors; the
//! caller decides whether that sinks a whole aggregation cycle (reads) or
//! turns into a failure signal (writes).

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ConsoleConfig;
use crate::models::{
    CleaningSession, ControlAction, CorrectedLabel, DetectedItem, FeedbackVote, Notification,
    Stats, VacuumStatus,
};

#[derive(Serialize)]
struct ControlRequest {
    action: ControlAction,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedbackRequest {
    item_id: String,
    feedback: FeedbackVote,
    #[serde(skip_serializing_if = "Option::is_none")]
    corrected_type: Option<CorrectedLabel>,
    note: String,
}

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    api_root: String,
}

impl BackendClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: config.api_root(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.api_root, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?
            .error_for_status()
            .with_context(|| format!("GET {url} rejected"))?;

        response
            .json()
            .await
            .with_context(|| format!("GET {url} returned an undecodable body"))
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.api_root, path);
        self.http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?
            .error_for_status()
            .with_context(|| format!("POST {url} rejected"))?;
        Ok(())
    }

    pub async fn vacuum_status(&self) -> Result<VacuumStatus> {
        self.get_json("/vacuum/status").await
    }

    pub async fn detected_items(&self, limit: u32) -> Result<Vec<DetectedItem>> {
        self.get_json(&format!("/items/detected?limit={limit}")).await
    }

    pub async fn valuables(&self) -> Result<Vec<DetectedItem>> {
        self.get_json("/items/valuables").await
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        self.get_json("/notifications").await
    }

    pub async fn stats(&self) -> Result<Stats> {
        self.get_json("/stats").await
    }

    pub async fn sessions(&self, limit: u32) -> Result<Vec<CleaningSession>> {
        self.get_json(&format!("/sessions?limit={limit}")).await
    }

    pub async fn control_vacuum(&self, action: ControlAction) -> Result<()> {
        self.post_json("/vacuum/control", &ControlRequest { action })
            .await
    }

    pub async fn submit_feedback(
        &self,
        item_id: &str,
        feedback: FeedbackVote,
        corrected_type: Option<CorrectedLabel>,
        note: &str,
    ) -> Result<()> {
        let request = FeedbackRequest {
            item_id: item_id.to_string(),
            feedback,
            corrected_type,
            note: note.to_string(),
        };
        self.post_json("/items/feedback", &request).await
    }

    /// Acknowledge one notification. The id travels as a query parameter;
    /// the request carries no body.
    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<()> {
        let url = format!(
            "{}/notifications/mark-read?notification_id={notification_id}",
            self.api_root
        );
        self.http
            .post(&url)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?
            .error_for_status()
            .with_context(|| format!("POST {url} rejected"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn client_for(server: &Server) -> BackendClient {
        BackendClient::new(&ConsoleConfig::new(server.url()))
    }

    #[tokio::test]
    async fn vacuum_status_decodes_wire_shape() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/vacuum/status")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id":"v-1","isActive":true,"battery":85,"location":"Living Room",
                    "mode":"cleaning","valuablesBinCount":3,"dustBinLevel":35,
                    "lastCleaned":"2024-05-01T10:00:00Z","totalAreaCleaned":1250.5}"#,
            )
            .create_async()
            .await;

        let status = client_for(&server)
            .vacuum_status()
            .await
            .expect("status should decode");

        mock.assert_async().await;
        assert!(status.is_active);
        assert_eq!(status.battery, 85);
        assert_eq!(status.mode, crate::models::VacuumMode::Cleaning);
        assert_eq!(status.valuables_bin_count, 3);
    }

    #[tokio::test]
    async fn unrecognized_mode_folds_into_catch_all() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/vacuum/status")
            .with_status(200)
            .with_body(
                r#"{"id":"v-1","isActive":false,"battery":50,"location":"Dock",
                    "mode":"spelunking","valuablesBinCount":0,"dustBinLevel":10,
                    "lastCleaned":"2024-05-01T10:00:00Z","totalAreaCleaned":0.0}"#,
            )
            .create_async()
            .await;

        let status = client_for(&server).vacuum_status().await.unwrap();
        assert_eq!(status.mode, crate::models::VacuumMode::Other);
    }

    #[tokio::test]
    async fn non_2xx_read_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/stats")
            .with_status(500)
            .create_async()
            .await;

        let result = client_for(&server).stats().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn detected_items_passes_limit_through() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/items/detected?limit=20")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let items = client_for(&server).detected_items(20).await.unwrap();
        mock.assert_async().await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn mark_read_posts_query_parameter_without_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/notifications/mark-read?notification_id=n-7")
            .match_body(mockito::Matcher::Exact(String::new()))
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        client_for(&server)
            .mark_notification_read("n-7")
            .await
            .expect("ack should succeed");
        mock.assert_async().await;
    }
}
