//! Pass-through calls for the WHOOP fitness-data integration.

use super::{ApiClient, ApiRequest, DateWindow};
use crate::error::Result;
use crate::models::{WhoopAuthUrl, WhoopConnection};
use serde_json::{json, Value};

impl ApiClient {
    /// Authorization URL the user must visit to link an account.
    pub async fn connect_whoop(&self) -> Result<WhoopAuthUrl> {
        self.send_json(ApiRequest::get("/auth/whoop")).await
    }

    pub async fn check_whoop_status(&self) -> Result<WhoopConnection> {
        self.send_json(ApiRequest::get("/auth/whoop/status")).await
    }

    /// Trigger a sync of the trailing `days` days.
    pub async fn sync_whoop_data(&self, days: u32) -> Result<Value> {
        self.send_json(ApiRequest::post("/whoop/sync").json(&json!({ "days": days }))?)
            .await
    }

    pub async fn get_whoop_data(&self, window: &DateWindow) -> Result<Value> {
        self.send_json(ApiRequest::get("/whoop/data").query(window.to_query()))
            .await
    }

    /// Sync coverage over the last 30 days.
    pub async fn get_whoop_sync_status(&self) -> Result<Value> {
        self.send_json(ApiRequest::get("/whoop/status")).await
    }
}
