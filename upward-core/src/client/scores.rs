//! Score retrieval, recalculation, and weekly progress.

use super::{ApiClient, ApiRequest, DateWindow, QueryParams};
use crate::dates::ApiDate;
use crate::error::Result;
use crate::models::{DailyScore, HabitScore};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize)]
struct RecalculateBody {
    start_date: Option<String>,
    end_date: Option<String>,
}

impl ApiClient {
    pub async fn get_daily_scores(&self, window: &DateWindow) -> Result<Vec<DailyScore>> {
        self.send_json(ApiRequest::get("/scores/daily").query(window.to_query()))
            .await
    }

    pub async fn get_habit_performance(&self, habit_id: i64, days: u32) -> Result<Vec<HabitScore>> {
        let mut query = QueryParams::new();
        query.push("days", days);
        self.send_json(ApiRequest::get(format!("/scores/habits/{}", habit_id)).query(query))
            .await
    }

    /// Ask the backend to recompute scores; unset bounds are left to the backend.
    pub async fn recalculate_scores(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Value> {
        let body = RecalculateBody {
            start_date: start_date.map(|d| d.to_api_date()),
            end_date: end_date.map(|d| d.to_api_date()),
        };
        self.send_json(ApiRequest::post("/scores/recalculate").json(&body)?)
            .await
    }

    /// Momentum, streaks, and week-over-week summary.
    pub async fn get_scores_summary(&self) -> Result<Value> {
        self.send_json(ApiRequest::get("/scores/summary")).await
    }

    pub async fn get_all_habit_scores(&self, date: Option<NaiveDate>) -> Result<Vec<HabitScore>> {
        let mut query = QueryParams::new();
        query.push_opt("target_date", date.map(|d| d.to_api_date()));
        self.send_json(ApiRequest::get("/scores/habits").query(query))
            .await
    }

    pub async fn get_score_trends(&self, days: u32) -> Result<Value> {
        let mut query = QueryParams::new();
        query.push("days", days);
        self.send_json(ApiRequest::get("/scores/trends").query(query))
            .await
    }

    pub async fn get_weekly_progress(&self) -> Result<Value> {
        self.send_json(ApiRequest::get("/notifications/weekly-progress"))
            .await
    }
}
