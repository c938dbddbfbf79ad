//! Habit CRUD and habit-entry endpoints.

use super::{ApiClient, ApiRequest, QueryParams};
use crate::dates::ApiDate;
use crate::error::Result;
use crate::models::{Habit, HabitEntry, HabitUpdate, MessageResponse, NewHabit, NewHabitEntry};
use chrono::NaiveDate;

impl ApiClient {
    pub async fn get_habits(&self) -> Result<Vec<Habit>> {
        self.send_json(ApiRequest::get("/habits/")).await
    }

    pub async fn create_habit(&self, habit: &NewHabit) -> Result<Habit> {
        self.send_json(ApiRequest::post("/habits/").json(habit)?).await
    }

    pub async fn update_habit(&self, habit_id: i64, updates: &HabitUpdate) -> Result<Habit> {
        self.send_json(ApiRequest::put(format!("/habits/{}", habit_id)).json(updates)?)
            .await
    }

    /// The backend deactivates rather than removes the habit.
    pub async fn delete_habit(&self, habit_id: i64) -> Result<MessageResponse> {
        self.send_json(ApiRequest::delete(format!("/habits/{}", habit_id)))
            .await
    }

    /// Entries logged on `date`; the backend defaults to today when unset.
    pub async fn get_habit_entries(&self, date: Option<NaiveDate>) -> Result<Vec<HabitEntry>> {
        let mut query = QueryParams::new();
        query.push_opt("entry_date", date.map(|d| d.to_api_date()));
        self.send_json(ApiRequest::get("/habits/entries").query(query))
            .await
    }

    pub async fn create_habit_entry(&self, entry: &NewHabitEntry) -> Result<HabitEntry> {
        self.send_json(ApiRequest::post("/habits/entries").json(entry)?)
            .await
    }

    /// Create or overwrite several entries in one call.
    pub async fn create_habit_entries_batch(
        &self,
        entries: &[NewHabitEntry],
    ) -> Result<MessageResponse> {
        self.send_json(ApiRequest::post("/habits/entries/batch").json(entries)?)
            .await
    }

    /// Entries of one habit over the trailing `days` days.
    pub async fn get_habit_entries_by_id(
        &self,
        habit_id: i64,
        days: u32,
    ) -> Result<Vec<HabitEntry>> {
        let mut query = QueryParams::new();
        query.push("days", days);
        self.send_json(ApiRequest::get(format!("/habits/entries/{}", habit_id)).query(query))
            .await
    }
}
