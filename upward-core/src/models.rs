use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A tracked habit as returned by the backend.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub habit_type: String,
    pub weight: f64,
    pub target_days_per_week: i32,
    pub nonzero_threshold: f64,
    pub goal_threshold: f64,
    pub stretch_threshold: f64,
    #[serde(default)]
    pub zero_threshold: Option<f64>,
    pub compound_rate: f64,
    pub decay_rate: f64,
    pub forgiveness_days: i32,
    pub is_inverted: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Body for creating a habit. `NewHabit::new` fills in the backend defaults.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHabit {
    pub name: String,
    pub habit_type: String,
    pub weight: f64,
    pub target_days_per_week: i32,
    pub nonzero_threshold: f64,
    pub goal_threshold: f64,
    pub stretch_threshold: f64,
    pub zero_threshold: Option<f64>,
    pub compound_rate: f64,
    pub decay_rate: f64,
    pub forgiveness_days: i32,
    pub is_inverted: bool,
}

impl NewHabit {
    pub fn new(
        name: impl Into<String>,
        habit_type: impl Into<String>,
        goal_threshold: f64,
        stretch_threshold: f64,
    ) -> Self {
        Self {
            name: name.into(),
            habit_type: habit_type.into(),
            weight: 1.0,
            target_days_per_week: 5,
            nonzero_threshold: 0.0,
            goal_threshold,
            stretch_threshold,
            zero_threshold: None,
            compound_rate: 1.15,
            decay_rate: 0.9,
            forgiveness_days: 2,
            is_inverted: false,
        }
    }
}

/// Partial habit update; unset fields are left untouched by the backend.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub target_days_per_week: Option<i32>,
    pub nonzero_threshold: Option<f64>,
    pub goal_threshold: Option<f64>,
    pub stretch_threshold: Option<f64>,
    pub zero_threshold: Option<f64>,
    pub compound_rate: Option<f64>,
    pub decay_rate: Option<f64>,
    pub forgiveness_days: Option<i32>,
    pub is_inverted: Option<bool>,
    pub is_active: Option<bool>,
}

/// A value logged for a habit on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHabitEntry {
    pub habit_id: i64,
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitEntry {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    pub value: f64,
    pub created_at: NaiveDateTime,
}

/// Aggregated score for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyScore {
    pub id: i64,
    pub date: NaiveDate,
    pub base_score: f64,
    pub whoop_multiplier: f64,
    pub final_score: f64,
    pub cumulative_score: f64,
    pub created_at: NaiveDateTime,
}

/// Score of a single habit on one day.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitScore {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    pub raw_score: f64,
    pub momentum_multiplier: f64,
    pub final_score: f64,
    #[serde(default)]
    pub weekly_completion_rate: Option<f64>,
    pub created_at: NaiveDateTime,
}

/// Plain acknowledgement returned by mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Authorization URL for connecting the fitness-data account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhoopAuthUrl {
    pub auth_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhoopConnection {
    pub connected: bool,
    #[serde(default)]
    pub has_refresh_token: bool,
}
