//! Client library for the Upward Habits backend: request funnel, endpoint
//! surface, and chart configuration for the score views.

pub mod chart;
pub mod client;
mod config;
pub mod dates;
mod error;
mod models;

pub use chart::{ChartKind, ChartOptions};
pub use client::{ApiClient, ApiRequest, DateWindow, Payload, QueryParams, DEFAULT_DAYS};
pub use config::{ClientConfig, API_BASE_ENV, DEFAULT_API_BASE};
pub use dates::{format_date, parse_date};
pub use error::{ClientError, Result, NO_RESPONSE_STATUS};
pub use models::{
    DailyScore, Habit, HabitEntry, HabitScore, HabitUpdate, MessageResponse, NewHabit,
    NewHabitEntry, WhoopAuthUrl, WhoopConnection,
};
