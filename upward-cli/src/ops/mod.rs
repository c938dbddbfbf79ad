mod chart;
mod habits;
mod output;
mod scores;
pub mod ui;
mod whoop;

pub use chart::{show_colors, show_config};
pub use habits::{
    add_entries_batch, add_entry, create_habit, delete_habit, entry_history, list_entries,
    list_habits, update_habit,
};
pub use output::OutputFormat;
pub use scores::{
    all_habit_scores, daily_scores, habit_performance, recalculate, summary, trends,
    weekly_progress,
};
pub use whoop::{
    connect as whoop_connect, data as whoop_data, status as whoop_status, sync as whoop_sync,
    sync_status as whoop_sync_status,
};
