//! Habit and habit-entry commands.

use super::output::{print_json, OutputFormat};
use super::ui::{
    format_active, format_score, print_empty, print_header, print_hint, print_kv, print_success,
    print_table_header, print_table_row,
};
use anyhow::Context;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use upward_core::{ApiClient, Habit, HabitEntry, HabitUpdate, NewHabit, NewHabitEntry};

pub async fn list_habits(client: &ApiClient, output: OutputFormat) -> anyhow::Result<()> {
    let habits = client.get_habits().await?;

    match output {
        OutputFormat::Json => print_json(&habits)?,
        OutputFormat::Table => {
            print_header("📋 HABITS");
            if habits.is_empty() {
                print_empty("No habits yet. Use 'habits create' to add one.");
                return Ok(());
            }
            print_table_header(&[
                ("ID", 6),
                ("NAME", 24),
                ("TYPE", 12),
                ("GOAL", 8),
                ("STATUS", 10),
            ]);
            for h in &habits {
                print_table_row(&[
                    (h.id.to_string().as_str(), 6),
                    (h.name.as_str(), 24),
                    (h.habit_type.as_str(), 12),
                    (format_score(h.goal_threshold).as_str(), 8),
                    (format_active(h.is_active).as_str(), 10),
                ]);
            }
            println!();
        }
    }
    Ok(())
}

fn print_habit(habit: &Habit) {
    print_kv("ID", &habit.id.to_string());
    print_kv("Name", &habit.name);
    print_kv("Type", &habit.habit_type);
    print_kv("Weight", &format_score(habit.weight));
    print_kv("Target days/week", &habit.target_days_per_week.to_string());
    print_kv(
        "Thresholds",
        &format!(
            "nonzero {} / goal {} / stretch {}",
            habit.nonzero_threshold, habit.goal_threshold, habit.stretch_threshold
        ),
    );
    print_kv("Inverted", &habit.is_inverted.to_string());
    print_kv("Status", &format_active(habit.is_active));
}

pub async fn create_habit(
    client: &ApiClient,
    habit: NewHabit,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let created = client.create_habit(&habit).await?;
    match output {
        OutputFormat::Json => print_json(&created)?,
        OutputFormat::Table => {
            print_success(&format!("Created habit '{}'", created.name));
            print_habit(&created);
        }
    }
    Ok(())
}

pub async fn update_habit(
    client: &ApiClient,
    habit_id: i64,
    updates: HabitUpdate,
    output: OutputFormat,
) -> anyhow::Result<()> {
    if updates == HabitUpdate::default() {
        anyhow::bail!("nothing to update; pass at least one field");
    }
    let updated = client.update_habit(habit_id, &updates).await?;
    match output {
        OutputFormat::Json => print_json(&updated)?,
        OutputFormat::Table => {
            print_success(&format!("Updated habit {}", habit_id));
            print_habit(&updated);
        }
    }
    Ok(())
}

pub async fn delete_habit(
    client: &ApiClient,
    habit_id: i64,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let resp = client.delete_habit(habit_id).await?;
    match output {
        OutputFormat::Json => print_json(&resp)?,
        OutputFormat::Table => print_success(&resp.message),
    }
    Ok(())
}

fn print_entries(title: &str, entries: &[HabitEntry]) {
    print_header(title);
    if entries.is_empty() {
        print_empty("No entries recorded.");
        return;
    }
    print_table_header(&[("ID", 6), ("HABIT", 8), ("DATE", 12), ("VALUE", 10)]);
    for e in entries {
        print_table_row(&[
            (e.id.to_string().as_str(), 6),
            (e.habit_id.to_string().as_str(), 8),
            (e.date.to_string().as_str(), 12),
            (format_score(e.value).as_str(), 10),
        ]);
    }
    println!();
}

pub async fn list_entries(
    client: &ApiClient,
    date: Option<NaiveDate>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let entries = client.get_habit_entries(date).await?;
    match output {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Table => {
            let title = match date {
                Some(d) => format!("📝 ENTRIES {}", d),
                None => "📝 TODAY'S ENTRIES".to_string(),
            };
            print_entries(&title, &entries);
        }
    }
    Ok(())
}

pub async fn add_entry(
    client: &ApiClient,
    entry: NewHabitEntry,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let created = client.create_habit_entry(&entry).await?;
    match output {
        OutputFormat::Json => print_json(&created)?,
        OutputFormat::Table => {
            print_success(&format!(
                "Logged {} for habit {} on {}",
                created.value, created.habit_id, created.date
            ));
            print_hint("Scores are recomputed by the backend; use 'scores daily' to view them.");
        }
    }
    Ok(())
}

/// Read a JSON array of entries from `file` and submit it as one batch.
pub async fn add_entries_batch(
    client: &ApiClient,
    file: PathBuf,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let content = fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let entries: Vec<NewHabitEntry> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON list of entries", file.display()))?;
    let resp = client.create_habit_entries_batch(&entries).await?;
    match output {
        OutputFormat::Json => print_json(&resp)?,
        OutputFormat::Table => print_success(&resp.message),
    }
    Ok(())
}

pub async fn entry_history(
    client: &ApiClient,
    habit_id: i64,
    days: u32,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let entries = client.get_habit_entries_by_id(habit_id, days).await?;
    match output {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Table => print_entries(
            &format!("📝 HABIT {} · LAST {} DAYS", habit_id, days),
            &entries,
        ),
    }
    Ok(())
}
