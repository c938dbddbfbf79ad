//! Score and progress commands.

use super::output::{print_json, print_object, OutputFormat};
use super::ui::{
    format_score, print_empty, print_header, print_success, print_table_header, print_table_row,
};
use chrono::NaiveDate;
use upward_core::{ApiClient, DateWindow, HabitScore};

pub async fn daily_scores(
    client: &ApiClient,
    window: DateWindow,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let scores = client.get_daily_scores(&window).await?;
    match output {
        OutputFormat::Json => print_json(&scores)?,
        OutputFormat::Table => {
            print_header("📈 DAILY SCORES");
            if scores.is_empty() {
                print_empty("No scores in this range.");
                return Ok(());
            }
            print_table_header(&[
                ("DATE", 12),
                ("BASE", 8),
                ("WHOOP", 8),
                ("FINAL", 8),
                ("TOTAL", 10),
            ]);
            for s in &scores {
                print_table_row(&[
                    (s.date.to_string().as_str(), 12),
                    (format_score(s.base_score).as_str(), 8),
                    (format_score(s.whoop_multiplier).as_str(), 8),
                    (format_score(s.final_score).as_str(), 8),
                    (format_score(s.cumulative_score).as_str(), 10),
                ]);
            }
            println!();
        }
    }
    Ok(())
}

fn print_habit_scores(title: &str, scores: &[HabitScore]) {
    print_header(title);
    if scores.is_empty() {
        print_empty("No habit scores recorded.");
        return;
    }
    print_table_header(&[
        ("DATE", 12),
        ("HABIT", 6),
        ("RAW", 8),
        ("MOMENTUM", 10),
        ("FINAL", 8),
        ("WEEK %", 8),
    ]);
    for s in scores {
        let weekly = s
            .weekly_completion_rate
            .map(|r| format!("{:.0}", r * 100.0))
            .unwrap_or_else(|| "-".into());
        print_table_row(&[
            (s.date.to_string().as_str(), 12),
            (s.habit_id.to_string().as_str(), 6),
            (format_score(s.raw_score).as_str(), 8),
            (format_score(s.momentum_multiplier).as_str(), 10),
            (format_score(s.final_score).as_str(), 8),
            (weekly.as_str(), 8),
        ]);
    }
    println!();
}

pub async fn habit_performance(
    client: &ApiClient,
    habit_id: i64,
    days: u32,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let scores = client.get_habit_performance(habit_id, days).await?;
    match output {
        OutputFormat::Json => print_json(&scores)?,
        OutputFormat::Table => {
            print_habit_scores(&format!("🎯 HABIT {} PERFORMANCE", habit_id), &scores)
        }
    }
    Ok(())
}

pub async fn recalculate(
    client: &ApiClient,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let result = client.recalculate_scores(start_date, end_date).await?;
    match output {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => {
            let msg = result["message"].as_str().unwrap_or("Scores recalculated");
            print_success(msg);
        }
    }
    Ok(())
}

pub async fn summary(client: &ApiClient, output: OutputFormat) -> anyhow::Result<()> {
    let summary = client.get_scores_summary().await?;
    match output {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Table => {
            print_header("🏆 SCORE SUMMARY");
            print_object(&summary);
            println!();
        }
    }
    Ok(())
}

pub async fn all_habit_scores(
    client: &ApiClient,
    date: Option<NaiveDate>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let scores = client.get_all_habit_scores(date).await?;
    match output {
        OutputFormat::Json => print_json(&scores)?,
        OutputFormat::Table => print_habit_scores("🎯 HABIT SCORES", &scores),
    }
    Ok(())
}

pub async fn trends(client: &ApiClient, days: u32, output: OutputFormat) -> anyhow::Result<()> {
    let trends = client.get_score_trends(days).await?;
    match output {
        OutputFormat::Json => print_json(&trends)?,
        OutputFormat::Table => {
            print_header(&format!("📊 TRENDS · {} DAYS", days));
            print_object(&trends);
            println!();
        }
    }
    Ok(())
}

pub async fn weekly_progress(client: &ApiClient, output: OutputFormat) -> anyhow::Result<()> {
    let progress = client.get_weekly_progress().await?;
    match output {
        OutputFormat::Json => print_json(&progress)?,
        OutputFormat::Table => {
            print_header("🗓 WEEKLY PROGRESS");
            print_object(&progress);
            println!();
        }
    }
    Ok(())
}
