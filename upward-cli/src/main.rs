mod ops;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use ops::{ui::print_error, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upward_core::{
    parse_date, ApiClient, ChartKind, ClientConfig, ClientError, DateWindow, HabitUpdate,
    NewHabit, NewHabitEntry, API_BASE_ENV, DEFAULT_DAYS,
};

/// CLI wrapper around the Upward Habits HTTP API.
#[derive(Parser)]
#[command(name = "upward", author, version, about = "CLI for the Upward Habits API")]
struct Cli {
    /// API root, e.g. http://localhost:8000/api
    #[arg(long, env = API_BASE_ENV)]
    api_base: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage habits
    #[command(subcommand)]
    Habits(HabitCommands),
    /// Log and inspect habit entries
    #[command(subcommand)]
    Entries(EntryCommands),
    /// Read and recompute scores
    #[command(subcommand)]
    Scores(ScoreCommands),
    /// Show this week's progress for every habit
    Progress,
    /// WHOOP fitness-data integration
    #[command(subcommand)]
    Whoop(WhoopCommands),
    /// Chart configuration for the score views
    #[command(subcommand)]
    Chart(ChartCommands),
}

#[derive(Subcommand)]
enum HabitCommands {
    /// List habits
    List,
    /// Create a habit
    Create(CreateHabitArgs),
    /// Update fields of a habit
    Update {
        id: i64,
        #[command(flatten)]
        fields: UpdateHabitArgs,
    },
    /// Deactivate a habit
    Delete { id: i64 },
}

#[derive(Args)]
struct CreateHabitArgs {
    #[arg(long)]
    name: String,
    /// Habit type, e.g. duration, count, distance
    #[arg(long = "type")]
    habit_type: String,
    #[arg(long)]
    goal: f64,
    #[arg(long)]
    stretch: f64,
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    target_days: Option<i32>,
    #[arg(long)]
    nonzero: Option<f64>,
    #[arg(long)]
    zero: Option<f64>,
    #[arg(long)]
    compound_rate: Option<f64>,
    #[arg(long)]
    decay_rate: Option<f64>,
    #[arg(long)]
    forgiveness_days: Option<i32>,
    /// Lower values are better (e.g. screen time)
    #[arg(long, default_value_t = false)]
    inverted: bool,
}

impl CreateHabitArgs {
    fn into_new_habit(self) -> NewHabit {
        let mut habit = NewHabit::new(self.name, self.habit_type, self.goal, self.stretch);
        if let Some(v) = self.weight {
            habit.weight = v;
        }
        if let Some(v) = self.target_days {
            habit.target_days_per_week = v;
        }
        if let Some(v) = self.nonzero {
            habit.nonzero_threshold = v;
        }
        if let Some(v) = self.compound_rate {
            habit.compound_rate = v;
        }
        if let Some(v) = self.decay_rate {
            habit.decay_rate = v;
        }
        if let Some(v) = self.forgiveness_days {
            habit.forgiveness_days = v;
        }
        habit.zero_threshold = self.zero;
        habit.is_inverted = self.inverted;
        habit
    }
}

#[derive(Args)]
struct UpdateHabitArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    target_days: Option<i32>,
    #[arg(long)]
    nonzero: Option<f64>,
    #[arg(long)]
    goal: Option<f64>,
    #[arg(long)]
    stretch: Option<f64>,
    #[arg(long)]
    zero: Option<f64>,
    #[arg(long)]
    compound_rate: Option<f64>,
    #[arg(long)]
    decay_rate: Option<f64>,
    #[arg(long)]
    forgiveness_days: Option<i32>,
    #[arg(long)]
    inverted: Option<bool>,
    #[arg(long)]
    active: Option<bool>,
}

impl From<UpdateHabitArgs> for HabitUpdate {
    fn from(a: UpdateHabitArgs) -> Self {
        HabitUpdate {
            name: a.name,
            weight: a.weight,
            target_days_per_week: a.target_days,
            nonzero_threshold: a.nonzero,
            goal_threshold: a.goal,
            stretch_threshold: a.stretch,
            zero_threshold: a.zero,
            compound_rate: a.compound_rate,
            decay_rate: a.decay_rate,
            forgiveness_days: a.forgiveness_days,
            is_inverted: a.inverted,
            is_active: a.active,
        }
    }
}

#[derive(Subcommand)]
enum EntryCommands {
    /// List entries for a day (today by default)
    List {
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Log a value for a habit
    Add {
        #[arg(long)]
        habit: i64,
        #[arg(long)]
        value: f64,
        /// Defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Submit a JSON file holding a list of entries
    Batch { file: PathBuf },
    /// Entries of one habit over a trailing window
    History {
        habit: i64,
        #[arg(long, default_value_t = DEFAULT_DAYS)]
        days: u32,
    },
}

/// Explicit dates win over `--days`.
#[derive(Args)]
struct WindowArgs {
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date)]
    end: Option<NaiveDate>,
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    days: u32,
}

impl From<WindowArgs> for DateWindow {
    fn from(a: WindowArgs) -> Self {
        let mut window = DateWindow::days(a.days);
        if let Some(start) = a.start {
            window = window.with_start(&start);
        }
        if let Some(end) = a.end {
            window = window.with_end(&end);
        }
        window
    }
}

#[derive(Subcommand)]
enum ScoreCommands {
    /// Daily scores over a date range or trailing window
    Daily(WindowArgs),
    /// Performance of one habit
    Habit {
        id: i64,
        #[arg(long, default_value_t = DEFAULT_DAYS)]
        days: u32,
    },
    /// Recompute scores on the backend
    Recalculate {
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },
    /// Momentum, streaks, and week-over-week summary
    Summary,
    /// Scores of every habit on one day (today by default)
    All {
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Trend statistics
    Trends {
        #[arg(long, default_value_t = DEFAULT_DAYS)]
        days: u32,
    },
}

#[derive(Subcommand)]
enum WhoopCommands {
    /// Print the authorization URL
    Connect,
    /// Check whether an account is connected
    Status,
    /// Pull recent data into the backend
    Sync {
        #[arg(long, default_value_t = DEFAULT_DAYS)]
        days: u32,
    },
    /// Stored fitness data
    Data(WindowArgs),
    /// Sync coverage over the last 30 days
    SyncStatus,
}

#[derive(Subcommand)]
enum ChartCommands {
    /// Print the options for score, cumulative, or habit charts
    Config { kind: ChartKind },
    /// Print dataset colors
    Colors { count: usize },
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = client_config(cli.api_base);
    debug!(api_base = %config.api_base, "using api");
    let client = ApiClient::new(config)?;
    let output = cli.output;

    match cli.command {
        Commands::Habits(cmd) => match cmd {
            HabitCommands::List => ops::list_habits(&client, output).await?,
            HabitCommands::Create(args) => {
                ops::create_habit(&client, args.into_new_habit(), output).await?
            }
            HabitCommands::Update { id, fields } => {
                ops::update_habit(&client, id, fields.into(), output).await?
            }
            HabitCommands::Delete { id } => ops::delete_habit(&client, id, output).await?,
        },
        Commands::Entries(cmd) => match cmd {
            EntryCommands::List { date } => ops::list_entries(&client, date, output).await?,
            EntryCommands::Add { habit, value, date } => {
                let entry = NewHabitEntry {
                    habit_id: habit,
                    date: date.unwrap_or_else(|| Local::now().date_naive()),
                    value,
                };
                ops::add_entry(&client, entry, output).await?
            }
            EntryCommands::Batch { file } => ops::add_entries_batch(&client, file, output).await?,
            EntryCommands::History { habit, days } => {
                ops::entry_history(&client, habit, days, output).await?
            }
        },
        Commands::Scores(cmd) => match cmd {
            ScoreCommands::Daily(window) => {
                ops::daily_scores(&client, window.into(), output).await?
            }
            ScoreCommands::Habit { id, days } => {
                ops::habit_performance(&client, id, days, output).await?
            }
            ScoreCommands::Recalculate { start, end } => {
                ops::recalculate(&client, start, end, output).await?
            }
            ScoreCommands::Summary => ops::summary(&client, output).await?,
            ScoreCommands::All { date } => ops::all_habit_scores(&client, date, output).await?,
            ScoreCommands::Trends { days } => ops::trends(&client, days, output).await?,
        },
        Commands::Progress => ops::weekly_progress(&client, output).await?,
        Commands::Whoop(cmd) => match cmd {
            WhoopCommands::Connect => ops::whoop_connect(&client, output).await?,
            WhoopCommands::Status => ops::whoop_status(&client, output).await?,
            WhoopCommands::Sync { days } => ops::whoop_sync(&client, days, output).await?,
            WhoopCommands::Data(window) => ops::whoop_data(&client, window.into(), output).await?,
            WhoopCommands::SyncStatus => ops::whoop_sync_status(&client, output).await?,
        },
        Commands::Chart(cmd) => match cmd {
            ChartCommands::Config { kind } => ops::show_config(kind)?,
            ChartCommands::Colors { count } => ops::show_colors(count, output)?,
        },
    }

    Ok(())
}

/// Explicit `--api-base` wins; otherwise the environment or the local default.
fn client_config(api_base: Option<String>) -> ClientConfig {
    match api_base {
        Some(base) if !base.trim().is_empty() => ClientConfig::new(base.trim()),
        _ => ClientConfig::from_env(),
    }
}

/// One-line message; API failures carry their status, unreachable servers say so.
fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(e @ ClientError::Api { .. }) => format!("{} (status {})", e.message(), e.status()),
        Some(e @ ClientError::Transport { .. }) => {
            format!("{} (is the backend running?)", e.message())
        }
        _ => format!("{:#}", err),
    }
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
