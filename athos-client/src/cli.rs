//! Command-line front end over the API callers.

use crate::models::auth::SignupRequest;
use crate::models::dashboard::DashboardDayQuery;
use crate::models::workout::WorkoutListQuery;
use crate::models::workout_draft::{
    parse_start_ts, CardioWorkoutDraft, StrengthSetRow, StrengthWorkoutDraft,
};
use crate::services::ResponseEnvelope;
use crate::AppState;
use athos_core::{ClientError, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use secrecy::Secret;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

/// Environment variable read when `--password` is not given.
pub const PASSWORD_ENV: &str = "ATHOS_PASSWORD";

#[derive(Debug, Parser)]
#[command(name = "athos", version, about = "Command-line client for the ATHOS fitness API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the access token
    Login {
        #[arg(long)]
        email: String,
        /// Read from `ATHOS_PASSWORD` when omitted
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// Read from `ATHOS_PASSWORD` when omitted
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: String,
        #[arg(long)]
        birth_year: i32,
        #[arg(long)]
        birth_month: u8,
    },
    /// Forget the stored access token
    Logout,
    /// Show the signed-in user
    Me,
    /// Check backend health
    Health,
    /// Show one day's workouts and telemetry
    Dashboard {
        /// Local date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        top_k: Option<u32>,
        /// Print the response as received instead of the typed view
        #[arg(long)]
        raw: bool,
    },
    /// Record and browse workouts
    Workouts {
        #[command(subcommand)]
        command: WorkoutCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum WorkoutCommand {
    /// List workouts started on a local date
    List {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one workout
    Show { id: Uuid },
    /// Record a strength workout
    Strength {
        /// A set as `exercise[:weight[:reps]]`; repeatable
        #[arg(long = "set", required = true)]
        sets: Vec<String>,
        #[arg(long, default_value = "")]
        title: String,
        /// Start time, RFC 3339 or local `YYYY-MM-DDTHH:MM`
        #[arg(long)]
        start: Option<String>,
    },
    /// Record a cardio workout
    Cardio {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        duration: String,
        #[arg(long, default_value = "")]
        distance_m: String,
        #[arg(long, default_value = "")]
        avg_hr: String,
        #[arg(long, default_value = "")]
        calories: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        start: Option<String>,
    },
}

/// What a command produced, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub body: Value,
    pub request_id: Option<String>,
}

impl CommandOutput {
    fn from_envelope<T: Serialize>(envelope: ResponseEnvelope<T>) -> Result<Self> {
        Ok(Self {
            body: serde_json::to_value(envelope.data)?,
            request_id: envelope.request_id,
        })
    }

    fn local(body: Value) -> Self {
        Self {
            body,
            request_id: None,
        }
    }
}

pub async fn run(command: Command, state: &AppState) -> Result<CommandOutput> {
    match command {
        Command::Login { email, password } => {
            let envelope = state.auth.login(&email, Secret::new(password)).await?;
            Ok(CommandOutput {
                body: json!({ "status": "signed in", "token_type": envelope.data.token_type }),
                request_id: envelope.request_id,
            })
        }
        Command::Signup {
            email,
            name,
            password,
            birth_year,
            birth_month,
        } => {
            let envelope = state
                .auth
                .signup(SignupRequest {
                    email,
                    name,
                    password: Secret::new(password),
                    birth_year,
                    birth_month,
                })
                .await?;
            Ok(CommandOutput {
                body: json!({ "status": "account created", "token_type": envelope.data.token_type }),
                request_id: envelope.request_id,
            })
        }
        Command::Logout => {
            state.auth.logout().await?;
            Ok(CommandOutput::local(json!({ "status": "signed out" })))
        }
        Command::Me => CommandOutput::from_envelope(state.auth.me().await?),
        Command::Health => CommandOutput::from_envelope(state.health.check().await?),
        Command::Dashboard {
            date,
            limit,
            top_k,
            raw,
        } => {
            let query = DashboardDayQuery {
                date: date.unwrap_or_else(today),
                limit,
                top_k,
            };
            if raw {
                CommandOutput::from_envelope(state.dashboard.day_raw(&query).await?)
            } else {
                CommandOutput::from_envelope(state.dashboard.day(&query).await?)
            }
        }
        Command::Workouts { command } => run_workout(command, state).await,
    }
}

async fn run_workout(command: WorkoutCommand, state: &AppState) -> Result<CommandOutput> {
    match command {
        WorkoutCommand::List { date, limit } => {
            let query = WorkoutListQuery {
                date: date.unwrap_or_else(today),
                limit,
            };
            CommandOutput::from_envelope(state.workouts.list(&query).await?)
        }
        WorkoutCommand::Show { id } => CommandOutput::from_envelope(state.workouts.get(id).await?),
        WorkoutCommand::Strength { sets, title, start } => {
            let draft = StrengthWorkoutDraft {
                title,
                start_ts: parse_start(start.as_deref())?,
                sets: sets.iter().map(|set| parse_set_row(set)).collect(),
            };
            let workout = draft.build()?;
            CommandOutput::from_envelope(state.workouts.create(&workout).await?)
        }
        WorkoutCommand::Cardio {
            activity,
            duration,
            distance_m,
            avg_hr,
            calories,
            title,
            start,
        } => {
            let draft = CardioWorkoutDraft {
                title,
                start_ts: parse_start(start.as_deref())?,
                activity_type: activity,
                duration_seconds: duration,
                distance_m,
                avg_hr,
                calories,
            };
            let workout = draft.build()?;
            CommandOutput::from_envelope(state.workouts.create(&workout).await?)
        }
    }
}

/// Parse `exercise[:weight[:reps]]`.
pub fn parse_set_row(input: &str) -> StrengthSetRow {
    let mut parts = input.splitn(3, ':');
    StrengthSetRow::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

/// Text shown for a failed command: the detail first, then the correlation id.
pub fn render_error(error: &ClientError) -> String {
    match error.request_id() {
        Some(request_id) => format!("{}\nrequest id: {}", error.detail(), request_id),
        None => error.detail(),
    }
}

fn parse_start(start: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    start.map(parse_start_ts).transpose()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
