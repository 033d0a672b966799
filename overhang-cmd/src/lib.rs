//! Command implementations for the Overhang CLI.
//!
//! Talks to the same backend as the web client through
//! `overhang_core::api`, persisting the bearer token in a file, and prints
//! the reshaped stats series as text or CSV.

use clap::{Args, Subcommand};
use overhang_core::api::{ApiClient, ApiConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub mod account;
pub mod render;
pub mod sessions;
pub mod stats;
pub mod token_file;

use token_file::{FileTokenStore, TokenPathError};

/// Backend used when neither `--base-url` nor `OVERHANG_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend lives and where the token is kept.
#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Backend base URL
    #[arg(long, env = "OVERHANG_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "OVERHANG_TIMEOUT_SECS", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Token file (default: ~/.overhang/token)
    #[arg(long, env = "OVERHANG_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,
}

impl Connection {
    pub fn token_path(&self) -> Result<PathBuf, TokenPathError> {
        match &self.token_file {
            Some(path) => Ok(path.clone()),
            None => token_file::default_token_path(),
        }
    }

    pub fn client(&self) -> anyhow::Result<ApiClient> {
        let config = ApiConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        let store = FileTokenStore::new(self.token_path()?);
        Ok(ApiClient::new(config, Arc::new(store)))
    }
}

/// Date-window flags shared by the stats subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Restrict to one location
    #[arg(long)]
    pub location_id: Option<i64>,

    /// week, month or all
    #[arg(long, default_value = "all")]
    pub period: String,

    /// Custom range start (YYYY-MM-DD); overrides --period
    #[arg(long)]
    pub start_date: Option<String>,

    /// Custom range end (YYYY-MM-DD); overrides --period
    #[arg(long)]
    pub end_date: Option<String>,

    /// Whole network instead of your own climbs
    #[arg(long)]
    pub aggregate: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and store the token
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, env = "OVERHANG_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and store the token
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, env = "OVERHANG_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        home_location_id: Option<i64>,
    },

    /// Forget the stored token
    Logout,

    /// Show the signed-in user
    Me,

    /// Update home location and/or default grade
    Settings {
        #[arg(long)]
        home_location_id: Option<i64>,

        /// One of VB, V0, V3, V4-V6, V6-V8, V7-V10
        #[arg(long)]
        default_grade: Option<String>,
    },

    /// List gym locations
    Locations {
        #[arg(long)]
        csv: bool,
    },

    /// List your sessions with a summary
    Sessions {
        #[arg(long)]
        csv: bool,
    },

    /// Delete one of your sessions
    DeleteSession {
        id: i64,
    },

    /// Log a session
    LogSession {
        #[arg(long)]
        location_id: i64,

        /// Session date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,

        /// GRADE:ATTEMPTS:SENDS, repeatable, e.g. --grade V3:5:2
        #[arg(long = "grade", required = true)]
        grades: Vec<String>,

        /// 1-10
        #[arg(long)]
        rating: Option<u8>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Charts as text
    #[command(subcommand)]
    Stats(StatsCommand),
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Sends per grade
    Distribution {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        csv: bool,
    },

    /// Cumulative sends per grade over time
    Progress {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        csv: bool,
    },

    /// Sessions per location across the network
    Aggregate {
        #[arg(long, default_value = "all")]
        period: String,

        #[arg(long)]
        location_id: Option<i64>,

        #[arg(long)]
        csv: bool,
    },

    /// Headline numbers and distribution for one location
    Location {
        slug: String,
    },
}

pub async fn run(connection: Connection, command: Command) -> anyhow::Result<()> {
    let api = connection.client()?;
    match command {
        Command::Login { username, password } => {
            account::login(&api, username, password).await
        }
        Command::Register {
            username,
            password,
            email,
            home_location_id,
        } => account::register(&api, username, password, email, home_location_id).await,
        Command::Logout => {
            account::logout(&api);
            Ok(())
        }
        Command::Me => account::me(&api).await,
        Command::Settings {
            home_location_id,
            default_grade,
        } => account::settings(&api, home_location_id, default_grade.as_deref()).await,
        Command::Locations { csv } => account::locations(&api, csv).await,
        Command::Sessions { csv } => sessions::list(&api, csv).await,
        Command::DeleteSession { id } => sessions::delete(&api, id).await,
        Command::LogSession {
            location_id,
            date,
            grades,
            rating,
            notes,
        } => {
            sessions::log_session(&api, location_id, date.as_deref(), &grades, rating, notes).await
        }
        Command::Stats(stats) => match stats {
            StatsCommand::Distribution { filter, csv } => {
                stats::distribution(&api, &filter, csv).await
            }
            StatsCommand::Progress { filter, csv } => stats::progress(&api, &filter, csv).await,
            StatsCommand::Aggregate {
                period,
                location_id,
                csv,
            } => stats::aggregate(&api, &period, location_id, csv).await,
            StatsCommand::Location { slug } => stats::location(&api, &slug).await,
        },
    }
}
