use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_PERIOD_MINUTES, DEFAULT_PERIODS};
use crate::event::types::SyncStatus;
use crate::fixture::types::Venue;

#[derive(Parser)]
#[command(name = "pitchside")]
#[command(about = "Match, roster and live event tracking for youth football", long_about = None)]
pub struct Cli {
    /// Database file (defaults to `PITCHSIDE_DB`, then ./data/pitchside.sqlite3)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to the terminal
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in with the configured coach credential
    Login {
        /// Defaults to the configured coach
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: String,
    },

    /// Forget the logged-in user
    Logout,

    /// Create, list and delete teams
    #[command(subcommand)]
    Team(TeamCommand),

    /// Manage a team's roster
    #[command(subcommand)]
    Player(PlayerCommand),

    /// Manage seasons
    #[command(subcommand)]
    Season(SeasonCommand),

    /// Manage a team's event buttons
    #[command(subcommand)]
    EventType(EventTypeCommand),

    /// Schedule matches and run the match clock
    #[command(subcommand)]
    Match(MatchCommand),

    /// Record and review match events
    #[command(subcommand)]
    Event(EventCommand),

    /// Show season statistics for a team
    Stats {
        #[arg(long)]
        team: i64,

        /// Defaults to the current season
        #[arg(long)]
        season: Option<i64>,

        /// Only this player
        #[arg(long)]
        player: Option<i64>,
    },

    /// Generate and list season awards
    #[command(subcommand)]
    Awards(AwardsCommand),
}

impl Command {
    /// Commands that change stored data need a logged-in coach.
    pub fn requires_login(&self) -> bool {
        match self {
            Command::Login { .. } | Command::Logout | Command::Stats { .. } => false,
            Command::Team(command) => !matches!(command, TeamCommand::List),
            Command::Player(command) => !matches!(command, PlayerCommand::List { .. }),
            Command::Season(command) => {
                !matches!(command, SeasonCommand::List | SeasonCommand::Current)
            }
            Command::EventType(command) => !matches!(command, EventTypeCommand::List { .. }),
            Command::Match(command) => !matches!(
                command,
                MatchCommand::List { .. } | MatchCommand::Clock { .. } | MatchCommand::Watch { .. }
            ),
            Command::Event(command) => !matches!(command, EventCommand::List { .. }),
            Command::Awards(command) => !matches!(command, AwardsCommand::List { .. }),
        }
    }
}

#[derive(Subcommand)]
pub enum TeamCommand {
    Create {
        name: String,

        #[arg(long)]
        age_group: Option<String>,

        /// Do not install the default event buttons
        #[arg(long)]
        no_defaults: bool,
    },
    List,
    /// Delete a team with its players, matches, events, statistics and awards
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum PlayerCommand {
    Add {
        #[arg(long)]
        team: i64,

        name: String,

        #[arg(long)]
        number: u32,

        #[arg(long)]
        position: Option<String>,
    },
    List {
        #[arg(long)]
        team: i64,
    },
    /// Remove a player, reversing the statistics of their events
    Remove { id: i64 },
}

#[derive(Subcommand)]
pub enum SeasonCommand {
    Create {
        name: String,

        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,

        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: NaiveDate,

        /// Make this the current season
        #[arg(long)]
        current: bool,
    },
    List,
    Current,
    SetCurrent { id: i64 },
}

#[derive(Subcommand)]
pub enum EventTypeCommand {
    Create(CreateEventTypeArgs),
    List {
        #[arg(long)]
        team: i64,

        /// Include switched-off event types
        #[arg(long)]
        all: bool,
    },
    Enable { id: i64 },
    Disable { id: i64 },
    /// Install the default catalogue for a team that has none
    Seed {
        #[arg(long)]
        team: i64,
    },
}

#[derive(Args)]
pub struct CreateEventTypeArgs {
    #[arg(long)]
    pub team: i64,

    pub name: String,

    #[arg(long, default_value = "")]
    pub icon: String,

    #[arg(long, default_value = "")]
    pub color: String,

    /// Must be recorded against a player
    #[arg(long)]
    pub requires_player: bool,

    /// Mark as a negative event (cards, conceded goals)
    #[arg(long)]
    pub negative: bool,

    #[arg(long)]
    pub sort_order: Option<i64>,

    /// goal, assist, yellow_card, red_card or none; classified from the name when omitted
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Subcommand)]
pub enum MatchCommand {
    Create {
        #[arg(long)]
        team: i64,

        opponent: String,

        /// RFC 3339 timestamp, defaults to now
        #[arg(long)]
        kickoff: Option<DateTime<Utc>>,

        #[arg(long, default_value = "home")]
        venue: Venue,

        #[arg(long, default_value_t = DEFAULT_PERIODS)]
        periods: u32,

        #[arg(long, default_value_t = DEFAULT_PERIOD_MINUTES)]
        period_minutes: u32,
    },
    List {
        #[arg(long)]
        team: i64,
    },
    /// Start the next period (or the given one)
    StartPeriod {
        id: i64,

        #[arg(long)]
        period: Option<u32>,
    },
    /// End the period in play
    EndPeriod { id: i64 },
    /// Show the match clock and what comes next
    Clock { id: i64 },
    /// Keep the match clock on screen until ctrl-c
    Watch { id: i64 },
    /// Enter the final score and mark the match completed
    Score {
        id: i64,
        team_score: u32,
        opponent_score: u32,
    },
    /// Delete a match with its periods and events
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum EventCommand {
    /// Record an event in the period in play
    Record {
        #[arg(long = "match")]
        match_id: i64,

        /// Event type id
        #[arg(long = "type")]
        event_type: i64,

        /// Needed when the event type is recorded against a player
        #[arg(long)]
        player: Option<i64>,

        /// Offset in seconds, defaults to the match clock
        #[arg(long)]
        elapsed: Option<i64>,
    },
    /// Delete an event and reverse its statistics
    Delete { id: i64 },
    List {
        #[arg(long = "match")]
        match_id: i64,
    },
    /// Set the sync flag of an event
    Sync { id: i64, status: SyncStatus },
}

#[derive(Subcommand)]
pub enum AwardsCommand {
    /// Derive awards from the season's statistics (appends on every run)
    Generate {
        #[arg(long)]
        team: i64,

        /// Defaults to the current season
        #[arg(long)]
        season: Option<i64>,
    },
    List {
        #[arg(long)]
        team: i64,

        #[arg(long)]
        season: Option<i64>,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn reads_do_not_need_login() {
        let cli = Cli::try_parse_from(["pitchside", "match", "clock", "3"]).unwrap();
        assert!(!cli.command.requires_login());

        let cli = Cli::try_parse_from([
            "pitchside", "event", "record", "--match", "3", "--type", "1", "--player", "7",
        ])
        .unwrap();
        assert!(cli.command.requires_login());
    }

    #[test]
    fn enums_parse_from_text() {
        let cli =
            Cli::try_parse_from(["pitchside", "--json", "event", "sync", "4", "synced"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Command::Event(EventCommand::Sync {
                id: 4,
                status: SyncStatus::Synced
            })
        ));
    }
}
